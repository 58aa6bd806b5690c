//! Parsing of unified-diff hunks attached to review comments.
//!
//! GitHub returns the diff context of a review comment as a raw `diff_hunk`
//! string: one or more `@@ -a,b +c,d @@` headers, each followed by marked
//! lines. [`parse_diff_hunks`] turns that text into a lazy sequence of
//! [`DiffHunk`] values with old and new line numbers resolved for every line.
//!
//! The parser fails soft. A malformed header opens no hunk and the lines up
//! to the next valid header are skipped. Lines that would run past the range
//! a header declares are dropped, so every line number in a yielded hunk lies
//! inside that hunk's declared range.

use std::fmt;
use std::str::Lines;

use serde::Serialize;
use thiserror::Error;

const HUNK_MARKER: &str = "@@";
const NO_NEWLINE_MARKER: char = '\\';

/// Classification of a single line inside a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffLineKind {
    /// Unchanged line present in both file versions.
    Context,
    /// Line present only in the new file version.
    Added,
    /// Line present only in the old file version.
    Removed,
}

/// One line of a hunk body with its resolved line numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    /// Whether the line is context, added, or removed.
    pub kind: DiffLineKind,
    /// Line number in the old file, absent for added lines.
    pub old_line_number: Option<u32>,
    /// Line number in the new file, absent for removed lines.
    pub new_line_number: Option<u32>,
    /// One-based offset below the first header of the diff text.
    ///
    /// This is the coordinate of GitHub's `position` field: it keeps counting
    /// across later `@@` headers and `\ No newline at end of file` lines.
    pub position_in_hunk: u32,
    /// Line text without its leading marker character.
    pub content: String,
    /// False when the line is followed by `\ No newline at end of file`.
    pub ends_with_newline: bool,
}

/// A parsed `@@ -a,b +c,d @@` region of a unified diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffHunk {
    /// First line of the region in the old file.
    pub old_start: u32,
    /// Number of old-file lines the header declares.
    pub old_length: u32,
    /// First line of the region in the new file.
    pub new_start: u32,
    /// Number of new-file lines the header declares.
    pub new_length: u32,
    /// Section heading following the closing `@@`, if any.
    pub section: Option<String>,
    /// Body lines in input order.
    pub lines: Vec<DiffLine>,
}

impl DiffHunk {
    /// Returns the header this hunk was parsed from.
    ///
    /// # Examples
    ///
    /// ```
    /// use prshape::github::diff_hunk::parse_diff_hunks;
    ///
    /// let hunk = parse_diff_hunks("@@ -3,2 +3,3 @@\n a\n+b\n c")
    ///     .next()
    ///     .expect("one hunk");
    /// assert_eq!(hunk.header().to_string(), "@@ -3,2 +3,3 @@");
    /// ```
    #[must_use]
    pub fn header(&self) -> HunkHeader {
        HunkHeader {
            old_start: self.old_start,
            old_length: self.old_length,
            new_start: self.new_start,
            new_length: self.new_length,
            section: self.section.clone(),
        }
    }
}

/// Numbers carried by a hunk header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkHeader {
    /// First line of the region in the old file.
    pub old_start: u32,
    /// Old-file line count, 1 when omitted.
    pub old_length: u32,
    /// First line of the region in the new file.
    pub new_start: u32,
    /// New-file line count, 1 when omitted.
    pub new_length: u32,
    /// Section heading following the closing `@@`, if any.
    pub section: Option<String>,
}

impl fmt::Display for HunkHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_length, self.new_start, self.new_length
        )?;
        if let Some(section) = &self.section {
            write!(f, " {section}")?;
        }
        Ok(())
    }
}

/// Which side of a hunk header a range belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSide {
    /// The `-a,b` range.
    Old,
    /// The `+c,d` range.
    New,
}

impl fmt::Display for RangeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Old => f.write_str("old"),
            Self::New => f.write_str("new"),
        }
    }
}

/// Reasons a hunk header line cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HunkHeaderError {
    /// The line does not start with `@@ `.
    #[error("hunk header must start with '@@ '")]
    MissingOpeningMarker,

    /// The ranges are not followed by a closing `@@`.
    #[error("hunk header is missing its closing '@@'")]
    MissingClosingMarker,

    /// One of the two ranges is absent or lacks its sign.
    #[error("hunk header is missing the {side} range")]
    MissingRange {
        /// The side whose range is missing.
        side: RangeSide,
    },

    /// Something other than the closing `@@` follows the new range.
    #[error("hunk header has unexpected '{token}' after its ranges")]
    UnexpectedToken {
        /// The first unexpected token.
        token: String,
    },

    /// A start or length is not a non-negative integer.
    #[error("hunk header contains invalid number '{value}'")]
    InvalidNumber {
        /// The offending text.
        value: String,
    },
}

/// Parses a single `@@ -a[,b] +c[,d] @@[ section]` header line.
///
/// # Examples
///
/// ```
/// use prshape::github::diff_hunk::parse_hunk_header;
///
/// let header = parse_hunk_header("@@ -10 +12,4 @@ fn main()").expect("valid header");
/// assert_eq!((header.old_start, header.old_length), (10, 1));
/// assert_eq!((header.new_start, header.new_length), (12, 4));
/// assert_eq!(header.section.as_deref(), Some("fn main()"));
/// ```
///
/// # Errors
///
/// Returns [`HunkHeaderError`] when the markers are missing, either range is
/// absent, extra text sits between the ranges and the closing `@@`, or a
/// number does not parse.
pub fn parse_hunk_header(line: &str) -> Result<HunkHeader, HunkHeaderError> {
    let after_open = line
        .strip_prefix("@@ ")
        .ok_or(HunkHeaderError::MissingOpeningMarker)?;
    let (ranges, trailer) = after_open
        .split_once(" @@")
        .ok_or(HunkHeaderError::MissingClosingMarker)?;

    let mut parts = ranges.split_whitespace();
    let old_range = parts
        .next()
        .and_then(|part| part.strip_prefix('-'))
        .ok_or(HunkHeaderError::MissingRange {
            side: RangeSide::Old,
        })?;
    let new_range = parts
        .next()
        .and_then(|part| part.strip_prefix('+'))
        .ok_or(HunkHeaderError::MissingRange {
            side: RangeSide::New,
        })?;
    if let Some(extra) = parts.next() {
        return Err(HunkHeaderError::UnexpectedToken {
            token: extra.to_owned(),
        });
    }

    let (old_start, old_length) = parse_range(old_range)?;
    let (new_start, new_length) = parse_range(new_range)?;
    let section = Some(trailer.trim()).filter(|text| !text.is_empty());

    Ok(HunkHeader {
        old_start,
        old_length,
        new_start,
        new_length,
        section: section.map(str::to_owned),
    })
}

fn parse_range(range: &str) -> Result<(u32, u32), HunkHeaderError> {
    match range.split_once(',') {
        Some((start, length)) => Ok((parse_number(start)?, parse_number(length)?)),
        None => Ok((parse_number(range)?, 1)),
    }
}

fn parse_number(value: &str) -> Result<u32, HunkHeaderError> {
    value
        .parse()
        .map_err(|_| HunkHeaderError::InvalidNumber {
            value: value.to_owned(),
        })
}

/// Returns a lazy iterator over the hunks contained in `text`.
///
/// # Examples
///
/// ```
/// use prshape::github::diff_hunk::{DiffLineKind, parse_diff_hunks};
///
/// let hunks: Vec<_> = parse_diff_hunks("@@ -1,2 +1,2 @@\n-old\n+new\n same").collect();
/// assert_eq!(hunks.len(), 1);
/// let kinds: Vec<_> = hunks[0].lines.iter().map(|line| line.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![DiffLineKind::Removed, DiffLineKind::Added, DiffLineKind::Context]
/// );
/// ```
#[must_use]
pub fn parse_diff_hunks(text: &str) -> DiffHunkParser<'_> {
    DiffHunkParser::new(text)
}

/// Lazy, single-pass iterator yielding [`DiffHunk`] values.
#[derive(Debug, Clone)]
pub struct DiffHunkParser<'a> {
    lines: Lines<'a>,
    pending: Option<HunkHeader>,
    /// Lines consumed since the first valid header; `None` before it.
    position: Option<u32>,
}

impl<'a> DiffHunkParser<'a> {
    /// Creates a parser over raw diff text.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            pending: None,
            position: None,
        }
    }

    /// Advances to the next valid header, skipping body lines and malformed
    /// headers on the way.
    fn next_header(&mut self) -> Option<HunkHeader> {
        for line in self.lines.by_ref() {
            if let Some(position) = self.position.as_mut() {
                *position = position.saturating_add(1);
            }
            if !line.starts_with(HUNK_MARKER) {
                continue;
            }
            if let Some(header) = header_or_warn(line) {
                if self.position.is_none() {
                    self.position = Some(0);
                }
                return Some(header);
            }
        }
        None
    }
}

impl Iterator for DiffHunkParser<'_> {
    type Item = DiffHunk;

    fn next(&mut self) -> Option<Self::Item> {
        let header = match self.pending.take() {
            Some(header) => header,
            None => self.next_header()?,
        };

        let mut builder = HunkBuilder::new(header);
        for line in self.lines.by_ref() {
            let position = self.position.map_or(1, |current| current.saturating_add(1));
            self.position = Some(position);
            if line.starts_with(HUNK_MARKER) {
                // A malformed header leaves `pending` empty, so the next call
                // skips ahead to the following valid header.
                self.pending = header_or_warn(line);
                return Some(builder.finish());
            }
            builder.push(line, position);
        }
        Some(builder.finish())
    }
}

fn header_or_warn(line: &str) -> Option<HunkHeader> {
    match parse_hunk_header(line) {
        Ok(header) => Some(header),
        Err(error) => {
            tracing::warn!("skipping malformed diff hunk header '{line}': {error}");
            None
        }
    }
}

/// Accumulates body lines for one hunk while tracking both cursors.
struct HunkBuilder {
    header: HunkHeader,
    old_cursor: u32,
    new_cursor: u32,
    old_end: u32,
    new_end: u32,
    overflowed: bool,
    lines: Vec<DiffLine>,
}

impl HunkBuilder {
    fn new(header: HunkHeader) -> Self {
        Self {
            old_cursor: header.old_start,
            new_cursor: header.new_start,
            old_end: header.old_start.saturating_add(header.old_length),
            new_end: header.new_start.saturating_add(header.new_length),
            overflowed: false,
            lines: Vec::new(),
            header,
        }
    }

    fn push(&mut self, line: &str, position: u32) {
        if self.overflowed {
            return;
        }

        let mut chars = line.chars();
        let (kind, content) = match chars.next() {
            Some('+') => (DiffLineKind::Added, chars.as_str()),
            Some('-') => (DiffLineKind::Removed, chars.as_str()),
            Some(NO_NEWLINE_MARKER) => {
                if let Some(previous) = self.lines.last_mut() {
                    previous.ends_with_newline = false;
                }
                return;
            }
            Some(_) => (DiffLineKind::Context, chars.as_str()),
            None => (DiffLineKind::Context, ""),
        };

        if !self.fits(kind) {
            tracing::debug!(
                "dropping diff lines past the declared range of '{}'",
                self.header
            );
            self.overflowed = true;
            return;
        }

        let old_line_number = (kind != DiffLineKind::Added).then_some(self.old_cursor);
        let new_line_number = (kind != DiffLineKind::Removed).then_some(self.new_cursor);
        if old_line_number.is_some() {
            self.old_cursor += 1;
        }
        if new_line_number.is_some() {
            self.new_cursor += 1;
        }

        self.lines.push(DiffLine {
            kind,
            old_line_number,
            new_line_number,
            position_in_hunk: position,
            content: content.to_owned(),
            ends_with_newline: true,
        });
    }

    const fn fits(&self, kind: DiffLineKind) -> bool {
        let old_fits = self.old_cursor < self.old_end;
        let new_fits = self.new_cursor < self.new_end;
        match kind {
            DiffLineKind::Added => new_fits,
            DiffLineKind::Removed => old_fits,
            DiffLineKind::Context => old_fits && new_fits,
        }
    }

    fn finish(self) -> DiffHunk {
        DiffHunk {
            old_start: self.header.old_start,
            old_length: self.header.old_length,
            new_start: self.header.new_start,
            new_length: self.header.new_length,
            section: self.header.section,
            lines: self.lines,
        }
    }
}

#[cfg(test)]
mod tests;
