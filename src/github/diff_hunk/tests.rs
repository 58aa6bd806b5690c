//! Unit tests for diff hunk parsing.

use rstest::rstest;

use super::{
    DiffHunk, DiffLineKind, HunkHeaderError, RangeSide, parse_diff_hunks, parse_hunk_header,
};

fn collect(text: &str) -> Vec<DiffHunk> {
    parse_diff_hunks(text).collect()
}

fn only_hunk(text: &str) -> DiffHunk {
    let mut hunks = collect(text);
    assert_eq!(hunks.len(), 1, "expected exactly one hunk in {text:?}");
    hunks.remove(0)
}

fn line_numbers(hunk: &DiffHunk) -> Vec<(Option<u32>, Option<u32>)> {
    hunk.lines
        .iter()
        .map(|line| (line.old_line_number, line.new_line_number))
        .collect()
}

#[rstest]
#[case::empty("")]
#[case::only_newlines("\n\n")]
#[case::body_without_header(" context\n+added\n-removed")]
fn yields_nothing_without_a_header(#[case] text: &str) {
    assert!(collect(text).is_empty(), "expected no hunks for {text:?}");
}

#[rstest]
fn resolves_line_numbers_for_mixed_hunk() {
    let hunk = only_hunk("@@ -10,3 +10,4 @@\n a\n-b\n+c\n+d");

    assert_eq!(
        (hunk.old_start, hunk.old_length, hunk.new_start, hunk.new_length),
        (10, 3, 10, 4)
    );
    let kinds: Vec<_> = hunk.lines.iter().map(|line| line.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiffLineKind::Context,
            DiffLineKind::Removed,
            DiffLineKind::Added,
            DiffLineKind::Added,
        ]
    );
    assert_eq!(
        line_numbers(&hunk),
        vec![
            (Some(10), Some(10)),
            (Some(11), None),
            (None, Some(11)),
            (None, Some(12)),
        ]
    );
}

#[rstest]
fn strips_marker_from_content() {
    let hunk = only_hunk("@@ -1,2 +1,2 @@\n keep me\n-drop me\n+add me");
    let contents: Vec<_> = hunk.lines.iter().map(|line| line.content.as_str()).collect();
    assert_eq!(contents, vec!["keep me", "drop me", "add me"]);
}

#[rstest]
fn numbers_positions_from_one() {
    let hunk = only_hunk("@@ -1,2 +1,2 @@\n a\n-b\n+c");
    let positions: Vec<_> = hunk.lines.iter().map(|line| line.position_in_hunk).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[rstest]
fn treats_bare_empty_line_as_empty_context() {
    let hunk = only_hunk("@@ -4,3 +4,3 @@\n a\n\n b");
    let second = hunk.lines.get(1).expect("second line should exist");
    assert_eq!(second.kind, DiffLineKind::Context);
    assert_eq!(second.content, "");
    assert_eq!(line_numbers(&hunk).get(2), Some(&(Some(6), Some(6))));
}

#[rstest]
fn ignores_lines_before_first_header() {
    let hunk = only_hunk("diff --git a/x b/x\n+++ b/x\n@@ -1 +1 @@\n-x\n+y");
    assert_eq!(hunk.lines.len(), 2);
    assert_eq!(line_numbers(&hunk), vec![(Some(1), None), (None, Some(1))]);
}

#[rstest]
fn splits_consecutive_hunks() {
    let hunks = collect("@@ -1,1 +1,1 @@\n-a\n+b\n@@ -20,2 +21,2 @@\n c\n d");

    assert_eq!(hunks.len(), 2);
    let second = hunks.get(1).expect("second hunk should exist");
    assert_eq!((second.old_start, second.new_start), (20, 21));
    assert_eq!(
        line_numbers(second),
        vec![(Some(20), Some(21)), (Some(21), Some(22))]
    );
}

#[rstest]
#[case::with_section("@@ -7,5 +9,6 @@ impl Foo\n a", (7, 5, 9, 6), "@@ -7,5 +9,6 @@ impl Foo")]
#[case::omitted_lengths("@@ -3 +4 @@\n-a\n+b", (3, 1, 4, 1), "@@ -3,1 +4,1 @@")]
#[case::new_file("@@ -0,0 +1,2 @@\n+a\n+b", (0, 0, 1, 2), "@@ -0,0 +1,2 @@")]
#[case::deleted_file("@@ -1,2 +0,0 @@\n-a\n-b", (1, 2, 0, 0), "@@ -1,2 +0,0 @@")]
#[case::large_numbers(
    "@@ -1048576,3 +1048580,3 @@\n a",
    (1_048_576, 3, 1_048_580, 3),
    "@@ -1048576,3 +1048580,3 @@"
)]
fn header_round_trips_numbers(
    #[case] text: &str,
    #[case] numbers: (u32, u32, u32, u32),
    #[case] rendered: &str,
) {
    let hunk = only_hunk(text);
    let header = hunk.header();
    let reparsed =
        parse_hunk_header(&header.to_string()).expect("serialised header should parse");

    assert_eq!(
        (
            header.old_start,
            header.old_length,
            header.new_start,
            header.new_length
        ),
        numbers
    );
    assert_eq!(header.to_string(), rendered);
    assert_eq!(reparsed, header);
}

#[rstest]
fn positions_continue_across_hunks_and_markers() {
    let hunks = collect(
        "@@ -1,1 +1,1 @@\n-a\n\\ No newline at end of file\n+b\n@@ -20,1 +20,1 @@\n c",
    );

    let positions: Vec<Vec<u32>> = hunks
        .iter()
        .map(|hunk| hunk.lines.iter().map(|line| line.position_in_hunk).collect())
        .collect();
    assert_eq!(positions, vec![vec![1, 3], vec![5]]);
}

#[rstest]
fn positions_count_lines_skipped_under_malformed_header() {
    let hunks = collect("@@ -1 +1 @@\n-a\n+b\n@@ bogus @@\n x\n@@ -9 +9 @@\n c");

    let last = hunks.last().expect("last hunk should exist");
    let position = last.lines.first().map(|line| line.position_in_hunk);
    assert_eq!(position, Some(6));
}

#[rstest]
fn malformed_header_aborts_only_its_own_hunk() {
    let text = "@@ -1,1 +1,1 @@\n-a\n+b\n@@ -x,1 +2,1 @@\n-lost\n+lost\n@@ -30,1 +30,1 @@\n-c\n+d";
    let hunks = collect(text);

    let starts: Vec<_> = hunks.iter().map(|hunk| hunk.old_start).collect();
    assert_eq!(starts, vec![1, 30]);
    assert!(
        hunks
            .iter()
            .flat_map(|hunk| &hunk.lines)
            .all(|line| line.content != "lost"),
        "lines under a malformed header must be skipped"
    );
}

#[rstest]
fn drops_lines_past_declared_range() {
    let hunk = only_hunk("@@ -1,1 +1,2 @@\n a\n+b\n+overflow\n c");

    assert_eq!(
        line_numbers(&hunk),
        vec![(Some(1), Some(1)), (None, Some(2))]
    );
    for line in &hunk.lines {
        if let Some(old) = line.old_line_number {
            assert!(old < hunk.old_start + hunk.old_length);
        }
        if let Some(new) = line.new_line_number {
            assert!(new < hunk.new_start + hunk.new_length);
        }
    }
}

#[rstest]
fn keeps_truncated_hunks() {
    let hunk = only_hunk("@@ -38,6 +38,8 @@\n fn main() {\n+    let x = 1;");
    assert_eq!(hunk.lines.len(), 2);
    assert_eq!(hunk.new_length, 8);
}

#[rstest]
fn no_newline_marker_flags_previous_line() {
    let hunk = only_hunk("@@ -1 +1 @@\n-old\n\\ No newline at end of file\n+new");

    assert_eq!(hunk.lines.len(), 2);
    let removed = hunk.lines.first().expect("removed line should exist");
    let added = hunk.lines.get(1).expect("added line should exist");
    assert!(!removed.ends_with_newline);
    assert!(added.ends_with_newline);
}

#[rstest]
fn accepts_crlf_line_endings() {
    let hunk = only_hunk("@@ -1,2 +1,2 @@\r\n a\r\n-b\r\n+c\r\n");
    let contents: Vec<_> = hunk.lines.iter().map(|line| line.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "b", "c"]);
}

#[rstest]
fn new_file_hunk_has_no_old_lines() {
    let hunk = only_hunk("@@ -0,0 +1,2 @@\n+one\n+two");
    assert_eq!(line_numbers(&hunk), vec![(None, Some(1)), (None, Some(2))]);
}

#[rstest]
#[case::omitted_lengths("@@ -5 +6 @@", (5, 1, 6, 1), None)]
#[case::explicit_lengths("@@ -5,0 +6,3 @@", (5, 0, 6, 3), None)]
#[case::with_section("@@ -1,2 +1,2 @@ fn run()", (1, 2, 1, 2), Some("fn run()"))]
fn parses_header_variants(
    #[case] line: &str,
    #[case] expected: (u32, u32, u32, u32),
    #[case] section: Option<&str>,
) {
    let header = parse_hunk_header(line).expect("header should parse");
    assert_eq!(
        (
            header.old_start,
            header.old_length,
            header.new_start,
            header.new_length
        ),
        expected
    );
    assert_eq!(header.section.as_deref(), section);
}

#[rstest]
#[case::no_opening("-1 +1 @@", HunkHeaderError::MissingOpeningMarker)]
#[case::no_closing("@@ -1 +1", HunkHeaderError::MissingClosingMarker)]
#[case::no_old("@@ +1 @@", HunkHeaderError::MissingRange { side: RangeSide::Old })]
#[case::no_new("@@ -1 @@", HunkHeaderError::MissingRange { side: RangeSide::New })]
#[case::trailing_token(
    "@@ -1 +1 junk @@",
    HunkHeaderError::UnexpectedToken { token: "junk".to_owned() }
)]
#[case::bad_count(
    "@@ -1,x +1 @@",
    HunkHeaderError::InvalidNumber { value: "x".to_owned() }
)]
fn rejects_malformed_headers(#[case] line: &str, #[case] expected: HunkHeaderError) {
    assert_eq!(parse_hunk_header(line), Err(expected));
}
