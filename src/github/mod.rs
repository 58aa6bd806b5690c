//! GitHub payload adapters.
//!
//! Responses from the REST (v3) and GraphQL (v4) APIs are decoded into the
//! source shapes in [`rest`] and [`graphql`], then converted by
//! [`ShapeAdapter`] into the normalised domain models in [`models`]. Review
//! comment diff hunks are parsed into structured lines by [`diff_hunk`].
//!
//! Decoding is the only fallible step: conversions are total and degrade
//! malformed or unrecognised fields instead of failing.

pub mod adapter;
pub mod diff_hunk;
pub mod error;
pub mod graphql;
pub mod models;
pub mod payload;
pub mod rest;

pub use adapter::ShapeAdapter;
pub use diff_hunk::{
    DiffHunk, DiffHunkParser, DiffLine, DiffLineKind, HunkHeader, HunkHeaderError,
    parse_diff_hunks, parse_hunk_header,
};
pub use error::AdaptError;
