//! Prshape library crate normalising GitHub pull request payloads.
//!
//! The library decodes REST and GraphQL responses describing pull requests,
//! accounts, review comments and timeline events, converts them into one set
//! of domain models, and parses the diff hunks attached to review comments
//! into structured lines with old and new line numbers.

pub mod config;
pub mod github;

pub use config::AdapterConfig;
pub use github::{AdaptError, DiffHunk, ShapeAdapter, parse_diff_hunks};
