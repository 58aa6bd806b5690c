//! Unit tests for adapter configuration.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `validation`: Loading and validation tests
//! - `viewer`: Viewer matching tests

mod helpers;
mod precedence;
