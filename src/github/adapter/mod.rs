//! Conversions from source shapes to domain models.
//!
//! [`ShapeAdapter`] borrows an [`AdapterConfig`] and exposes one total
//! conversion per source shape. Conversions never fail: absent optional
//! fields become `None`, empty collections, or the documented default, and a
//! malformed field surfaces as a missing value in the domain shape.
//!
//! Pieces that need no configuration (labels, milestones, refs, reactions)
//! are plain `From` impls so they can be used on their own.

mod account;
mod comment;
mod pull_request;
mod timeline;

use chrono::{DateTime, Utc};

use crate::config::AdapterConfig;

/// Converts REST and GraphQL source shapes into domain models.
///
/// # Examples
///
/// ```
/// use prshape::AdapterConfig;
/// use prshape::github::ShapeAdapter;
/// use prshape::github::payload::decode_str;
/// use prshape::github::rest::ApiUser;
///
/// let config = AdapterConfig::default();
/// let adapter = ShapeAdapter::new(&config);
/// let user: ApiUser = decode_str(r#"{"login": "octocat", "type": "User"}"#)
///     .expect("user should decode");
///
/// let account = adapter.account_from_rest(user);
/// assert!(account.is_user);
/// assert!(!account.is_enterprise);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShapeAdapter<'config> {
    config: &'config AdapterConfig,
}

impl<'config> ShapeAdapter<'config> {
    /// Creates an adapter using the provided configuration.
    #[must_use]
    pub const fn new(config: &'config AdapterConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this adapter applies.
    #[must_use]
    pub const fn config(&self) -> &AdapterConfig {
        self.config
    }
}

/// Parses an RFC 3339 timestamp, treating malformed input as absent.
pub(crate) fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let text = value?;
    match DateTime::parse_from_rfc3339(text) {
        Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
        Err(error) => {
            tracing::debug!("ignoring malformed timestamp '{text}': {error}");
            None
        }
    }
}
