//! Error types exposed by the adapter layer.

use thiserror::Error;

/// Errors surfaced at the fallible edges of the adapter layer.
///
/// The adapters themselves are total; only decoding raw payloads and loading
/// configuration can fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdaptError {
    /// A payload could not be decoded into its source shape.
    #[error("failed to decode {shape} payload: {message}")]
    Deserialise {
        /// Name of the source shape being decoded.
        shape: String,
        /// Decoder error detail.
        message: String,
    },

    /// Adapter configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
