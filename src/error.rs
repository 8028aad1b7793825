//! Error types for rs-v2ex.
//!
//! This module defines the error types returned by client operations
//! and the extraction engine.

/// Error type for fetch and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document fetch did not complete.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// An operation requiring a session cookie was called without one.
    #[error("not logged in")]
    NotLogin,

    /// A node feed was requested with an empty node name.
    #[error("node does not exist")]
    NodeNotExist,

    /// A publish phrase or timestamp could not be parsed.
    #[error("cannot parse time from {0:?}")]
    TimeParse(String),

    /// A balance area's icons and numerals did not line up.
    #[error("balance decode failed: {0}")]
    Balance(String),

    /// A required pattern or selector did not match the page markup.
    #[error("unexpected page structure: {0}")]
    Structure(String),
}

/// Result type alias for fetch and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
