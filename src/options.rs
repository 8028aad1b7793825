//! Client configuration.

use std::time::Duration;

/// Configuration for a [`crate::Client`].
///
/// All fields are public for easy construction. Use
/// `Default::default()` for an unauthenticated client with standard
/// transport settings.
///
/// # Example
///
/// ```rust
/// use rs_v2ex::ClientOptions;
///
/// let options = ClientOptions {
///     cookie: "A2=...".to_string(),
///     ..ClientOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Session cookie header value.
    ///
    /// Empty means unauthenticated; operations that need a session
    /// refuse to fetch without one. Presence is all that is checked
    /// locally - an expired cookie only shows up when the server
    /// rejects it.
    ///
    /// Default: empty
    pub cookie: String,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,

    /// Transport-level timeout per request.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            cookie: String::new(),
            user_agent: concat!("rs-v2ex/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
