use thiserror::Error;

/// Top-level error type for the `scorpion-api` crate.
///
/// Covers transport failures, non-success HTTP answers, and response
/// decoding. `scorpion-core` maps these into domain-level diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-success HTTP answer from the device.
    #[error("Device API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// JSON decoding failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` for connection-level failures (device absent or
    /// unreachable) as opposed to API-level ones.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
