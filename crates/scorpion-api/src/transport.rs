// Transport configuration for building reqwest::Client instances.
//
// The Scorpion control surface is plain HTTP on the device LAN, so this
// carries only timeout and user-agent concerns.

use std::time::Duration;

use crate::error::Error;

/// Transport configuration shared by every client instance.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("scorpionctl/0.1.0")
            .build()
            .map_err(Error::Transport)
    }
}
