// ── Core error types ──
//
// User-facing failures from scorpion-core. Construction-time errors are
// fatal and carry enough context to tell an operator which capability is
// missing; mid-operation failures wrap the API error unchanged.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Construction (fatal) ────────────────────────────────────────
    /// No device answered at the given address.
    #[error("Scorpion not found at {host}:{port}: {reason}")]
    DeviceNotFound {
        host: String,
        port: u16,
        reason: String,
    },

    /// The device answered, but the alias read failed: the control API
    /// is switched off.
    #[error("Control API not enabled: {reason}")]
    ApiNotEnabled { reason: String },

    /// The self-reported alias does not follow the plant convention.
    #[error("Malformed device alias {alias:?}: {reason}")]
    MalformedAlias { alias: String, reason: String },

    /// Site config or default template failed to load.
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Per-operation ───────────────────────────────────────────────
    /// Transport or API failure mid-read or mid-batch. Aborts the
    /// current operation; never retried at this layer.
    #[error("Device API error: {0}")]
    Api(#[from] scorpion_api::Error),
}
