//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text.

use miette::Diagnostic;
use thiserror::Error;

use scorpion_core::CoreError;

/// Exit codes (success is the implicit 0).
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const REJECTED: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Usage ────────────────────────────────────────────────────────
    #[error("No device host given")]
    #[diagnostic(
        code(scorpion::no_host),
        help("Pass --host <HOST> or set SCORPION_HOST.")
    )]
    MissingHost,

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach a Scorpion at {host}:{port}")]
    #[diagnostic(
        code(scorpion::connection_failed),
        help(
            "Check that the frame is powered and on the network.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("The control API is not enabled on this frame")]
    #[diagnostic(
        code(scorpion::api_disabled),
        help(
            "Enable the V-API on the frame's web interface, then retry.\n\
             Reason: {reason}"
        )
    )]
    ApiDisabled { reason: String },

    // ── Identity / configuration ─────────────────────────────────────
    #[error("Device alias {alias:?} does not follow the TYPE-RACK-NNN convention")]
    #[diagnostic(
        code(scorpion::bad_alias),
        help("Fix the alias on the frame (parameter 55), e.g. MFC-RK12-007.")
    )]
    BadAlias { alias: String, reason: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(scorpion::config),
        help("Check the site config and default-parameter JSON files.")
    )]
    Config { message: String },

    // ── Device API ───────────────────────────────────────────────────
    #[error("Device API error: {message}")]
    #[diagnostic(code(scorpion::api_error))]
    Api { message: String },

    #[error("{count} parameter(s) were rejected by the device")]
    #[diagnostic(
        code(scorpion::rejected),
        help("Inspect the rejected parameters above, then fix the template or the frame.")
    )]
    DefaultsRejected { count: usize },
}

impl CliError {
    /// Map this error to a process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingHost => exit_code::USAGE,
            Self::ConnectionFailed { .. } | Self::ApiDisabled { .. } => exit_code::CONNECTION,
            Self::BadAlias { .. } | Self::Config { .. } => exit_code::CONFIG,
            Self::DefaultsRejected { .. } => exit_code::REJECTED,
            Self::Api { .. } => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DeviceNotFound { host, port, reason } => Self::ConnectionFailed {
                host,
                port,
                reason,
            },

            CoreError::ApiNotEnabled { reason } => Self::ApiDisabled { reason },

            CoreError::MalformedAlias { alias, reason } => Self::BadAlias { alias, reason },

            CoreError::Config { message } => Self::Config { message },

            CoreError::Api(e) => Self::Api {
                message: e.to_string(),
            },
        }
    }
}
