// scorpion-core: default derivation and provisioning logic on top of scorpion-api.

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod identity;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ConfigSource, DefaultTemplate, SiteConfig};
pub use controller::{CurrentStatus, DefaultsController, ParamStatus, derive_defaults};
pub use dispatch::{BatchResult, DEFAULT_CHUNK_SIZE, dispatch};
pub use error::CoreError;
pub use identity::Identity;

// Re-export the wire types consumers handle directly.
pub use scorpion_api::{ParamMap, Record, TransportConfig};
