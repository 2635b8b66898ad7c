// ── Static configuration model ──
//
// The site document carries network-level facts shared by every frame in
// the plant; the template carries the parameter values every frame
// should hold. Both load once at controller construction and are
// read-only afterwards. Loading itself lives behind `ConfigSource`, so
// the core has no filesystem dependency.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Site-wide network configuration.
///
/// Field names mirror the keys of the site JSON document; the lowercase
/// aliases admit environment-variable overrides.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Network prefix for the trunk A uplink (e.g. `"10.101.1"`).
    #[serde(rename = "TRUNK_A_PREFIX", alias = "trunk_a_prefix")]
    pub trunk_a_prefix: String,

    /// Network prefix for the trunk B uplink.
    #[serde(rename = "TRUNK_B_PREFIX", alias = "trunk_b_prefix")]
    pub trunk_b_prefix: String,
}

/// The default-parameter template: parameter key → target value, in
/// document order. Keys `5204`, `6000.0` and `6000.1` are placeholders
/// overwritten during derivation.
pub type DefaultTemplate = IndexMap<String, serde_json::Value>;

/// Capability for loading the two static documents.
///
/// Injected into the controller so core logic never touches the
/// filesystem; `scorpion-config` provides the file-backed
/// implementation.
pub trait ConfigSource {
    fn load_site_config(&self) -> Result<SiteConfig, CoreError>;
    fn load_default_template(&self) -> Result<DefaultTemplate, CoreError>;
}
