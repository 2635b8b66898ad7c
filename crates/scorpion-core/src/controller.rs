// ── Defaults controller ──
//
// Orchestrating façade: resolves the frame's identity at construction,
// derives the target defaults, and exposes the two operations -- read
// current state for comparison, and push the defaults (clearing the
// routing bank first).

use scorpion_api::{ParamMap, ScorpionClient, TransportConfig};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ConfigSource, DefaultTemplate, SiteConfig};
use crate::dispatch::{BatchResult, DEFAULT_CHUNK_SIZE, dispatch};
use crate::error::CoreError;
use crate::identity::Identity;

// ── Well-known parameter keys ───────────────────────────────────────

/// Device alias (self-reported name).
pub const PARAM_ALIAS: &str = "55";
/// NMOS device name.
pub const PARAM_NMOS_NAME: &str = "5204";
/// Trunk A interface address.
pub const PARAM_TRUNK_A_ADDR: &str = "6000.0";
/// Trunk B interface address.
pub const PARAM_TRUNK_B_ADDR: &str = "6000.1";

/// Routing destination bank: keys `3009.0 .. 3009.31`.
const ROUTE_BANK_PREFIX: &str = "3009";
/// Every frame ships a fixed 32-destination routing bank.
const ROUTE_BANK_SIZE: u32 = 32;

// ── Derivation ──────────────────────────────────────────────────────

/// Materialize the target defaults for one frame.
///
/// Copies the template and overrides the three identity-derived keys:
/// the NMOS name, and the two trunk addresses (site prefix with the unit
/// number as final octet). Every other key passes through untouched;
/// overriding an existing key keeps its position in the push order.
pub fn derive_defaults(
    template: &DefaultTemplate,
    site: &SiteConfig,
    identity: &Identity,
) -> ParamMap {
    let mut defaults = template.clone();
    defaults.insert(
        PARAM_NMOS_NAME.to_owned(),
        identity.device_name.clone().into(),
    );
    defaults.insert(
        PARAM_TRUNK_A_ADDR.to_owned(),
        format!("{}.{}", site.trunk_a_prefix, identity.unit_number).into(),
    );
    defaults.insert(
        PARAM_TRUNK_B_ADDR.to_owned(),
        format!("{}.{}", site.trunk_b_prefix, identity.unit_number).into(),
    );
    defaults
}

/// The routing-clear bank: every destination routed back to source `"0"`.
fn clear_routes() -> ParamMap {
    (0..ROUTE_BANK_SIZE)
        .map(|slot| (format!("{ROUTE_BANK_PREFIX}.{slot}"), "0".into()))
        .collect()
}

// ── Current status ──────────────────────────────────────────────────

/// One row of the current-vs-default comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ParamStatus {
    /// Human-readable parameter name reported by the device.
    pub name: String,
    /// Parameter key.
    pub code: String,
    /// Value currently held by the device.
    pub value: serde_json::Value,
    /// Value the derived defaults say it should hold.
    pub default: serde_json::Value,
}

impl ParamStatus {
    /// `true` when the device already holds the default.
    ///
    /// Values compare textually as a fallback: the device reports
    /// everything as strings, while templates may carry numbers.
    pub fn matches(&self) -> bool {
        self.value == self.default || value_text(&self.value) == value_text(&self.default)
    }

    /// Display form of the current value.
    pub fn value_text(&self) -> String {
        value_text(&self.value)
    }

    /// Display form of the default value.
    pub fn default_text(&self) -> String {
        value_text(&self.default)
    }
}

fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Ordered comparison rows, one per derived default.
pub type CurrentStatus = Vec<ParamStatus>;

// ── Controller ──────────────────────────────────────────────────────

/// Orchestrates defaults provisioning for a single frame.
///
/// Construction resolves everything up front: device identity, site
/// config, and the derived target parameters. The two operations share
/// that state and never mutate it.
pub struct DefaultsController {
    client: ScorpionClient,
    identity: Identity,
    defaults: ParamMap,
}

impl DefaultsController {
    /// Connect to the device at `host:port` and build a controller.
    pub async fn connect(
        host: &str,
        port: u16,
        transport: &TransportConfig,
        config: &dyn ConfigSource,
    ) -> Result<Self, CoreError> {
        let client = ScorpionClient::connect(host, port, transport)
            .await
            .map_err(|e| CoreError::DeviceNotFound {
                host: host.to_owned(),
                port,
                reason: e.to_string(),
            })?;
        Self::new(client, config).await
    }

    /// Build a controller around an already-connected client.
    pub async fn new(client: ScorpionClient, config: &dyn ConfigSource) -> Result<Self, CoreError> {
        let alias = fetch_alias(&client).await?;
        let identity = Identity::resolve(&alias)?;
        debug!(%identity, "resolved frame identity");

        let site = config.load_site_config()?;
        let template = config.load_default_template()?;
        let defaults = derive_defaults(&template, &site, &identity);
        info!(%alias, params = defaults.len(), "derived default parameters");

        Ok(Self {
            client,
            identity,
            defaults,
        })
    }

    /// The resolved frame identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The derived target parameters, in push order.
    pub fn defaults(&self) -> &ParamMap {
        &self.defaults
    }

    /// Read the device's current value for every derived default.
    ///
    /// All-or-nothing: a failed read aborts the whole report and
    /// surfaces its cause rather than returning a partially filled
    /// comparison.
    pub async fn current_status(&self) -> Result<CurrentStatus, CoreError> {
        let mut rows = Vec::with_capacity(self.defaults.len());
        for (key, default) in &self.defaults {
            let record = self.client.get(key).await?;
            rows.push(ParamStatus {
                name: record.name.unwrap_or_default(),
                code: record.id,
                value: record.value,
                default: default.clone(),
            });
        }
        Ok(rows)
    }

    /// Push the derived defaults to the device.
    ///
    /// Clears the 32-slot routing bank first, then applies the defaults;
    /// both go through the same chunked dispatch. Per-parameter
    /// rejections are collected in the returned result instead of
    /// aborting the push.
    ///
    /// `factory` is accepted for forward compatibility and currently
    /// does nothing.
    // TODO: wire `factory` to a full factory reset once the firmware exposes one.
    pub async fn set_defaults(&self, factory: bool) -> Result<BatchResult, CoreError> {
        let _ = factory;

        info!("clearing routing bank");
        let mut result = dispatch(&self.client, &clear_routes(), DEFAULT_CHUNK_SIZE).await?;

        info!(params = self.defaults.len(), "applying defaults");
        let applied = dispatch(&self.client, &self.defaults, DEFAULT_CHUNK_SIZE).await?;
        result.merge(applied);
        Ok(result)
    }
}

/// Read the frame's alias, the one parameter that must always answer.
///
/// A failure here, on an otherwise reachable device, means the control
/// API is switched off rather than the device being absent.
async fn fetch_alias(client: &ScorpionClient) -> Result<String, CoreError> {
    let record = client
        .get(PARAM_ALIAS)
        .await
        .map_err(|e| CoreError::ApiNotEnabled {
            reason: e.to_string(),
        })?;

    record
        .value_str()
        .map(str::to_owned)
        .ok_or_else(|| CoreError::ApiNotEnabled {
            reason: format!("alias parameter {PARAM_ALIAS} returned no value"),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            trunk_a_prefix: "10.0.1".into(),
            trunk_b_prefix: "10.0.2".into(),
        }
    }

    #[test]
    fn derive_overrides_reserved_keys_and_keeps_the_rest() {
        let mut template = DefaultTemplate::new();
        template.insert("A".into(), 1.into());
        template.insert("5204".into(), "X".into());
        template.insert("6000.0".into(), "Y".into());
        template.insert("6000.1".into(), "Z".into());

        let identity = Identity::resolve("rtr-core-003").unwrap();
        let defaults = derive_defaults(&template, &site(), &identity);

        assert_eq!(defaults["A"], serde_json::json!(1));
        assert_eq!(defaults["5204"], serde_json::json!("RTR-003"));
        assert_eq!(defaults["6000.0"], serde_json::json!("10.0.1.3"));
        assert_eq!(defaults["6000.1"], serde_json::json!("10.0.2.3"));
        assert_eq!(defaults.len(), 4);
    }

    #[test]
    fn derive_does_not_touch_the_template() {
        let mut template = DefaultTemplate::new();
        template.insert("5204".into(), "PLACEHOLDER".into());

        let identity = Identity::resolve("mfc-rk1-001").unwrap();
        let _ = derive_defaults(&template, &site(), &identity);

        assert_eq!(template["5204"], serde_json::json!("PLACEHOLDER"));
    }

    #[test]
    fn derive_adds_reserved_keys_missing_from_the_template() {
        let mut template = DefaultTemplate::new();
        template.insert("A".into(), "1".into());

        let identity = Identity::resolve("mfc-rk1-009").unwrap();
        let defaults = derive_defaults(&template, &site(), &identity);

        assert_eq!(defaults["5204"], serde_json::json!("MFC-009"));
        assert_eq!(defaults["6000.0"], serde_json::json!("10.0.1.9"));
        assert_eq!(defaults["6000.1"], serde_json::json!("10.0.2.9"));
    }

    #[test]
    fn derive_keeps_override_positions_in_push_order() {
        let mut template = DefaultTemplate::new();
        template.insert("5204".into(), "X".into());
        template.insert("A".into(), "1".into());

        let identity = Identity::resolve("mfc-rk1-002").unwrap();
        let defaults = derive_defaults(&template, &site(), &identity);

        let keys: Vec<&str> = defaults.keys().map(String::as_str).take(2).collect();
        assert_eq!(keys, vec!["5204", "A"]);
    }

    #[test]
    fn clear_routes_covers_the_whole_bank() {
        let routes = clear_routes();

        assert_eq!(routes.len(), 32);
        assert_eq!(routes["3009.0"], serde_json::json!("0"));
        assert_eq!(routes["3009.31"], serde_json::json!("0"));

        let keys: Vec<String> = routes.keys().cloned().collect();
        assert_eq!(keys[0], "3009.0");
        assert_eq!(keys[31], "3009.31");
    }

    #[test]
    fn param_status_matches_across_value_types() {
        let row = ParamStatus {
            name: "Gain".into(),
            code: "200".into(),
            value: "25".into(),
            default: 25.into(),
        };
        assert!(row.matches());

        let drifted = ParamStatus {
            name: "Gain".into(),
            code: "200".into(),
            value: "24".into(),
            default: 25.into(),
        };
        assert!(!drifted.matches());
    }
}
