// Wire model for the Scorpion control API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered parameter-key → value mapping.
///
/// Order is significant: the device applies writes in the order the keys
/// appear in the request body, and batch slicing preserves it.
pub type ParamMap = IndexMap<String, serde_json::Value>;

/// A single parameter record as reported by the device.
///
/// Returned by both reads and writes. `error` is set when the device
/// accepted the call but rejected this particular parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Parameter key (e.g. `"5204"`, `"6000.0"`).
    pub id: String,

    /// Human-readable parameter name, when the device reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Current (read) or applied (write) value.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub value: serde_json::Value,

    /// Per-parameter device error, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Record {
    /// The value as a string slice, if it is a JSON string.
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}
