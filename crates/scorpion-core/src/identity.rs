// ── Frame identity ──

use std::fmt;

use crate::error::CoreError;

/// The identity a frame reports about itself, recovered from its alias.
///
/// Aliases follow the plant convention `TYPE-RACK-NNN` (case-insensitive),
/// e.g. `mfc-rk12-007`: the first segment names the device type, the
/// last carries the unit number. The rack segment is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Normalized device name: `TYPE-NNN`, uppercased.
    pub device_name: String,
    /// Unit number, leading zeros stripped.
    pub unit_number: u32,
}

impl Identity {
    /// Parse an alias into an identity.
    ///
    /// A malformed alias is a fatal misconfiguration: callers escalate
    /// the error instead of guessing a name.
    pub fn resolve(alias: &str) -> Result<Self, CoreError> {
        let upper = alias.to_uppercase();
        let segments: Vec<&str> = upper.split('-').collect();

        if segments.len() < 3 {
            return Err(CoreError::MalformedAlias {
                alias: alias.to_owned(),
                reason: format!("expected TYPE-RACK-NNN, got {} segment(s)", segments.len()),
            });
        }

        let unit_segment = segments[2];
        let unit_number: u32 = unit_segment.parse().map_err(|_| CoreError::MalformedAlias {
            alias: alias.to_owned(),
            reason: format!("unit segment {unit_segment:?} is not a number"),
        })?;

        Ok(Self {
            device_name: format!("{}-{unit_segment}", segments[0]),
            unit_number,
        })
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (unit {})", self.device_name, self.unit_number)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uppercases_and_drops_rack() {
        let id = Identity::resolve("mfc-rk12-007").unwrap();
        assert_eq!(id.device_name, "MFC-007");
        assert_eq!(id.unit_number, 7);
    }

    #[test]
    fn resolve_keeps_leading_zeros_in_name() {
        let id = Identity::resolve("A-B-007").unwrap();
        assert_eq!(id.device_name, "A-007");
        assert_eq!(id.unit_number, 7);
    }

    #[test]
    fn resolve_uses_third_segment_of_longer_aliases() {
        let id = Identity::resolve("xs-core-003-spare").unwrap();
        assert_eq!(id.device_name, "XS-003");
        assert_eq!(id.unit_number, 3);
    }

    #[test]
    fn resolve_rejects_too_few_segments() {
        let err = Identity::resolve("xs-003").unwrap_err();
        assert!(matches!(err, CoreError::MalformedAlias { .. }), "got: {err:?}");
    }

    #[test]
    fn resolve_rejects_non_numeric_unit() {
        let err = Identity::resolve("xs-core-main").unwrap_err();
        match err {
            CoreError::MalformedAlias { alias, reason } => {
                assert_eq!(alias, "xs-core-main");
                assert!(reason.contains("MAIN"), "got: {reason}");
            }
            other => panic!("expected MalformedAlias, got: {other:?}"),
        }
    }

    #[test]
    fn display_reads_naturally() {
        let id = Identity::resolve("mfc-rk1-012").unwrap();
        assert_eq!(id.to_string(), "MFC-012 (unit 12)");
    }
}
