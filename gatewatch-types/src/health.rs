//! Gateway health report.

use std::collections::BTreeMap;

/// The health endpoint's reply: overall status plus per-service detail.
///
/// Replaced wholesale on every fetch, like the item collections. The
/// gateway only guarantees the `status` field; everything else is
/// best-effort and defaults to empty when absent.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealthSnapshot {
    /// Overall gateway status, e.g. "ok" or "degraded".
    pub status: String,
    pub version: String,
    /// Seconds since the gateway started.
    pub uptime: Option<u64>,
    pub memory: Option<MemoryUsage>,
    /// Per-service status strings, keyed by service name.
    pub services: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemoryUsage {
    pub used_bytes: Option<u64>,
    pub total_bytes: Option<u64>,
}

impl HealthSnapshot {
    pub fn is_ok(&self) -> bool {
        matches!(self.status.to_lowercase().as_str(), "ok" | "up" | "healthy")
    }

    /// Services whose status is not "ok", for highlighting.
    pub fn degraded_services(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.services
            .iter()
            .filter(|(_, status)| !status.eq_ignore_ascii_case("ok"))
            .map(|(name, status)| (name.as_str(), status.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_status_recognized_case_insensitively() {
        let mut health = HealthSnapshot {
            status: "OK".to_string(),
            ..HealthSnapshot::default()
        };
        assert!(health.is_ok());

        health.status = "degraded".to_string();
        assert!(!health.is_ok());
    }

    #[test]
    fn degraded_services_are_singled_out() {
        let mut health = HealthSnapshot::default();
        health.services.insert("zabbix".to_string(), "ok".to_string());
        health.services.insert("cache".to_string(), "down".to_string());

        let degraded: Vec<_> = health.degraded_services().collect();
        assert_eq!(degraded, vec![("cache", "down")]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_sparse_payload() {
        let json = r#"{"status": "ok", "uptime": 86400}"#;
        let health: HealthSnapshot = serde_json::from_str(json).unwrap();
        assert!(health.is_ok());
        assert_eq!(health.uptime, Some(86400));
        assert!(health.services.is_empty());
        assert!(health.memory.is_none());
    }
}
