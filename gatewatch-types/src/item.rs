//! Monitoring item records relayed by the gateway.
//!
//! These shapes match the Zabbix API JSON that the gateway forwards
//! verbatim: every scalar field is a string, including numeric codes
//! and epoch-second timestamps. Accessor methods parse the common
//! codes; unknown JSON fields are ignored and absent fields default to
//! empty.

use crate::filter::{Filterable, StatusFilter};
use crate::severity::Severity;

/// A key/value tag attached to an event or trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tag {
    pub tag: String,
    pub value: String,
}

/// Host reference embedded in event and trigger records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HostRef {
    pub hostid: String,
    /// Technical host name.
    pub host: String,
    /// Visible display name.
    pub name: String,
}

/// A monitoring event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Event {
    pub eventid: String,
    pub name: String,
    /// Epoch seconds when the event was created.
    pub clock: String,
    /// Severity code "0".."5".
    pub severity: String,
    /// "0" = unacknowledged, "1" = acknowledged.
    pub acknowledged: String,
    /// Operational data line supplied by the trigger expression.
    pub opdata: String,
    /// "0" = OK, "1" = problem.
    pub value: String,
    pub suppressed: String,
    pub source: String,
    pub object: String,
    pub objectid: String,
    pub hosts: Vec<HostRef>,
    pub tags: Vec<Tag>,
}

/// An active problem (an unresolved problem event).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Problem {
    pub eventid: String,
    pub name: String,
    /// Epoch seconds when the problem started.
    pub clock: String,
    pub ns: String,
    /// Severity code "0".."5".
    pub severity: String,
    /// "0" = unacknowledged, "1" = acknowledged.
    pub acknowledged: String,
    pub opdata: String,
    pub suppressed: String,
    pub source: String,
    pub object: String,
    pub objectid: String,
    pub cause_eventid: String,
    /// Recovery event id, if the problem has resolved.
    pub r_eventid: String,
    pub r_clock: String,
}

/// A trigger definition with its current state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Trigger {
    pub triggerid: String,
    pub description: String,
    /// Priority code "0".."5" (same scale as event severity).
    pub priority: String,
    /// "0" = enabled, "1" = disabled.
    pub status: String,
    /// "0" = OK, "1" = problem.
    pub value: String,
    /// Epoch seconds of the last state change.
    pub lastchange: String,
    pub opdata: String,
    pub hosts: Vec<HostRef>,
}

/// A monitored host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Host {
    pub hostid: String,
    /// Technical host name.
    pub host: String,
    /// Visible display name.
    pub name: String,
    /// "0" = monitored, "1" = unmonitored.
    pub status: String,
    /// Agent availability: "0" unknown, "1" available, "2" unavailable.
    pub available: String,
    /// Last agent error message, empty when healthy.
    pub error: String,
    /// Epoch seconds of the last agent contact.
    pub lastaccess: String,
    pub flags: String,
}

/// Parse an epoch-seconds wire string. Empty and junk yield `None`.
fn parse_epoch(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

/// Case-insensitive substring test; `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn host_refs_match(hosts: &[HostRef], wanted: &str) -> bool {
    hosts.iter().any(|h| h.host == wanted || h.name == wanted)
}

impl Event {
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_wire(&self.severity)
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged != "0"
    }

    pub fn clock_secs(&self) -> Option<i64> {
        parse_epoch(&self.clock)
    }
}

impl Problem {
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_wire(&self.severity)
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged != "0"
    }

    pub fn clock_secs(&self) -> Option<i64> {
        parse_epoch(&self.clock)
    }
}

impl Trigger {
    pub fn priority(&self) -> Option<Severity> {
        Severity::from_wire(&self.priority)
    }

    pub fn is_enabled(&self) -> bool {
        self.status == "0"
    }

    pub fn in_problem_state(&self) -> bool {
        self.value == "1"
    }

    pub fn lastchange_secs(&self) -> Option<i64> {
        parse_epoch(&self.lastchange)
    }
}

impl Host {
    pub fn is_monitored(&self) -> bool {
        self.status == "0"
    }

    pub fn is_available(&self) -> bool {
        self.available == "1"
    }

    pub fn is_unavailable(&self) -> bool {
        self.available == "2"
    }

    pub fn lastaccess_secs(&self) -> Option<i64> {
        parse_epoch(&self.lastaccess)
    }
}

impl Filterable for Event {
    fn severity_code(&self) -> Option<&str> {
        Some(&self.severity)
    }

    fn clock_secs(&self) -> Option<i64> {
        Event::clock_secs(self)
    }

    fn matches_status(&self, status: StatusFilter) -> bool {
        match status {
            StatusFilter::All => true,
            StatusFilter::Ok => !self.is_acknowledged(),
            StatusFilter::Problem => self.is_acknowledged(),
            // Events have no enabled/disabled notion.
            StatusFilter::Enabled | StatusFilter::Disabled => true,
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.opdata, needle)
            || self.hosts.iter().any(|h| contains_ci(&h.host, needle) || contains_ci(&h.name, needle))
            || self.tags.iter().any(|t| contains_ci(&t.tag, needle) || contains_ci(&t.value, needle))
    }

    fn references_host(&self, host: &str) -> bool {
        host_refs_match(&self.hosts, host)
    }
}

impl Filterable for Problem {
    fn severity_code(&self) -> Option<&str> {
        Some(&self.severity)
    }

    fn clock_secs(&self) -> Option<i64> {
        Problem::clock_secs(self)
    }

    fn matches_status(&self, status: StatusFilter) -> bool {
        match status {
            StatusFilter::All => true,
            StatusFilter::Ok => !self.is_acknowledged(),
            StatusFilter::Problem => self.is_acknowledged(),
            StatusFilter::Enabled | StatusFilter::Disabled => true,
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle) || contains_ci(&self.opdata, needle)
    }

    // Problem records carry no host references; a host filter is not
    // applicable to them.
}

impl Filterable for Trigger {
    fn severity_code(&self) -> Option<&str> {
        Some(&self.priority)
    }

    fn clock_secs(&self) -> Option<i64> {
        self.lastchange_secs()
    }

    fn matches_status(&self, status: StatusFilter) -> bool {
        match status {
            StatusFilter::All => true,
            StatusFilter::Enabled => self.is_enabled(),
            StatusFilter::Disabled => !self.is_enabled(),
            StatusFilter::Ok => !self.in_problem_state(),
            StatusFilter::Problem => self.in_problem_state(),
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.description, needle)
            || contains_ci(&self.opdata, needle)
            || self.hosts.iter().any(|h| contains_ci(&h.host, needle) || contains_ci(&h.name, needle))
    }

    fn references_host(&self, host: &str) -> bool {
        host_refs_match(&self.hosts, host)
    }
}

impl Filterable for Host {
    fn clock_secs(&self) -> Option<i64> {
        self.lastaccess_secs()
    }

    fn matches_status(&self, status: StatusFilter) -> bool {
        match status {
            StatusFilter::All => true,
            StatusFilter::Enabled => self.is_monitored(),
            StatusFilter::Disabled => !self.is_monitored(),
            StatusFilter::Ok => self.is_available(),
            StatusFilter::Problem => self.is_unavailable(),
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.host, needle)
            || contains_ci(&self.error, needle)
    }

    fn references_host(&self, host: &str) -> bool {
        self.host == host || self.name == host
    }

    // Hosts carry no severity; a severity filter is not applicable.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_accessors_parse_wire_codes() {
        let event = Event {
            severity: "4".to_string(),
            acknowledged: "1".to_string(),
            clock: "1699000000".to_string(),
            ..Event::default()
        };
        assert_eq!(event.severity(), Some(Severity::High));
        assert!(event.is_acknowledged());
        assert_eq!(event.clock_secs(), Some(1_699_000_000));
    }

    #[test]
    fn blank_clock_is_none() {
        let host = Host {
            lastaccess: String::new(),
            ..Host::default()
        };
        assert_eq!(host.lastaccess_secs(), None);
    }

    #[test]
    fn trigger_state_accessors() {
        let trigger = Trigger {
            status: "1".to_string(),
            value: "1".to_string(),
            ..Trigger::default()
        };
        assert!(!trigger.is_enabled());
        assert!(trigger.in_problem_state());
    }

    #[test]
    fn event_search_covers_hosts_and_tags() {
        let event = Event {
            name: "High CPU".to_string(),
            hosts: vec![HostRef {
                host: "web-01".to_string(),
                name: "Web frontend".to_string(),
                ..HostRef::default()
            }],
            tags: vec![Tag {
                tag: "component".to_string(),
                value: "nginx".to_string(),
            }],
            ..Event::default()
        };
        assert!(event.matches_search("cpu"));
        assert!(event.matches_search("web-01"));
        assert!(event.matches_search("nginx"));
        assert!(!event.matches_search("database"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn event_deserializes_from_gateway_json() {
        let json = r#"{
            "eventid": "9001",
            "name": "Disk space low",
            "clock": "1699000000",
            "severity": "3",
            "acknowledged": "0",
            "hosts": [{"hostid": "10084", "host": "db-01", "name": "Database"}],
            "tags": [{"tag": "scope", "value": "capacity"}],
            "unknown_future_field": 42
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.eventid, "9001");
        assert_eq!(event.severity(), Some(Severity::Average));
        assert_eq!(event.hosts.len(), 1);
        assert_eq!(event.tags[0].tag, "scope");
        // Fields absent from the payload default to empty.
        assert!(event.opdata.is_empty());
    }
}
