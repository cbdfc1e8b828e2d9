//! Client-side filter model.
//!
//! Filtering happens in the dashboard, after fetch and before capping:
//! the gateway endpoints take no query parameters beyond the optional
//! trigger host, so every criterion is applied to the fetched
//! collection in memory. The predicate is a pure function so it can be
//! tested (and benchmarked) without any rendering or transport.

use crate::severity::Severity;

/// Severity criterion: everything, or one exact level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeverityFilter {
    #[default]
    All,
    Level(Severity),
}

impl SeverityFilter {
    /// The options in the order a selector presents them.
    pub fn options() -> [SeverityFilter; 7] {
        [
            SeverityFilter::All,
            SeverityFilter::Level(Severity::NotClassified),
            SeverityFilter::Level(Severity::Information),
            SeverityFilter::Level(Severity::Warning),
            SeverityFilter::Level(Severity::Average),
            SeverityFilter::Level(Severity::High),
            SeverityFilter::Level(Severity::Disaster),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityFilter::All => "All severities",
            SeverityFilter::Level(level) => level.label(),
        }
    }
}

/// Status criterion, matched against each record's derived status.
///
/// Enabled/Disabled apply to triggers and hosts; Ok/Problem apply to
/// the acknowledged flag of events and problems, the trigger value,
/// and host availability. A combination a record cannot express does
/// not exclude it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Enabled,
    Disabled,
    Ok,
    Problem,
}

impl StatusFilter {
    pub fn options() -> [StatusFilter; 5] {
        [
            StatusFilter::All,
            StatusFilter::Enabled,
            StatusFilter::Disabled,
            StatusFilter::Ok,
            StatusFilter::Problem,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All status",
            StatusFilter::Enabled => "Enabled",
            StatusFilter::Disabled => "Disabled",
            StatusFilter::Ok => "OK",
            StatusFilter::Problem => "Problem",
        }
    }
}

/// Recency window criterion, compared against the item timestamp in
/// milliseconds (`clock` is epoch seconds on the wire).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeRange {
    LastHour,
    Last6Hours,
    #[default]
    Last24Hours,
    Last7Days,
    Last30Days,
    All,
}

impl TimeRange {
    pub fn options() -> [TimeRange; 6] {
        [
            TimeRange::LastHour,
            TimeRange::Last6Hours,
            TimeRange::Last24Hours,
            TimeRange::Last7Days,
            TimeRange::Last30Days,
            TimeRange::All,
        ]
    }

    /// Window size in milliseconds; `None` means unbounded.
    pub fn window_ms(&self) -> Option<i64> {
        match self {
            TimeRange::LastHour => Some(3_600_000),
            TimeRange::Last6Hours => Some(21_600_000),
            TimeRange::Last24Hours => Some(86_400_000),
            TimeRange::Last7Days => Some(604_800_000),
            TimeRange::Last30Days => Some(2_592_000_000),
            TimeRange::All => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::LastHour => "Last hour",
            TimeRange::Last6Hours => "Last 6 hours",
            TimeRange::Last24Hours => "Last 24 hours",
            TimeRange::Last7Days => "Last 7 days",
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::All => "All time",
        }
    }
}

/// The record a filter selector edits and data panels apply.
///
/// Created with defaults, mutated only by user input, never persisted.
/// Field changes replace the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub severity: SeverityFilter,
    pub status: StatusFilter,
    pub search_term: String,
    pub selected_host: String,
    pub time_range: TimeRange,
}

/// Record facets the filter predicate inspects.
///
/// A facet a record type does not carry keeps its default, which lets
/// the corresponding criterion pass: hosts have no severity, problems
/// reference no hosts, and neither should vanish when those filters
/// are set.
pub trait Filterable {
    /// Wire severity code ("0".."5"), if the record carries one.
    fn severity_code(&self) -> Option<&str> {
        None
    }

    /// Epoch-seconds timestamp, if present and parsable.
    fn clock_secs(&self) -> Option<i64> {
        None
    }

    /// Whether the record's derived status matches the given filter.
    fn matches_status(&self, status: StatusFilter) -> bool {
        let _ = status;
        true
    }

    /// Case-insensitive search across the record's text facets.
    /// `needle` is already lowercased.
    fn matches_search(&self, needle: &str) -> bool;

    /// Whether the record references the named host.
    fn references_host(&self, host: &str) -> bool {
        let _ = host;
        true
    }
}

impl FilterCriteria {
    /// Number of criteria away from their defaults.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.severity != SeverityFilter::All {
            count += 1;
        }
        if self.status != StatusFilter::All {
            count += 1;
        }
        if !self.search_term.is_empty() {
            count += 1;
        }
        if !self.selected_host.is_empty() {
            count += 1;
        }
        if self.time_range != TimeRange::Last24Hours {
            count += 1;
        }
        count
    }

    /// Reset every field to its default, atomically.
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    /// The filter predicate: an item passes iff every criterion
    /// accepts it. `now_ms` is the caller's current epoch time in
    /// milliseconds.
    pub fn accepts<T: Filterable + ?Sized>(&self, item: &T, now_ms: i64) -> bool {
        if let SeverityFilter::Level(level) = self.severity {
            if let Some(code) = item.severity_code() {
                if Severity::from_wire(code) != Some(level) {
                    return false;
                }
            }
        }

        if self.status != StatusFilter::All && !item.matches_status(self.status) {
            return false;
        }

        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            if !item.matches_search(&needle) {
                return false;
            }
        }

        if !self.selected_host.is_empty() && !item.references_host(&self.selected_host) {
            return false;
        }

        if let Some(window) = self.time_range.window_ms() {
            match item.clock_secs() {
                Some(secs) => {
                    if now_ms - secs * 1000 > window {
                        return false;
                    }
                }
                // A record whose age cannot be established is not
                // within any bounded window.
                None => return false,
            }
        }

        true
    }
}

/// Apply the predicate and truncate to `cap`, preserving fetch order.
///
/// The result is always a prefix of the filtered sequence: the first
/// `cap` items that pass, in the order the gateway returned them.
pub fn filter_and_cap<T: Filterable>(
    items: Vec<T>,
    criteria: &FilterCriteria,
    cap: usize,
    now_ms: i64,
) -> Vec<T> {
    let mut kept: Vec<T> = items.into_iter().filter(|i| criteria.accepts(i, now_ms)).collect();
    kept.truncate(cap);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Event, Host, HostRef, Problem, Trigger};

    const NOW_MS: i64 = 1_700_000_000_000;

    fn event(severity: &str, clock_secs: i64) -> Event {
        Event {
            eventid: format!("{}-{}", severity, clock_secs),
            name: "Test event".to_string(),
            severity: severity.to_string(),
            acknowledged: "0".to_string(),
            clock: clock_secs.to_string(),
            ..Event::default()
        }
    }

    fn recent_event(severity: &str) -> Event {
        event(severity, NOW_MS / 1000 - 60)
    }

    fn identity_criteria() -> FilterCriteria {
        FilterCriteria {
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn identity_criteria_accept_every_item() {
        let criteria = identity_criteria();
        for severity in ["0", "1", "2", "3", "4", "5", ""] {
            assert!(criteria.accepts(&event(severity, 0), NOW_MS));
        }
        assert!(criteria.accepts(&Problem::default(), NOW_MS));
        assert!(criteria.accepts(&Trigger::default(), NOW_MS));
        assert!(criteria.accepts(&Host::default(), NOW_MS));
    }

    #[test]
    fn severity_filter_matches_exact_level_only() {
        let criteria = FilterCriteria {
            severity: SeverityFilter::Level(Severity::Average),
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        };
        assert!(criteria.accepts(&recent_event("3"), NOW_MS));
        for other in ["0", "1", "2", "4", "5", "junk"] {
            assert!(!criteria.accepts(&recent_event(other), NOW_MS));
        }
    }

    #[test]
    fn severity_filter_passes_records_without_severity() {
        let criteria = FilterCriteria {
            severity: SeverityFilter::Level(Severity::Disaster),
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        };
        assert!(criteria.accepts(&Host::default(), NOW_MS));
    }

    #[test]
    fn one_hour_window_bounds_item_age() {
        let criteria = FilterCriteria {
            time_range: TimeRange::LastHour,
            ..FilterCriteria::default()
        };
        let now_secs = NOW_MS / 1000;

        // Exactly on the boundary is still inside.
        assert!(criteria.accepts(&event("1", now_secs - 3600), NOW_MS));
        // One second older is out.
        assert!(!criteria.accepts(&event("1", now_secs - 3601), NOW_MS));
    }

    #[test]
    fn bounded_window_rejects_unparsable_clock() {
        let criteria = FilterCriteria {
            time_range: TimeRange::LastHour,
            ..FilterCriteria::default()
        };
        let mut item = recent_event("1");
        item.clock = "not-a-timestamp".to_string();
        assert!(!criteria.accepts(&item, NOW_MS));
    }

    #[test]
    fn status_filter_on_acknowledged_flag() {
        let criteria_ok = FilterCriteria {
            status: StatusFilter::Ok,
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        };
        let criteria_problem = FilterCriteria {
            status: StatusFilter::Problem,
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        };

        let unacked = recent_event("2");
        let mut acked = recent_event("2");
        acked.acknowledged = "1".to_string();

        assert!(criteria_ok.accepts(&unacked, NOW_MS));
        assert!(!criteria_ok.accepts(&acked, NOW_MS));
        assert!(criteria_problem.accepts(&acked, NOW_MS));
        assert!(!criteria_problem.accepts(&unacked, NOW_MS));
    }

    #[test]
    fn status_filter_on_trigger_and_host_records() {
        let disabled = FilterCriteria {
            status: StatusFilter::Disabled,
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        };

        let trigger = Trigger {
            status: "1".to_string(),
            ..Trigger::default()
        };
        let host = Host {
            status: "0".to_string(),
            ..Host::default()
        };

        assert!(disabled.accepts(&trigger, NOW_MS));
        assert!(!disabled.accepts(&host, NOW_MS));
    }

    #[test]
    fn host_filter_checks_referenced_hosts() {
        let criteria = FilterCriteria {
            selected_host: "web-01".to_string(),
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        };

        let mut on_host = recent_event("1");
        on_host.hosts = vec![HostRef {
            host: "web-01".to_string(),
            ..HostRef::default()
        }];
        let elsewhere = recent_event("1");

        assert!(criteria.accepts(&on_host, NOW_MS));
        assert!(!criteria.accepts(&elsewhere, NOW_MS));
        // Problems carry no host references and are unaffected.
        assert!(criteria.accepts(&Problem::default(), NOW_MS));
    }

    #[test]
    fn search_is_case_insensitive() {
        let criteria = FilterCriteria {
            search_term: "CPU".to_string(),
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        };
        let mut item = recent_event("1");
        item.name = "high cpu load on db-01".to_string();
        assert!(criteria.accepts(&item, NOW_MS));

        item.name = "disk space".to_string();
        assert!(!criteria.accepts(&item, NOW_MS));
    }

    #[test]
    fn capping_keeps_a_prefix_in_fetch_order() {
        let items: Vec<Event> = (0..8)
            .map(|i| {
                let severity = if i % 2 == 0 { "4" } else { "1" };
                let mut e = recent_event(severity);
                e.eventid = i.to_string();
                e
            })
            .collect();

        let criteria = FilterCriteria {
            severity: SeverityFilter::Level(Severity::High),
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        };

        let kept = filter_and_cap(items, &criteria, 3, NOW_MS);
        let ids: Vec<&str> = kept.iter().map(|e| e.eventid.as_str()).collect();
        // First three passing items, original order.
        assert_eq!(ids, vec!["0", "2", "4"]);
    }

    #[test]
    fn cap_one_with_identity_filter_keeps_first_item() {
        let first = recent_event("4");
        let second = recent_event("1");
        let kept = filter_and_cap(
            vec![first.clone(), second],
            &identity_criteria(),
            1,
            NOW_MS,
        );
        assert_eq!(kept, vec![first]);
    }

    #[test]
    fn active_count_tracks_non_default_fields() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.active_count(), 0);

        criteria.severity = SeverityFilter::Level(Severity::High);
        criteria.search_term = "cpu".to_string();
        criteria.time_range = TimeRange::All;
        assert_eq!(criteria.active_count(), 3);

        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(criteria.active_count(), 0);
    }
}
