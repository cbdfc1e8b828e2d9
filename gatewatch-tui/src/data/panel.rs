//! Panel state: one fetched collection with its lifecycle flags.
//!
//! Each panel exclusively owns what it last fetched. A completed fetch
//! replaces the collection wholesale (filtered, then capped); a failed
//! fetch clears it and records the error. Nothing is merged across
//! fetches and failures never leave the panel.

use std::time::{Duration, Instant};

use gatewatch_types::{filter_and_cap, FilterCriteria, Filterable};

/// State for a panel showing a list resource (events, problems,
/// triggers, hosts).
#[derive(Debug)]
pub struct ListPanel<T> {
    /// Visible collection: a prefix of the last fetch, post-filter.
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// When the last successful fetch completed, for "updated Ns ago".
    pub last_updated: Option<Instant>,
    /// Maximum number of items kept after filtering.
    pub cap: usize,
    /// Auto-refresh interval; `None` disables the timer.
    pub refresh_every: Option<Duration>,
    last_fetch_started: Option<Instant>,
    /// Selection cursor into `items`.
    pub selected: usize,
}

impl<T: Filterable> ListPanel<T> {
    pub fn new(cap: usize, refresh_every: Option<Duration>) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            last_updated: None,
            cap,
            refresh_every,
            last_fetch_started: None,
            selected: 0,
        }
    }

    /// Mark a fetch as in flight. Clears the previous error so the
    /// retry path starts clean, but keeps the stale items visible
    /// until the result lands.
    pub fn begin_fetch(&mut self, now: Instant) {
        self.loading = true;
        self.error = None;
        self.last_fetch_started = Some(now);
    }

    /// Apply a completed fetch. `now_ms` is epoch milliseconds for the
    /// time-range criterion.
    ///
    /// Results are applied in arrival order; with several fetches in
    /// flight the last one to resolve wins.
    pub fn complete(
        &mut self,
        result: Result<Vec<T>, String>,
        criteria: &FilterCriteria,
        now_ms: i64,
    ) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = filter_and_cap(items, criteria, self.cap, now_ms);
                self.error = None;
                self.last_updated = Some(Instant::now());
                if self.selected >= self.items.len() {
                    self.selected = self.items.len().saturating_sub(1);
                }
            }
            Err(message) => {
                self.error = Some(message);
                self.items.clear();
                self.selected = 0;
            }
        }
    }

    /// Whether the auto-refresh timer has elapsed (always true before
    /// the first fetch).
    pub fn due_for_refresh(&self, now: Instant) -> bool {
        match self.last_fetch_started {
            None => true,
            Some(started) => match self.refresh_every {
                Some(interval) => now.duration_since(started) >= interval,
                None => false,
            },
        }
    }

    /// An empty result with no error pending: the empty state, which
    /// is not an error.
    pub fn is_empty_ok(&self) -> bool {
        self.items.is_empty() && self.error.is_none() && self.last_updated.is_some()
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// State for a panel showing one record (the health report).
///
/// Same lifecycle as [`ListPanel`], minus filtering and capping.
#[derive(Debug)]
pub struct SnapshotPanel<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<Instant>,
    pub refresh_every: Option<Duration>,
    last_fetch_started: Option<Instant>,
}

impl<T> SnapshotPanel<T> {
    pub fn new(refresh_every: Option<Duration>) -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            last_updated: None,
            refresh_every,
            last_fetch_started: None,
        }
    }

    pub fn begin_fetch(&mut self, now: Instant) {
        self.loading = true;
        self.error = None;
        self.last_fetch_started = Some(now);
    }

    pub fn complete(&mut self, result: Result<T, String>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.last_updated = Some(Instant::now());
            }
            Err(message) => {
                self.error = Some(message);
                self.data = None;
            }
        }
    }

    pub fn due_for_refresh(&self, now: Instant) -> bool {
        match self.last_fetch_started {
            None => true,
            Some(started) => match self.refresh_every {
                Some(interval) => now.duration_since(started) >= interval,
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewatch_types::{Event, HealthSnapshot, SeverityFilter, TimeRange};

    const NOW_MS: i64 = 1_700_000_000_000;

    fn event(id: &str, severity: &str) -> Event {
        Event {
            eventid: id.to_string(),
            name: format!("event {}", id),
            severity: severity.to_string(),
            clock: (NOW_MS / 1000 - 60).to_string(),
            acknowledged: "0".to_string(),
            ..Event::default()
        }
    }

    fn identity() -> FilterCriteria {
        FilterCriteria {
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn successful_fetch_replaces_items_wholesale() {
        let mut panel: ListPanel<Event> = ListPanel::new(10, None);
        panel.begin_fetch(Instant::now());
        assert!(panel.loading);

        panel.complete(Ok(vec![event("1", "4")]), &identity(), NOW_MS);
        assert!(!panel.loading);
        assert_eq!(panel.items.len(), 1);
        assert!(panel.last_updated.is_some());

        // A second fetch replaces, never merges.
        panel.complete(Ok(vec![event("2", "1"), event("3", "2")]), &identity(), NOW_MS);
        assert_eq!(panel.items.len(), 2);
        assert_eq!(panel.items[0].eventid, "2");
    }

    #[test]
    fn cap_keeps_first_passing_item() {
        let mut panel: ListPanel<Event> = ListPanel::new(1, None);
        panel.complete(Ok(vec![event("a", "4"), event("b", "1")]), &identity(), NOW_MS);
        assert_eq!(panel.items.len(), 1);
        assert_eq!(panel.items[0].eventid, "a");
    }

    #[test]
    fn filter_applies_before_cap() {
        let mut panel: ListPanel<Event> = ListPanel::new(1, None);
        let criteria = FilterCriteria {
            severity: SeverityFilter::Level(gatewatch_types::Severity::Information),
            time_range: TimeRange::All,
            ..FilterCriteria::default()
        };
        panel.complete(Ok(vec![event("a", "4"), event("b", "1")]), &criteria, NOW_MS);
        assert_eq!(panel.items.len(), 1);
        assert_eq!(panel.items[0].eventid, "b");
    }

    #[test]
    fn failed_fetch_sets_error_and_clears_items() {
        let mut panel: ListPanel<Event> = ListPanel::new(10, None);
        panel.complete(Ok(vec![event("1", "3")]), &identity(), NOW_MS);
        panel.selected = 0;

        panel.begin_fetch(Instant::now());
        panel.complete(Err("HTTP error: 500 Internal Server Error".to_string()), &identity(), NOW_MS);

        assert!(!panel.loading);
        assert!(panel.items.is_empty());
        assert_eq!(
            panel.error.as_deref(),
            Some("HTTP error: 500 Internal Server Error")
        );
        assert!(!panel.is_empty_ok());
    }

    #[test]
    fn retry_clears_the_error_and_loads_again() {
        let mut panel: ListPanel<Event> = ListPanel::new(10, None);
        panel.complete(Err("HTTP error: 500".to_string()), &identity(), NOW_MS);
        assert!(panel.error.is_some());

        // Retry re-issues the same fetch; the panel goes back to
        // loading with the error cleared.
        panel.begin_fetch(Instant::now());
        assert!(panel.loading);
        assert!(panel.error.is_none());

        panel.complete(Ok(vec![event("1", "2")]), &identity(), NOW_MS);
        assert_eq!(panel.items.len(), 1);
    }

    #[test]
    fn last_resolved_fetch_wins() {
        let mut panel: ListPanel<Event> = ListPanel::new(10, None);
        // Two fetches in flight; the slow (stale) one resolves last
        // and overwrites the fresh result.
        panel.begin_fetch(Instant::now());
        panel.begin_fetch(Instant::now());
        panel.complete(Ok(vec![event("fresh", "1")]), &identity(), NOW_MS);
        panel.complete(Ok(vec![event("stale", "1")]), &identity(), NOW_MS);
        assert_eq!(panel.items[0].eventid, "stale");
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut panel: ListPanel<Event> = ListPanel::new(10, None);
        panel.complete(Ok(Vec::new()), &identity(), NOW_MS);
        assert!(panel.is_empty_ok());
        assert!(panel.error.is_none());
    }

    #[test]
    fn refresh_timer_fires_after_interval() {
        let mut panel: ListPanel<Event> = ListPanel::new(10, Some(Duration::from_secs(30)));
        let start = Instant::now();
        assert!(panel.due_for_refresh(start));

        panel.begin_fetch(start);
        assert!(!panel.due_for_refresh(start + Duration::from_secs(29)));
        assert!(panel.due_for_refresh(start + Duration::from_secs(30)));
    }

    #[test]
    fn disabled_timer_never_fires_after_first_fetch() {
        let mut panel: ListPanel<Event> = ListPanel::new(10, None);
        let start = Instant::now();
        assert!(panel.due_for_refresh(start));
        panel.begin_fetch(start);
        assert!(!panel.due_for_refresh(start + Duration::from_secs(3600)));
    }

    #[test]
    fn snapshot_panel_replaces_and_clears() {
        let mut panel: SnapshotPanel<HealthSnapshot> = SnapshotPanel::new(None);
        panel.begin_fetch(Instant::now());
        panel.complete(Ok(HealthSnapshot {
            status: "ok".to_string(),
            ..HealthSnapshot::default()
        }));
        assert!(panel.data.as_ref().unwrap().is_ok());

        panel.complete(Err("Connection failed: refused".to_string()));
        assert!(panel.data.is_none());
        assert!(panel.error.is_some());
    }
}
