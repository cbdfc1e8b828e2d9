//! Application state and navigation logic.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use gatewatch_types::{Event, FilterCriteria, HealthSnapshot, Host, Problem, Trigger};

use crate::config::Settings;
use crate::data::{epoch_ms, ListPanel, LiveEvent, LiveState, SnapshotPanel};
use crate::fetch::{Fetcher, GatewayUpdate};
use crate::ui::filter::FilterEditor;
use crate::ui::Theme;

/// The current view/tab in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Events,
    Problems,
    Triggers,
    Hosts,
    Health,
    Live,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Events => View::Problems,
            View::Problems => View::Triggers,
            View::Triggers => View::Hosts,
            View::Hosts => View::Health,
            View::Health => View::Live,
            View::Live => View::Events,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Events => View::Live,
            View::Problems => View::Events,
            View::Triggers => View::Problems,
            View::Hosts => View::Triggers,
            View::Health => View::Hosts,
            View::Live => View::Health,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Events => "Events",
            View::Problems => "Problems",
            View::Triggers => "Triggers",
            View::Hosts => "Hosts",
            View::Health => "Health",
            View::Live => "Live",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub view: View,
    pub show_help: bool,

    // Filtering
    pub criteria: FilterCriteria,
    /// Open filter editor overlay, if any.
    pub filter_editor: Option<FilterEditor>,
    /// Inline search input mode (the `/` key).
    pub search_active: bool,
    /// Draft search text while `search_active`.
    pub search_input: String,

    // One panel per gateway resource
    pub events: ListPanel<Event>,
    pub problems: ListPanel<Problem>,
    pub triggers: ListPanel<Trigger>,
    pub hosts: ListPanel<Host>,
    pub health: SnapshotPanel<HealthSnapshot>,

    // Live push channel
    pub live: LiveState,
    live_rx: Option<mpsc::Receiver<LiveEvent>>,

    // UI
    pub theme: Theme,
    status_message: Option<(String, Instant)>,

    fetcher: Fetcher,
    updates: mpsc::Receiver<GatewayUpdate>,
}

impl App {
    /// Create a new App over a fetch channel, with panels sized from
    /// the settings.
    pub fn new(
        fetcher: Fetcher,
        updates: mpsc::Receiver<GatewayUpdate>,
        settings: &Settings,
    ) -> Self {
        let list_refresh = settings
            .auto_refresh
            .then(|| Duration::from_secs(settings.refresh_secs.max(1)));
        let hosts_refresh = settings
            .auto_refresh
            .then(|| Duration::from_secs(settings.hosts_refresh_secs.max(1)));

        Self {
            running: true,
            view: View::Events,
            show_help: false,
            criteria: FilterCriteria::default(),
            filter_editor: None,
            search_active: false,
            search_input: String::new(),
            events: ListPanel::new(settings.list_limit, list_refresh),
            problems: ListPanel::new(settings.list_limit, list_refresh),
            triggers: ListPanel::new(settings.list_limit, list_refresh),
            hosts: ListPanel::new(settings.host_limit, hosts_refresh),
            health: SnapshotPanel::new(list_refresh),
            live: LiveState::default(),
            live_rx: None,
            theme: Theme::auto_detect(),
            status_message: None,
            fetcher,
            updates,
        }
    }

    /// Attach a live push-channel listener.
    pub fn attach_live(&mut self, endpoint: String, rx: mpsc::Receiver<LiveEvent>) {
        self.live.endpoint = Some(endpoint);
        self.live_rx = Some(rx);
    }

    /// The gateway endpoint, for the header bar.
    pub fn gateway(&self) -> &str {
        self.fetcher.endpoint()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// One UI-loop step: apply completed fetches and live events, then
    /// re-issue any fetch whose panel timer elapsed.
    pub fn tick(&mut self) {
        self.drain_updates();
        self.drain_live();
        self.auto_refresh();
    }

    /// Apply completed fetches in arrival order (last to resolve
    /// wins).
    pub fn drain_updates(&mut self) {
        let now_ms = epoch_ms();
        while let Ok(update) = self.updates.try_recv() {
            match update {
                GatewayUpdate::Events(result) => {
                    self.events.complete(result.map_err(|e| e.to_string()), &self.criteria, now_ms)
                }
                GatewayUpdate::Problems(result) => {
                    self.problems.complete(result.map_err(|e| e.to_string()), &self.criteria, now_ms)
                }
                GatewayUpdate::Triggers(result) => {
                    self.triggers.complete(result.map_err(|e| e.to_string()), &self.criteria, now_ms)
                }
                GatewayUpdate::Hosts(result) => {
                    self.hosts.complete(result.map_err(|e| e.to_string()), &self.criteria, now_ms)
                }
                GatewayUpdate::Health(result) => {
                    self.health.complete(result.map_err(|e| e.to_string()))
                }
            }
        }
    }

    fn drain_live(&mut self) {
        if let Some(rx) = &mut self.live_rx {
            while let Ok(event) = rx.try_recv() {
                self.live.apply(event);
            }
        }
    }

    fn auto_refresh(&mut self) {
        let now = Instant::now();
        if self.events.due_for_refresh(now) {
            self.events.begin_fetch(now);
            self.fetcher.spawn_events();
        }
        if self.problems.due_for_refresh(now) {
            self.problems.begin_fetch(now);
            self.fetcher.spawn_problems();
        }
        if self.triggers.due_for_refresh(now) {
            self.triggers.begin_fetch(now);
            self.fetcher.spawn_triggers(self.trigger_host());
        }
        if self.hosts.due_for_refresh(now) {
            self.hosts.begin_fetch(now);
            self.fetcher.spawn_hosts();
        }
        if self.health.due_for_refresh(now) {
            self.health.begin_fetch(now);
            self.fetcher.spawn_health();
        }
    }

    fn trigger_host(&self) -> Option<String> {
        if self.criteria.selected_host.is_empty() {
            None
        } else {
            Some(self.criteria.selected_host.clone())
        }
    }

    /// Re-issue the fetch behind the current view. With an error
    /// showing, this is the retry control: the same request again.
    pub fn refresh_current(&mut self) {
        let now = Instant::now();
        match self.view {
            View::Events => {
                self.events.begin_fetch(now);
                self.fetcher.spawn_events();
            }
            View::Problems => {
                self.problems.begin_fetch(now);
                self.fetcher.spawn_problems();
            }
            View::Triggers => {
                self.triggers.begin_fetch(now);
                self.fetcher.spawn_triggers(self.trigger_host());
            }
            View::Hosts => {
                self.hosts.begin_fetch(now);
                self.fetcher.spawn_hosts();
            }
            View::Health => {
                self.health.begin_fetch(now);
                self.fetcher.spawn_health();
            }
            View::Live => {}
        }
    }

    /// Re-issue every fetch.
    pub fn refresh_all(&mut self) {
        let now = Instant::now();
        self.events.begin_fetch(now);
        self.fetcher.spawn_events();
        self.problems.begin_fetch(now);
        self.fetcher.spawn_problems();
        self.triggers.begin_fetch(now);
        self.fetcher.spawn_triggers(self.trigger_host());
        self.hosts.begin_fetch(now);
        self.fetcher.spawn_hosts();
        self.health.begin_fetch(now);
        self.fetcher.spawn_health();
    }

    /// Replace the criteria record and notify every panel (a re-fetch,
    /// since panels store post-filter collections).
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.refresh_all();
        }
    }

    /// Reset all filters to defaults, atomically.
    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    // Navigation ---------------------------------------------------

    pub fn next_view(&mut self) {
        self.view = self.view.next();
    }

    pub fn prev_view(&mut self) {
        self.view = self.view.prev();
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Move the current panel's selection down.
    pub fn select_next(&mut self) {
        match self.view {
            View::Events => self.events.select_next(),
            View::Problems => self.problems.select_next(),
            View::Triggers => self.triggers.select_next(),
            View::Hosts => self.hosts.select_next(),
            View::Health | View::Live => {}
        }
    }

    /// Move the current panel's selection up.
    pub fn select_prev(&mut self) {
        match self.view {
            View::Events => self.events.select_prev(),
            View::Problems => self.problems.select_prev(),
            View::Triggers => self.triggers.select_prev(),
            View::Hosts => self.hosts.select_prev(),
            View::Health | View::Live => {}
        }
    }

    // Search input -------------------------------------------------

    /// Enter inline search mode, seeded with the current term.
    pub fn start_search(&mut self) {
        self.search_active = true;
        self.search_input = self.criteria.search_term.clone();
    }

    /// Commit the search draft as a criteria change.
    pub fn commit_search(&mut self) {
        self.search_active = false;
        let mut criteria = self.criteria.clone();
        criteria.search_term = std::mem::take(&mut self.search_input);
        self.set_criteria(criteria);
    }

    /// Leave search mode without changing the criteria.
    pub fn cancel_search(&mut self) {
        self.search_active = false;
        self.search_input.clear();
    }

    // Filter editor ------------------------------------------------

    pub fn open_filter_editor(&mut self) {
        self.filter_editor = Some(FilterEditor::from_criteria(&self.criteria));
    }

    pub fn close_filter_editor(&mut self) {
        self.filter_editor = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit. Panel timers die with the loop.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewatch_client::GatewayClient;
    use gatewatch_types::{SeverityFilter, TimeRange};
    use serde_json::json;
    use tokio::runtime::Handle;

    fn test_app() -> App {
        let client = GatewayClient::builder().endpoint("http://gw.test:8080").build();
        let (fetcher, rx) = Fetcher::new(client, Handle::current());
        App::new(fetcher, rx, &Settings::default())
    }

    #[tokio::test]
    async fn criteria_change_marks_every_panel_loading() {
        let mut app = test_app();
        assert!(!app.events.loading);

        app.set_criteria(FilterCriteria {
            severity: SeverityFilter::Level(gatewatch_types::Severity::High),
            ..FilterCriteria::default()
        });

        assert!(app.events.loading);
        assert!(app.problems.loading);
        assert!(app.triggers.loading);
        assert!(app.hosts.loading);
        assert!(app.health.loading);
    }

    #[tokio::test]
    async fn unchanged_criteria_do_not_refetch() {
        let mut app = test_app();
        app.set_criteria(FilterCriteria::default());
        assert!(!app.events.loading);
    }

    #[tokio::test]
    async fn search_commit_replaces_the_whole_record() {
        let mut app = test_app();
        app.criteria.time_range = TimeRange::All;

        app.start_search();
        app.search_input = "cpu".to_string();
        app.commit_search();

        assert_eq!(app.criteria.search_term, "cpu");
        // Other fields ride along unchanged.
        assert_eq!(app.criteria.time_range, TimeRange::All);
        assert!(!app.search_active);
    }

    #[tokio::test]
    async fn cancelled_search_leaves_criteria_alone() {
        let mut app = test_app();
        app.start_search();
        app.search_input = "discarded".to_string();
        app.cancel_search();
        assert_eq!(app.criteria.search_term, "");
    }

    #[tokio::test]
    async fn live_events_flow_into_state() {
        let mut app = test_app();
        let (tx, rx) = mpsc::channel(8);
        app.attach_live("ws://localhost:1337".to_string(), rx);

        tx.send(LiveEvent::Connected).await.unwrap();
        tx.send(LiveEvent::Data(crate::data::LiveMessage::from_payload(
            json!({"type": "entry_created", "data": 1}),
            1,
        )))
        .await
        .unwrap();

        app.tick();
        assert!(app.live.connected);
        assert_eq!(app.live.feed.len(), 1);
    }

    #[tokio::test]
    async fn view_cycle_is_closed() {
        let mut view = View::Events;
        for _ in 0..6 {
            view = view.next();
        }
        assert_eq!(view, View::Events);
        assert_eq!(View::Events.prev(), View::Live);
    }
}
