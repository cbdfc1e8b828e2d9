//! Example: Driving panels with synthetic updates
//!
//! This example demonstrates the panel pipeline without a gateway or a
//! terminal: fetch results are injected by hand and the panel applies
//! the same filter/cap/replace lifecycle the dashboard uses.
//!
//! This is useful when you want to:
//! - See how criteria changes affect what a panel shows
//! - Generate synthetic data for testing
//! - Understand the error/retry lifecycle
//!
//! # Usage
//!
//! ```bash
//! cargo run --example replay_updates
//! ```

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use gatewatch_tui::ListPanel;
use gatewatch_types::{
    Event, FilterCriteria, HostRef, Severity, SeverityFilter, TimeRange,
};

fn main() {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64;

    // Build a synthetic fetch result
    let events: Vec<Event> = (0..8i64)
        .map(|i| Event {
            eventid: format!("{}", 9000 + i),
            name: format!("Load average too high on node-{:02}", i % 3),
            clock: (now_ms / 1000 - i * 600).to_string(),
            severity: (i % 6).to_string(),
            acknowledged: if i % 2 == 0 { "0" } else { "1" }.to_string(),
            hosts: vec![HostRef {
                hostid: format!("{}", 10000 + i % 3),
                host: format!("node-{:02}", i % 3),
                name: format!("Node {:02}", i % 3),
            }],
            ..Event::default()
        })
        .collect();

    // A panel capped at 5, no timer
    let mut panel: ListPanel<Event> = ListPanel::new(5, None);

    // Identity criteria: everything passes, cap applies
    let identity = FilterCriteria {
        time_range: TimeRange::All,
        ..FilterCriteria::default()
    };
    panel.begin_fetch(Instant::now());
    panel.complete(Ok(events.clone()), &identity, now_ms);

    println!("Identity criteria, cap 5:");
    print_panel(&panel);

    // Narrow the criteria: only High severity on node-01
    let narrow = FilterCriteria {
        severity: SeverityFilter::Level(Severity::High),
        selected_host: "node-01".to_string(),
        time_range: TimeRange::All,
        ..FilterCriteria::default()
    };
    panel.begin_fetch(Instant::now());
    panel.complete(Ok(events.clone()), &narrow, now_ms);

    println!("\nHigh severity on node-01:");
    print_panel(&panel);

    // A failed fetch clears the collection and records the error
    panel.begin_fetch(Instant::now());
    panel.complete(
        Err("HTTP error: 500 Internal Server Error".to_string()),
        &identity,
        now_ms,
    );

    println!("\nAfter a failed fetch:");
    print_panel(&panel);

    // Retry: the same request again, this time succeeding
    panel.begin_fetch(Instant::now());
    panel.complete(Ok(events), &identity, now_ms);

    println!("\nAfter retry:");
    print_panel(&panel);
}

fn print_panel(panel: &ListPanel<Event>) {
    if let Some(error) = &panel.error {
        println!("  error: {} (items cleared: {})", error, panel.items.is_empty());
        return;
    }

    for event in &panel.items {
        let severity = event
            .severity()
            .map(|s| s.label())
            .unwrap_or("Unknown");
        let host = event.hosts.first().map(|h| h.host.as_str()).unwrap_or("-");
        println!(
            "  [{:>13}] {} on {} (ack: {})",
            severity,
            event.name,
            host,
            if event.is_acknowledged() { "yes" } else { "no" }
        );
    }
    println!("  ({} shown)", panel.items.len());
}
