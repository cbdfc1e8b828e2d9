//! # gatewatch-tui
//!
//! A terminal dashboard for Zabbix-compatible monitoring gateways.
//!
//! The dashboard fetches monitoring data (events, problems, triggers,
//! hosts, gateway health) over HTTP, filters it client-side, and
//! renders one panel per resource. An optional push channel streams
//! live backend events into a bounded feed.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Application                         │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐   ┌─────────┐  │
//! │  │  app    │───▶│   data   │───▶│   ui    │──▶│ Terminal│  │
//! │  │ (state) │    │ (panels) │    │(render) │   │         │  │
//! │  └────┬────┘    └──────────┘    └─────────┘   └─────────┘  │
//! │       │                                                    │
//! │       ▼                                                    │
//! │  ┌─────────┐         ┌──────────────────────────────┐      │
//! │  │  fetch  │◀────────│ gatewatch-client (HTTP GET)  │      │
//! │  └─────────┘         └──────────────────────────────┘      │
//! │       ▲                                                    │
//! │       └── live (WebSocket push channel, feature "live")    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: application state, view navigation, criteria plumbing
//! - **[`fetch`]**: background gateway fetches feeding one update channel
//! - **[`data`]**: panel lifecycle state, the live feed ring, time helpers
//! - **[`ui`]**: ratatui rendering - one file per view, cards, theme
//! - **[`live`]**: WebSocket listener for push updates (feature `live`)
//!
//! ## Usage
//!
//! ```bash
//! # Dashboard against a local gateway
//! gatewatch --endpoint http://localhost:8080
//!
//! # Legacy flat API paths plus a live feed
//! gatewatch --endpoint http://tin.eurisco:8080 --api flat --live ws://localhost:1337
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod fetch;
pub mod ui;

// Push-channel integration (requires "live" feature)
#[cfg(feature = "live")]
pub mod live;

// Re-export main types for convenience
pub use app::{App, View};
pub use config::Settings;
pub use data::{Feed, ListPanel, LiveEvent, LiveMessage, LiveState, SnapshotPanel};
pub use fetch::{Fetcher, GatewayUpdate};
pub use ui::{Card, CardVariant, Theme};
