//! Panel and feed state owned by the dashboard.
//!
//! ## Submodules
//!
//! - [`panel`]: fetch lifecycle state ([`ListPanel`], [`SnapshotPanel`])
//! - [`feed`]: bounded ring of recent live messages
//! - [`live`]: live message/event types and connection state
//! - [`time`]: epoch helpers and age formatting
//!
//! ## Data flow
//!
//! ```text
//! GatewayUpdate (fetch result)
//!        │
//!        ▼
//! ListPanel::complete()
//!        │
//!        ├──▶ filter_and_cap(criteria)   (gatewatch-types)
//!        │
//!        └──▶ items / error, last_updated
//! ```

pub mod feed;
pub mod live;
pub mod panel;
pub mod time;

pub use feed::{Feed, DEFAULT_FEED_CAPACITY};
pub use live::{LiveEvent, LiveMessage, LiveState};
pub use panel::{ListPanel, SnapshotPanel};
pub use time::{epoch_ms, format_age, format_clock_age};
