//! # gatewatch-types
//!
//! Core types for monitoring gateway data - the universal schema shared
//! by the gatewatch client and dashboard.
//!
//! This crate defines the wire shapes the gateway relays (events,
//! problems, triggers, hosts, health) and the client-side filter model
//! applied to them. The filter predicate is a pure function over the
//! [`Filterable`] trait so it can be tested and benchmarked with no
//! transport or rendering attached.
//!
//! ## Features
//!
//! - `serde`: JSON (de)serialization for all wire types
//!
//! ## Example
//!
//! ```rust
//! use gatewatch_types::{filter_and_cap, Event, FilterCriteria, SeverityFilter, Severity, TimeRange};
//!
//! let events = vec![
//!     Event { severity: "4".into(), name: "High CPU".into(), ..Event::default() },
//!     Event { severity: "1".into(), name: "Info".into(), ..Event::default() },
//! ];
//!
//! let criteria = FilterCriteria {
//!     severity: SeverityFilter::Level(Severity::High),
//!     time_range: TimeRange::All,
//!     ..FilterCriteria::default()
//! };
//!
//! let now_ms = 1_700_000_000_000;
//! let shown = filter_and_cap(events, &criteria, 10, now_ms);
//! assert_eq!(shown.len(), 1);
//! ```

mod filter;
mod health;
mod item;
mod severity;

pub use filter::{filter_and_cap, FilterCriteria, Filterable, SeverityFilter, StatusFilter, TimeRange};
pub use health::{HealthSnapshot, MemoryUsage};
pub use item::{Event, Host, HostRef, Problem, Tag, Trigger};
pub use severity::Severity;
