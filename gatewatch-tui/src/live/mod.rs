//! Push-channel integration for live updates.
//!
//! Maintains one persistent WebSocket connection to the backend's
//! messaging endpoint and forwards its lifecycle and payloads to the
//! UI loop as [`LiveEvent`](crate::data::LiveEvent)s:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Backend process                      │
//! │   ┌──────────┐      ┌─────────────────────────────────┐  │
//! │   │ Emitters │─────▶│ Messaging endpoint (WebSocket)  │  │
//! │   └──────────┘      └───────────────┬─────────────────┘  │
//! └─────────────────────────────────────┼────────────────────┘
//!                                       │
//!                                       ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                    gatewatch process                     │
//! │   ┌──────────────────┐  mpsc   ┌──────────────────────┐  │
//! │   │ listener task    │────────▶│ App (LiveState/Feed) │  │
//! │   └──────────────────┘         └──────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Payloads are opaque JSON; well-formed messages carry optional
//! `type`/`data`/`timestamp` fields. There is no backpressure: the UI
//! keeps the last-seen messages only.

mod listener;

pub use listener::spawn_listener;
