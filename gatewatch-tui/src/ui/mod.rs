//! Terminal rendering.
//!
//! One file per view, plus the shared chrome ([`common`]), the
//! presentation card ([`card`]), the filter editor overlay
//! ([`filter`]), and the [`Theme`].

pub mod card;
pub mod common;
pub mod events;
pub mod filter;
pub mod health;
pub mod hosts;
pub mod live;
pub mod problems;
pub mod theme;
pub mod triggers;

pub use card::{Card, CardVariant};
pub use theme::Theme;
