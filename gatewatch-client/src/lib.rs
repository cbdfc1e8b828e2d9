//! # gatewatch-client
//!
//! HTTP client for Zabbix-compatible monitoring gateways.
//!
//! The gateway sits in front of a Zabbix server and re-exposes its API
//! methods as plain GET endpoints returning JSON. This crate provides a
//! typed client over those endpoints plus a [`Resource`] catalog for
//! raw access, supporting both path conventions found on deployed
//! gateways (legacy flat and versioned, see [`ApiStyle`]).
//!
//! Fetches return [`ClientError`] on transport or parse failure; an
//! empty collection is a normal result, not an error.

mod error;
mod gateway;
mod resource;

pub use error::ClientError;
pub use gateway::{GatewayClient, GatewayClientBuilder};
pub use resource::{ApiStyle, Resource};
