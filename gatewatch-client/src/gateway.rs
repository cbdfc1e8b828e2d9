//! Gateway HTTP client.
//!
//! The gateway exposes one GET endpoint per resource and returns the
//! Zabbix API JSON unmodified: arrays for list resources, one object
//! for health. List endpoints take no parameters except the optional
//! `host` query on triggers, so all filtering is the caller's job.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gatewatch_client::{ApiStyle, GatewayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GatewayClient::builder()
//!         .endpoint("http://tin.eurisco:8080")
//!         .style(ApiStyle::Versioned)
//!         .build();
//!
//!     let problems = client.problems().await?;
//!     for problem in &problems {
//!         println!("[{}] {}", problem.severity, problem.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use gatewatch_types::{Event, HealthSnapshot, Host, Problem, Trigger};

use crate::{ApiStyle, ClientError, Resource};

/// Client for a Zabbix-compatible monitoring gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    endpoint: String,
    style: ApiStyle,
}

impl GatewayClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> GatewayClientBuilder {
        GatewayClientBuilder::default()
    }

    /// The configured gateway base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The path convention this client speaks.
    pub fn style(&self) -> ApiStyle {
        self.style
    }

    /// Fetch the gateway health report.
    pub async fn health(&self) -> Result<HealthSnapshot, ClientError> {
        let value = self.get_json(Resource::Health).await?;
        serde_json::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Fetch recent events.
    pub async fn events(&self) -> Result<Vec<Event>, ClientError> {
        self.fetch_list(Resource::Events).await
    }

    /// Fetch monitored hosts.
    pub async fn hosts(&self) -> Result<Vec<Host>, ClientError> {
        self.fetch_list(Resource::Hosts).await
    }

    /// Fetch active problems.
    pub async fn problems(&self) -> Result<Vec<Problem>, ClientError> {
        self.fetch_list(Resource::Problems).await
    }

    /// Fetch triggers, optionally scoped to one host.
    pub async fn triggers(&self, host: Option<&str>) -> Result<Vec<Trigger>, ClientError> {
        let mut request = self.client.get(self.url(Resource::Triggers));
        if let Some(host) = host {
            request = request.query(&[("host", host)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Http(response.status().to_string()));
        }

        let value: Value = response.json().await.map_err(|e| ClientError::Parse(e.to_string()))?;
        list_from_value(value)
    }

    /// Fetch any catalog resource as unparsed JSON.
    ///
    /// This backs the API listing view, where the payload is shown
    /// verbatim rather than rendered.
    pub async fn get_raw(&self, resource: Resource) -> Result<Value, ClientError> {
        self.get_json(resource).await
    }

    fn url(&self, resource: Resource) -> String {
        format!("{}{}", self.endpoint, resource.path(self.style))
    }

    async fn get_json(&self, resource: Resource) -> Result<Value, ClientError> {
        let response = self.client.get(self.url(resource)).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Http(response.status().to_string()));
        }

        response.json().await.map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn fetch_list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ClientError> {
        let value = self.get_json(resource).await?;
        list_from_value(value)
    }
}

/// Interpret a gateway list payload.
///
/// List endpoints normally return a JSON array; anything else (an
/// error object, null) is treated as an empty collection, matching how
/// the gateway's other consumers behave.
fn list_from_value<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ClientError> {
    match value {
        Value::Array(_) => {
            serde_json::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))
        }
        _ => Ok(Vec::new()),
    }
}

/// Builder for [`GatewayClient`].
#[derive(Debug, Default)]
pub struct GatewayClientBuilder {
    endpoint: Option<String>,
    style: Option<ApiStyle>,
    timeout: Option<Duration>,
}

impl GatewayClientBuilder {
    /// Set the gateway base URL (e.g. "http://tin.eurisco:8080").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Select the path convention (default: versioned).
    pub fn style(mut self, style: ApiStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> GatewayClient {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        let mut endpoint = self.endpoint.unwrap_or_else(|| "http://localhost:8080".to_string());
        // Trailing slashes would double up with the catalog paths.
        while endpoint.ends_with('/') {
            endpoint.pop();
        }

        GatewayClient {
            client,
            endpoint,
            style: self.style.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_defaults() {
        let client = GatewayClient::builder().build();
        assert_eq!(client.endpoint(), "http://localhost:8080");
        assert_eq!(client.style(), ApiStyle::Versioned);
    }

    #[test]
    fn builder_strips_trailing_slash() {
        let client = GatewayClient::builder().endpoint("http://gw:8080/").build();
        assert_eq!(client.endpoint(), "http://gw:8080");
    }

    #[test]
    fn urls_follow_the_selected_style() {
        let versioned = GatewayClient::builder().endpoint("http://gw:8080").build();
        assert_eq!(versioned.url(Resource::Events), "http://gw:8080/api/v1/events");

        let flat = GatewayClient::builder()
            .endpoint("http://gw:8080")
            .style(ApiStyle::Flat)
            .build();
        assert_eq!(flat.url(Resource::Events), "http://gw:8080/getEvents");
        assert_eq!(flat.url(Resource::Health), "http://gw:8080/healthz");
    }

    #[test]
    fn list_payload_parses_records() {
        let value = json!([
            {"eventid": "1", "name": "first", "severity": "4"},
            {"eventid": "2", "name": "second", "severity": "1"}
        ]);
        let events: Vec<Event> = list_from_value(value).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].eventid, "1");
        // Fields the payload omits default to empty.
        assert!(events[0].clock.is_empty());
    }

    #[test]
    fn non_array_list_payload_is_empty() {
        let events: Vec<Event> = list_from_value(json!({"error": "no data"})).unwrap();
        assert!(events.is_empty());

        let events: Vec<Event> = list_from_value(Value::Null).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn malformed_records_are_a_parse_error() {
        let result: Result<Vec<Event>, _> = list_from_value(json!(["not-an-object"]));
        assert!(matches!(result, Err(ClientError::Parse(_))));
    }
}
