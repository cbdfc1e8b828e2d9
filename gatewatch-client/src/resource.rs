//! Gateway resource catalog.
//!
//! Two API path conventions coexist on deployed gateways: the legacy
//! flat form (`/getEvents`, mirroring Zabbix method names 1:1) and the
//! versioned form (`/api/v1/events`). Both serve identical payloads;
//! [`ApiStyle`] selects which one a client speaks.

/// Which path convention to use when talking to the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiStyle {
    /// Legacy flat paths: `/healthz`, `/getEvents`, ...
    Flat,
    /// Versioned paths: `/api/v1/health`, `/api/v1/events`, ...
    #[default]
    Versioned,
}

/// A gateway resource that can be fetched with a plain GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Health,
    Events,
    Hosts,
    Problems,
    Triggers,
    Items,
    Hostgroups,
    History,
    Trends,
}

impl Resource {
    /// Every resource the gateway exposes, in display order.
    pub const ALL: [Resource; 9] = [
        Resource::Health,
        Resource::Events,
        Resource::Hosts,
        Resource::Problems,
        Resource::Triggers,
        Resource::Items,
        Resource::Hostgroups,
        Resource::History,
        Resource::Trends,
    ];

    /// Path under the legacy flat convention.
    pub fn flat_path(&self) -> &'static str {
        match self {
            Resource::Health => "/healthz",
            Resource::Events => "/getEvents",
            Resource::Hosts => "/getHosts",
            Resource::Problems => "/getProblems",
            Resource::Triggers => "/getTriggers",
            Resource::Items => "/getItems",
            Resource::Hostgroups => "/getHostgroups",
            Resource::History => "/getHistory",
            Resource::Trends => "/getTrends",
        }
    }

    /// Path under the versioned convention.
    pub fn versioned_path(&self) -> &'static str {
        match self {
            Resource::Health => "/api/v1/health",
            Resource::Events => "/api/v1/events",
            Resource::Hosts => "/api/v1/hosts",
            Resource::Problems => "/api/v1/problems",
            Resource::Triggers => "/api/v1/triggers",
            Resource::Items => "/api/v1/items",
            Resource::Hostgroups => "/api/v1/hostgroups",
            Resource::History => "/api/v1/history",
            Resource::Trends => "/api/v1/trends",
        }
    }

    /// Path for the given style.
    pub fn path(&self, style: ApiStyle) -> &'static str {
        match style {
            ApiStyle::Flat => self.flat_path(),
            ApiStyle::Versioned => self.versioned_path(),
        }
    }

    /// Short human description, for the API listing.
    pub fn description(&self) -> &'static str {
        match self {
            Resource::Health => "Gateway health",
            Resource::Events => "Recent events",
            Resource::Hosts => "Monitored hosts",
            Resource::Problems => "Active problems",
            Resource::Triggers => "Trigger status",
            Resource::Items => "Collected items",
            Resource::Hostgroups => "Host groups",
            Resource::History => "History values",
            Resource::Trends => "Trend values",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_conventions_cover_every_resource() {
        for resource in Resource::ALL {
            assert!(resource.flat_path().starts_with('/'));
            assert!(resource.versioned_path().starts_with("/api/v1/"));
        }
    }

    #[test]
    fn flat_paths_mirror_zabbix_method_names() {
        assert_eq!(Resource::Events.path(ApiStyle::Flat), "/getEvents");
        assert_eq!(Resource::Health.path(ApiStyle::Flat), "/healthz");
    }

    #[test]
    fn versioned_paths_are_lowercase_plurals() {
        assert_eq!(Resource::Problems.path(ApiStyle::Versioned), "/api/v1/problems");
        assert_eq!(Resource::Health.path(ApiStyle::Versioned), "/api/v1/health");
    }
}
