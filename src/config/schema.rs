//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Route definitions, in registration order.
    pub routes: Vec<RouteConfig>,

    /// Driver settings.
    pub driver: DriverConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl RouterConfig {
    /// `(pattern, handler)` pairs in registration order.
    pub fn route_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .map(|r| (r.pattern.as_str(), r.handler.as_str()))
    }
}

/// A single pattern → handler name mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route pattern without the `#/` prefix, e.g. "users/{id}".
    /// The empty string is the root route.
    #[serde(default)]
    pub pattern: String,

    /// Name of the registered handler to invoke.
    pub handler: String,
}

/// Driver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DriverConfig {
    /// URL routed once at startup, before any hash change.
    pub initial_url: String,

    /// Reload routes when the config file changes.
    pub watch_config: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            initial_url: "#/".to_string(),
            watch_config: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
