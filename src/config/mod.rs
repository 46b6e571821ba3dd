//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! routes.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → route pairs handed to NamedRouter
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → sent to the driver, which replaces its routes wholesale
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Routes are an array so registration order survives deserialization

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{DriverConfig, ObservabilityConfig, RouteConfig, RouterConfig};
pub use validation::ValidationError;
pub use watcher::ConfigWatcher;
