//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect duplicate patterns, which would silently shadow each other
//! - Reject routes without a handler name
//! - Validate the log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Patterns themselves are never rejected; malformed braces are literal text

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route pattern {0:?} is defined more than once")]
    DuplicatePattern(String),

    #[error("route pattern {0:?} has an empty handler name")]
    EmptyHandler(String),

    #[error("unknown log level {0:?} (expected one of trace, debug, info, warn, error)")]
    InvalidLogLevel(String),
}

/// Check a parsed config.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for route in &config.routes {
        if !seen.insert(route.pattern.as_str()) {
            errors.push(ValidationError::DuplicatePattern(route.pattern.clone()));
        }
        if route.handler.trim().is_empty() {
            errors.push(ValidationError::EmptyHandler(route.pattern.clone()));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
