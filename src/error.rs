//! Crate-level error type for the driver and binary glue.
//!
//! Route matching itself never fails; these cover configuration, file
//! watching and the hash-change subscription.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum RouterError {
    /// Config could not be loaded or failed validation.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The config file watcher could not be started.
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// The hash-change source only supports a single subscriber.
    #[error("hash change source already has a subscriber")]
    AlreadySubscribed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for driver operations.
pub type RouterResult<T> = Result<T, RouterError>;
