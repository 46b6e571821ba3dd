//! Route file watcher for hot reload.
//!
//! # Design Decisions
//! - Watches the parent directory and filters on the file name, so editors
//!   that save by rename are still seen
//! - Only a validated config whose routes differ from the last one sent is
//!   forwarded; one save often produces several modify events
//! - An empty file is a save in progress and is skipped

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::event::{AccessKind, AccessMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::{RouteConfig, RouterConfig};

/// Watches the route configuration file and sends each new route table.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<RouterConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and a receiver for reloaded configs.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RouterConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching in a background thread.
    ///
    /// The returned watcher must be kept alive; dropping it stops the watch.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let dir = watch_dir(&self.path);
        let file_name = self.path.file_name().map(OsString::from);

        let mut reloader = Reloader {
            path: self.path.clone(),
            tx: self.update_tx,
            // Routes already in effect; the first reload must differ from them.
            last_routes: load_config(&self.path).ok().map(|c| c.routes),
        };

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let ours = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(OsString::from) == file_name);
                    if ours && is_write(&event.kind) {
                        reloader.reload();
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

struct Reloader {
    path: PathBuf,
    tx: mpsc::UnboundedSender<RouterConfig>,
    last_routes: Option<Vec<RouteConfig>>,
}

impl Reloader {
    fn reload(&mut self) {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => {
                tracing::trace!(path = ?self.path, "Route config is empty, waiting for write");
                return;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(path = ?self.path, "Route config unreadable: {}", e);
                return;
            }
        }

        let config = match load_config(&self.path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to reload route config: {}. Keeping current routes.", e);
                return;
            }
        };

        if self.last_routes.as_ref() == Some(&config.routes) {
            tracing::trace!("Route table unchanged, skipping reload");
            return;
        }

        tracing::info!(path = ?self.path, routes = config.routes.len(), "Route config changed");
        self.last_routes = Some(config.routes.clone());
        if self.tx.send(config).is_err() {
            tracing::debug!("Reload receiver dropped");
        }
    }
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_write(kind: &EventKind) -> bool {
    kind.is_modify()
        || kind.is_create()
        || matches!(kind, EventKind::Access(AccessKind::Close(AccessMode::Write)))
}
