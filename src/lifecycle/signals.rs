//! OS signal handling.
//!
//! # Responsibilities
//! - Translate Ctrl-C (SIGINT) into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Route reloads come from the file watcher, not SIGHUP

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::Shutdown;

/// Trigger `shutdown` on the first Ctrl-C.
pub fn spawn_ctrl_c_handler(shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Ctrl-C received, shutting down");
                shutdown.trigger();
            }
            Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
        }
    })
}
