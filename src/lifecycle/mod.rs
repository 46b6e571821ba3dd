//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → init logging → build router → start watcher → run driver
//!
//! Shutdown (shutdown.rs):
//!     Ctrl-C / stdin EOF → trigger → driver drops its subscription → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
