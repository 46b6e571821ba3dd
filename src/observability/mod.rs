//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / dispatch / driver
//!     → tracing events with url, pattern, handler fields
//!     → logging.rs subscriber (env filter + fmt layer on stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
