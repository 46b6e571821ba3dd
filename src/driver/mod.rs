//! Driver subsystem: the glue between the host and the router.
//!
//! # Data Flow
//! ```text
//! HashLocation::set_hash (host navigation)
//!     → location.rs (single subscriber channel)
//!     → hash_driver.rs (select loop: changes, reloads, shutdown)
//!     → NamedRouter::dispatch
//!     → target.rs (render handler output, no-op without a target)
//! ```

pub mod hash_driver;
pub mod location;
pub mod target;

pub use hash_driver::{Controller, HashDriver, ReloadHook, RouteCallback};
pub use location::{HashChanges, HashLocation};
pub use target::{ContentTarget, MemoryTarget, StdoutTarget};
