//! Handler dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! URL
//!     → RouteTable::resolve (routing)
//!     → named.rs: handler name → registry.rs lookup → invoke → bool / Option<R>
//!     → direct.rs: stored callable → invoke → Option<R>
//! ```
//!
//! # Design Decisions
//! - Two router types select the resolution strategy at construction
//! - Handler names resolve through an injected registry, never global state
//! - An unresolvable name behaves exactly like an unmatched URL

pub mod direct;
pub mod named;
pub mod registry;

pub use direct::DirectRouter;
pub use named::NamedRouter;
pub use registry::{Handler, HandlerRegistry};
