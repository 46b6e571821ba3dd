//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming URL ("#/users/42")
//!     → matcher.rs (strip hash marker → "users/42")
//!     → table.rs (literal lookup, then parameterized scan)
//!     → matcher.rs (segment-wise comparison, parameter binding)
//!     → Return: MatchResult::Matched(handler, params) or NoMatch
//!
//! Route Compilation (on registration):
//!     (pattern, handler) pairs in order
//!     → pattern.rs (split on '/', classify literal / {param})
//!     → Freeze into RouteTable until replaced wholesale
//! ```
//!
//! # Design Decisions
//! - Literal matches take priority over parameterized ones
//! - Deterministic: same input always matches same route
//! - First match wins among parameterized patterns (registration order)
//! - Matching never fails; absence of a route is `NoMatch`

pub mod matcher;
pub mod params;
pub mod pattern;
pub mod table;

pub use matcher::strip_hash;
pub use params::RouteParams;
pub use pattern::{RoutePattern, Segment};
pub use table::{MatchResult, RouteMatch, RouteTable};
