//! Client-side URL hash router.
//!
//! Matches hash-fragment URLs such as `#/users/42` against an ordered set
//! of patterns (`users/{id}`), binds named parameters and invokes the
//! matching handler. Exact literal matches always win; otherwise the first
//! registered parameterized pattern whose segments line up is chosen.
//!
//! ```
//! use hash_router::dispatch::DirectRouter;
//! use hash_router::routing::RouteParams;
//!
//! let router = DirectRouter::new()
//!     .with_route("", |_: &RouteParams| "home".to_string())
//!     .with_route("users/{id}", |p: &RouteParams| format!("user {}", p.get("id").unwrap_or("")));
//!
//! assert_eq!(router.route("#/users/42").as_deref(), Some("user 42"));
//! assert_eq!(router.route("#/nowhere"), None);
//! ```

pub mod config;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use dispatch::{DirectRouter, HandlerRegistry, NamedRouter};
pub use driver::{HashDriver, HashLocation};
pub use error::{RouterError, RouterResult};
pub use lifecycle::Shutdown;
pub use routing::{MatchResult, RouteParams, RouteTable};
