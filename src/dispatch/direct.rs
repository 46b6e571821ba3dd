//! Routing to callables registered directly against patterns.

use std::fmt;

use crate::dispatch::registry::Handler;
use crate::routing::{RouteParams, RouteTable};

/// Router whose routes hold their handlers directly.
///
/// [`route`](Self::route) hands back whatever the matched handler returns.
pub struct DirectRouter<R> {
    table: RouteTable<Handler<R>>,
}

impl<R> DirectRouter<R> {
    pub fn new() -> Self {
        Self {
            table: RouteTable::new(),
        }
    }

    /// Build from `(pattern, handler)` pairs in registration order.
    pub fn from_routes<P, I>(routes: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = (P, Handler<R>)>,
    {
        Self {
            table: RouteTable::from_routes(routes),
        }
    }

    /// Register a handler for `pattern`.
    pub fn with_route<F>(mut self, pattern: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&RouteParams) -> R + Send + Sync + 'static,
    {
        self.table.insert(pattern, Box::new(handler));
        self
    }

    pub fn routes(&self) -> &RouteTable<Handler<R>> {
        &self.table
    }

    /// Replace every route.
    pub fn set_routes<P, I>(&mut self, routes: I)
    where
        P: Into<String>,
        I: IntoIterator<Item = (P, Handler<R>)>,
    {
        self.table.set_routes(routes);
    }

    /// Resolve `url` and invoke the matching handler.
    ///
    /// `None` when no route matches.
    pub fn route(&self, url: &str) -> Option<R> {
        let route_match = self.table.resolve(url).into_match()?;
        tracing::debug!(%url, pattern = %route_match.pattern, "dispatching route");
        Some((route_match.handler)(&route_match.params))
    }
}

impl<R> Default for DirectRouter<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for DirectRouter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns: Vec<&str> = self.table.routes().map(|(p, _)| p.as_str()).collect();
        f.debug_struct("DirectRouter")
            .field("routes", &patterns)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> DirectRouter<String> {
        DirectRouter::new()
            .with_route("", |_: &RouteParams| "home".to_string())
            .with_route("users/{id}", |p: &RouteParams| {
                format!("user:{}", p.get("id").unwrap_or_default())
            })
            .with_route("users/{id}/{tab}", |p: &RouteParams| {
                format!("{}:{}", p.get("id").unwrap_or_default(), p.get("tab").unwrap_or_default())
            })
    }

    #[test]
    fn test_returns_handler_value() {
        let router = router();
        assert_eq!(router.route("#/users/42"), Some("user:42".to_string()));
        assert_eq!(router.route("users/7/posts"), Some("7:posts".to_string()));
        assert_eq!(router.route("#/"), Some("home".to_string()));
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(router().route("unknown/path"), None);
    }

    #[test]
    fn test_hash_and_bare_paths_agree() {
        let router = router();
        assert_eq!(router.route("#/users/1/a"), router.route("users/1/a"));
    }

    #[test]
    fn test_set_routes() {
        let mut router = router();
        let handler: Handler<String> = Box::new(|_: &RouteParams| "about".to_string());
        router.set_routes([("about", handler)]);
        assert_eq!(router.routes().len(), 1);
        assert_eq!(router.route("about"), Some("about".to_string()));
        assert_eq!(router.route("#/users/1"), None);
    }

    #[test]
    fn test_debug_lists_patterns() {
        let router: DirectRouter<()> = DirectRouter::new().with_route("a/{b}", |_: &RouteParams| ());
        assert_eq!(format!("{:?}", router), r#"DirectRouter { routes: ["a/{b}"] }"#);
    }
}
