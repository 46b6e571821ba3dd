//! Routing to handlers by name.
//!
//! Routes map patterns to handler names; names are resolved through an
//! injected [`HandlerRegistry`] at dispatch time. A name that the registry
//! cannot resolve is reported the same way as an unmatched URL.

use crate::dispatch::registry::HandlerRegistry;
use crate::routing::{RouteParams, RouteTable};

/// Router whose routes reference handlers by name.
#[derive(Debug)]
pub struct NamedRouter<R = ()> {
    table: RouteTable<String>,
    registry: HandlerRegistry<R>,
}

impl<R> NamedRouter<R> {
    /// Build from `(pattern, handler name)` pairs in registration order.
    pub fn new<P, N, I>(routes: I, registry: HandlerRegistry<R>) -> Self
    where
        P: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = (P, N)>,
    {
        Self {
            table: RouteTable::from_routes(routes.into_iter().map(|(p, n)| (p, n.into()))),
            registry,
        }
    }

    pub fn routes(&self) -> &RouteTable<String> {
        &self.table
    }

    /// Replace every route. The registry is kept.
    pub fn set_routes<P, N, I>(&mut self, routes: I)
    where
        P: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = (P, N)>,
    {
        self.table
            .set_routes(routes.into_iter().map(|(p, n)| (p, n.into())));
    }

    pub fn registry(&self) -> &HandlerRegistry<R> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut HandlerRegistry<R> {
        &mut self.registry
    }

    /// Resolve `url` and invoke the named handler, returning its result.
    ///
    /// `None` when no route matches or the handler name is unknown.
    pub fn dispatch(&self, url: &str) -> Option<R> {
        let route_match = self.table.resolve(url).into_match()?;
        let name = route_match.handler.as_str();

        let Some(handler) = self.registry.get(name) else {
            tracing::debug!(%url, pattern = %route_match.pattern, handler = name, "handler not registered");
            return None;
        };

        tracing::debug!(%url, pattern = %route_match.pattern, handler = name, "dispatching route");
        Some(handler(&route_match.params))
    }

    /// Resolve `url` and invoke the named handler.
    ///
    /// Returns whether a handler ran.
    pub fn route(&self, url: &str) -> bool {
        self.dispatch(url).is_some()
    }

    /// Handler name and params for `url`, without invoking anything.
    pub fn find(&self, url: &str) -> Option<(&str, RouteParams)> {
        self.table
            .resolve(url)
            .into_match()
            .map(|m| (m.handler.as_str(), m.params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(String, RouteParams)>>>;

    fn recording_registry(calls: &Calls, names: &[&str]) -> HandlerRegistry {
        let mut registry = HandlerRegistry::new();
        for name in names {
            let calls = calls.clone();
            let label = name.to_string();
            registry.register(*name, move |params: &RouteParams| {
                calls.lock().unwrap().push((label.clone(), params.clone()));
            });
        }
        registry
    }

    #[test]
    fn test_routes_to_named_handler() {
        let calls = Calls::default();
        let router = NamedRouter::new(
            [("", "home"), ("users/{id}", "user")],
            recording_registry(&calls, &["home", "user"]),
        );

        assert!(router.route("#/users/42"));
        assert!(router.route("#/"));

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "user");
        assert_eq!(calls[0].1.get("id"), Some("42"));
        assert_eq!(calls[1].0, "home");
        assert!(calls[1].1.is_empty());
    }

    #[test]
    fn test_unregistered_name_is_no_match() {
        let calls = Calls::default();
        let router = NamedRouter::new(
            [("users/{id}", "user"), ("about", "about")],
            recording_registry(&calls, &["user"]),
        );

        assert!(!router.route("about"));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_url_returns_false() {
        let calls = Calls::default();
        let router = NamedRouter::new([("", "home")], recording_registry(&calls, &["home"]));
        assert!(!router.route("unknown/path"));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dispatch_returns_handler_value() {
        let registry = HandlerRegistry::new()
            .with("user", |p: &RouteParams| format!("user {}", p.get("id").unwrap_or("?")));
        let router = NamedRouter::new([("users/{id}", "user")], registry);
        assert_eq!(router.dispatch("#/users/9"), Some("user 9".to_string()));
        assert_eq!(router.dispatch("#/users"), None);
    }

    #[test]
    fn test_set_routes_keeps_registry() {
        let calls = Calls::default();
        let mut router = NamedRouter::new([("a", "home")], recording_registry(&calls, &["home"]));
        router.set_routes([("b", "home")]);

        assert!(!router.route("a"));
        assert!(router.route("b"));
        assert_eq!(router.find("b").map(|(name, _)| name), Some("home"));
    }
}
