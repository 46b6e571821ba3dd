//! Named handler registry.
//!
//! Maps handler names, as written in route configuration, to callables.
//! The registry is built by the application and handed to the router, so
//! name resolution never depends on process-wide state.

use std::collections::HashMap;
use std::fmt;

use crate::routing::RouteParams;

/// A route handler. Receives the bound parameters of the match.
pub type Handler<R> = Box<dyn Fn(&RouteParams) -> R + Send + Sync>;

/// Name → handler lookup.
pub struct HandlerRegistry<R = ()> {
    handlers: HashMap<String, Handler<R>>,
}

impl<R> HandlerRegistry<R> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&RouteParams) -> R + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&RouteParams) -> R + Send + Sync + 'static,
    {
        self.register(name, handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Handler<R>> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<R> Default for HandlerRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for HandlerRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("handlers", &names)
            .finish()
    }
}
