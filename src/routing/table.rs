//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled patterns with their handlers in registration order
//! - Resolve a URL to one handler plus bound parameters
//! - Return an explicit `NoMatch` rather than an error
//!
//! # Design Decisions
//! - O(1) literal lookup via HashMap, checked before anything else
//! - O(n) parameterized scan in registration order, first match wins
//! - No specificity ranking beyond registration order
//! - Patterns are compiled once when the table is built

use std::collections::HashMap;

use crate::routing::matcher::{match_segments, strip_hash};
use crate::routing::params::RouteParams;
use crate::routing::pattern::RoutePattern;

#[derive(Debug)]
struct RouteEntry<H> {
    pattern: RoutePattern,
    handler: H,
}

/// Ordered pattern → handler table.
#[derive(Debug)]
pub struct RouteTable<H> {
    entries: Vec<RouteEntry<H>>,
    /// Pattern text → index into `entries`.
    literal_index: HashMap<String, usize>,
}

/// A successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    pub pattern: &'a RoutePattern,
    pub handler: &'a H,
    pub params: RouteParams,
}

/// Outcome of resolving a URL.
#[derive(Debug)]
pub enum MatchResult<'a, H> {
    NoMatch,
    Matched(RouteMatch<'a, H>),
}

impl<'a, H> MatchResult<'a, H> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    pub fn into_match(self) -> Option<RouteMatch<'a, H>> {
        match self {
            MatchResult::Matched(route_match) => Some(route_match),
            MatchResult::NoMatch => None,
        }
    }
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            literal_index: HashMap::new(),
        }
    }
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(pattern, handler)` pairs in registration order.
    pub fn from_routes<P, I>(routes: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = (P, H)>,
    {
        let mut table = Self::new();
        for (pattern, handler) in routes {
            table.insert(pattern, handler);
        }
        table
    }

    /// Register a pattern.
    ///
    /// Re-registering an existing pattern replaces its handler but keeps its
    /// original position in the scan order. Returns the replaced handler.
    pub fn insert(&mut self, pattern: impl Into<String>, handler: H) -> Option<H> {
        let pattern = pattern.into();
        if let Some(&index) = self.literal_index.get(&pattern) {
            return Some(std::mem::replace(&mut self.entries[index].handler, handler));
        }

        self.literal_index.insert(pattern.clone(), self.entries.len());
        self.entries.push(RouteEntry {
            pattern: RoutePattern::compile(pattern),
            handler,
        });
        None
    }

    /// Replace every route at once.
    pub fn set_routes<P, I>(&mut self, routes: I)
    where
        P: Into<String>,
        I: IntoIterator<Item = (P, H)>,
    {
        *self = Self::from_routes(routes);
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = (&RoutePattern, &H)> {
        self.entries.iter().map(|e| (&e.pattern, &e.handler))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a raw URL, hash marker included or not.
    pub fn resolve(&self, url: &str) -> MatchResult<'_, H> {
        let path = strip_hash(url);

        if let Some(&index) = self.literal_index.get(path) {
            let entry = &self.entries[index];
            tracing::trace!(%url, pattern = %entry.pattern, "literal route matched");
            return MatchResult::Matched(RouteMatch {
                pattern: &entry.pattern,
                handler: &entry.handler,
                params: RouteParams::new(),
            });
        }

        let found = self
            .entries
            .iter()
            .filter(|entry| entry.pattern.is_parameterized())
            .find_map(|entry| match_segments(&entry.pattern, path).map(|params| (entry, params)));

        match found {
            Some((entry, params)) => {
                tracing::trace!(%url, pattern = %entry.pattern, ?params, "parameterized route matched");
                MatchResult::Matched(RouteMatch {
                    pattern: &entry.pattern,
                    handler: &entry.handler,
                    params,
                })
            }
            None => {
                tracing::trace!(%url, "no route matched");
                MatchResult::NoMatch
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(routes: &[(&str, &'static str)]) -> RouteTable<&'static str> {
        RouteTable::from_routes(routes.iter().copied())
    }

    fn resolve_handler(table: &RouteTable<&'static str>, url: &str) -> Option<&'static str> {
        table.resolve(url).into_match().map(|m| *m.handler)
    }

    #[test]
    fn test_root_route() {
        let t = table(&[("", "home"), ("users/{id}", "user")]);
        assert_eq!(resolve_handler(&t, "#/"), Some("home"));
        assert_eq!(resolve_handler(&t, ""), Some("home"));
        assert_eq!(resolve_handler(&t, "#"), Some("home"));
    }

    #[test]
    fn test_literal_beats_earlier_parameterized() {
        let t = table(&[("a/{x}", "param"), ("a/b", "literal")]);
        let m = t.resolve("a/b").into_match().unwrap();
        assert_eq!(*m.handler, "literal");
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_first_registered_parameterized_wins() {
        let t = table(&[("a/{x}", "first"), ("{y}/b", "second")]);
        let m = t.resolve("a/b").into_match().unwrap();
        assert_eq!(*m.handler, "first");
        assert_eq!(m.params.get("x"), Some("b"));
        assert!(!m.params.contains("y"));
    }

    #[test]
    fn test_no_stale_params_from_rejected_candidate() {
        let t = table(&[("users/{id}/edit", "edit"), ("users/{name}/{tab}", "tab")]);
        let m = t.resolve("#/users/7/posts").into_match().unwrap();
        assert_eq!(*m.handler, "tab");
        assert_eq!(m.params.get("name"), Some("7"));
        assert_eq!(m.params.get("tab"), Some("posts"));
        assert!(!m.params.contains("id"));
        assert_eq!(m.params.len(), 2);
    }

    #[test]
    fn test_no_match() {
        let t = table(&[("", "home"), ("users/{id}", "user")]);
        assert!(!t.resolve("unknown/path").is_match());
        assert!(!t.resolve("users").is_match());
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut t = table(&[("a/{x}", "first"), ("{y}/b", "second")]);
        assert_eq!(t.insert("a/{x}", "replaced"), Some("first"));
        assert_eq!(t.len(), 2);
        assert_eq!(resolve_handler(&t, "a/b"), Some("replaced"));

        let order: Vec<&str> = t.routes().map(|(p, _)| p.as_str()).collect();
        assert_eq!(order, vec!["a/{x}", "{y}/b"]);
    }

    #[test]
    fn test_set_routes_replaces_everything() {
        let mut t = table(&[("old", "old")]);
        t.set_routes([("new", "new")]);
        assert_eq!(t.len(), 1);
        assert!(!t.resolve("old").is_match());
        assert_eq!(resolve_handler(&t, "new"), Some("new"));
    }

    #[test]
    fn test_braced_literal_key_matches_exactly() {
        let t = table(&[("users/{id}", "user")]);
        // The literal pass compares raw keys, braces included.
        let m = t.resolve("users/{id}").into_match().unwrap();
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_unbalanced_pattern_only_matches_itself() {
        let t = table(&[("a/{b", "odd")]);
        assert_eq!(resolve_handler(&t, "a/{b"), Some("odd"));
        assert_eq!(resolve_handler(&t, "a/c"), None);
    }
}
