//! Segment-wise matching of a path against one compiled pattern.
//!
//! # Responsibilities
//! - Normalize incoming hash URLs (`#/a/b` → `a/b`)
//! - Compare a path with a parameterized pattern segment by segment
//! - Bind parameter segments into a fresh `RouteParams`
//!
//! # Design Decisions
//! - Segment counts must be equal; no optional or trailing segments
//! - Literal segments are case-sensitive
//! - Every call builds its own params, so a rejected candidate can never
//!   leak bindings into the next one

use crate::routing::params::RouteParams;
use crate::routing::pattern::{RoutePattern, Segment};

/// Strip the leading hash marker from a URL.
///
/// When the URL starts with `#`, everything up to and including the first
/// `/` is dropped, so `#/users/42` becomes `users/42` and a bare `#` becomes
/// the root route. Anything else passes through untouched.
pub fn strip_hash(url: &str) -> &str {
    if !url.starts_with('#') {
        return url;
    }
    url.split_once('/').map_or("", |(_, rest)| rest)
}

/// Match a normalized path against a pattern's segments.
///
/// Returns the bound parameters on success. A pattern with only literal
/// segments matches when every segment is equal, with empty params.
pub fn match_segments(pattern: &RoutePattern, path: &str) -> Option<RouteParams> {
    let segments = pattern.segments();
    let path_segments: Vec<&str> = path.split('/').collect();

    if segments.len() != path_segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (segment, value) in segments.iter().zip(path_segments) {
        match segment {
            Segment::Param(name) => params.insert(name.as_str(), value),
            Segment::Literal(expected) if expected == value => {}
            Segment::Literal(_) => return None,
        }
    }
    Some(params)
}
