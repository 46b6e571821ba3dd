//! Route pattern compilation.
//!
//! # Responsibilities
//! - Split a pattern on `/` into ordered segments
//! - Classify each segment as a literal or a named parameter
//!
//! # Design Decisions
//! - Any string is a valid pattern; compilation cannot fail
//! - A segment is a parameter only when it is wrapped in `{` and `}`
//! - Unbalanced braces (`{id`, `a{b}`) stay literal text

use std::fmt;

/// One `/`-delimited unit of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matched by string equality.
    Literal(String),
    /// Binds whatever occupies this position in the path.
    Param(String),
}

impl Segment {
    /// Classify a single pattern segment.
    pub fn parse(segment: &str) -> Self {
        match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Literal(segment.to_string()),
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

/// A compiled route pattern such as `users/{id}/edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compile a pattern string.
    ///
    /// The empty pattern compiles to a single empty literal, which matches
    /// the bare root route.
    pub fn compile(pattern: impl Into<String>) -> Self {
        let source = pattern.into();
        let segments = source.split('/').map(Segment::parse).collect();
        Self { source, segments }
    }

    /// The pattern string exactly as registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the raw pattern takes part in the parameterized pass.
    ///
    /// This looks at the raw text, not the compiled segments: `a/{b` is
    /// still scanned even though every segment compiled to a literal.
    pub fn is_parameterized(&self) -> bool {
        self.source.contains('{')
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for RoutePattern {
    fn from(pattern: &str) -> Self {
        Self::compile(pattern)
    }
}
