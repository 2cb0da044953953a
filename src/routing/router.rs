//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Register route definitions in declaration order
//! - Validate the table at build time (pattern syntax, unique names)
//! - Look up the matching route for a path
//! - Return the matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Routes ranked by specificity at build time, declaration order breaks
//!   ties; lookup is an O(n) scan, first match wins
//! - Explicit `None` on no-match rather than a silent default; a table
//!   whose last route is a wildcard always resolves

use thiserror::Error;

use crate::routing::pattern::{Params, PathPattern, PatternError};

/// Error raised when a route table fails to build.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("route table has no routes")]
    Empty,
}

/// A single route definition: pattern, unique name, view.
#[derive(Debug, Clone)]
struct Route<V> {
    name: String,
    pattern: PathPattern,
    view: V,
}

/// The result of resolving a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a, V> {
    /// Name of the matched route.
    pub name: &'a str,
    /// The view the route maps to.
    pub view: &'a V,
    /// Path parameters bound by the match.
    pub params: Params,
}

/// Ordered registration of route definitions.
pub struct RouterBuilder<V> {
    routes: Vec<(String, String, V)>,
}

impl<V> RouterBuilder<V> {
    /// Register a route. Declaration order is preserved and breaks
    /// specificity ties.
    pub fn route(mut self, pattern: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        self.routes.push((pattern.into(), name.into(), view));
        self
    }

    /// Validate and freeze the table.
    pub fn build(self) -> Result<Router<V>, RouterError> {
        if self.routes.is_empty() {
            return Err(RouterError::Empty);
        }

        let mut routes = Vec::with_capacity(self.routes.len());
        for (pattern, name, view) in self.routes {
            if routes.iter().any(|r: &Route<V>| r.name == name) {
                return Err(RouterError::DuplicateName(name));
            }
            let pattern = PathPattern::parse(&pattern)
                .map_err(|source| RouterError::Pattern { pattern, source })?;
            routes.push(Route { name, pattern, view });
        }

        // Most-specific first; stable sort keeps declaration order for ties.
        routes.sort_by(|a, b| b.pattern.cmp_specificity(&a.pattern));

        Ok(Router { routes })
    }
}

/// An immutable route table mapping paths to views.
///
/// Built once at startup and shared read-only thereafter.
pub struct Router<V> {
    routes: Vec<Route<V>>,
}

impl<V> Router<V> {
    pub fn builder() -> RouterBuilder<V> {
        RouterBuilder { routes: Vec::new() }
    }

    /// Resolve a path to a route.
    ///
    /// Query strings and fragments are stripped before matching. Returns
    /// `None` only when no pattern matches, which cannot happen for a
    /// table that registers a wildcard fallback.
    pub fn resolve(&self, path: &str) -> Option<Resolution<'_, V>> {
        let path = match path.find(['?', '#']) {
            Some(idx) => &path[..idx],
            None => path,
        };
        self.routes.iter().find_map(|route| {
            route.pattern.matches(path).map(|params| Resolution {
                name: &route.name,
                view: &route.view,
                params,
            })
        })
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route names in match-priority order.
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.name.as_str())
    }
}
