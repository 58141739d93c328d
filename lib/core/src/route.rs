//! Static route table mapping exact paths to views.

use crate::error::RouteError;
use crate::location::Location;
use rootcause::prelude::Report;
use std::collections::HashSet;

/// A single route: an exact path bound to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    path: String,
    view: V,
}

impl<V> Route<V> {
    /// The exact path this route matches.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The view rendered when this route is active.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    fn matches(&self, location: &Location) -> bool {
        self.path == location.path()
    }
}

/// An ordered, immutable sequence of routes.
///
/// Lookup is exact string equality on the location path: no parameters,
/// no wildcards, no case folding and no trailing-slash tolerance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Starts building a route table.
    #[must_use]
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Returns the first route whose path equals the location path.
    #[must_use]
    pub fn resolve(&self, location: &Location) -> Option<&Route<V>> {
        self.routes.iter().find(|route| route.matches(location))
    }

    /// Iterates over the routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder for [`RouteTable`]; paths are validated in [`build`](Self::build).
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    routes: Vec<(String, V)>,
}

impl<V> RouteTableBuilder<V> {
    /// Appends a route.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, view: V) -> Self {
        self.routes.push((path.into(), view));
        self
    }

    /// Validates the paths and produces the table.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is not absolute, carries a query, fragment,
    /// parameter or wildcard, or appears more than once.
    pub fn build(self) -> Result<RouteTable<V>, Report<RouteError>> {
        let mut seen = HashSet::new();
        let mut routes = Vec::with_capacity(self.routes.len());

        for (path, view) in self.routes {
            validate_path(&path)?;
            if !seen.insert(path.clone()) {
                return Err(RouteError::DuplicatePath { path }.into());
            }
            routes.push(Route { path, view });
        }

        Ok(RouteTable { routes })
    }
}

fn validate_path(path: &str) -> Result<(), RouteError> {
    let reason = if !path.starts_with('/') {
        Some("must start with '/'")
    } else if path.contains('?') || path.contains('#') {
        Some("must not contain a query or fragment")
    } else if path.split('/').any(|segment| segment.starts_with(':')) {
        Some("parameter segments are not supported")
    } else if path.contains('*') {
        Some("wildcard segments are not supported")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RouteError::InvalidPath {
            path: path.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
