//! Route dispatcher: owns the current location and selects the active view.

use crate::location::Location;
use crate::route::{Route, RouteTable};
use tracing::debug;

/// Selects which view is active for the current location.
///
/// At most one route is active at a time. When no route matches, nothing is
/// rendered; that is a normal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatcher<V> {
    routes: RouteTable<V>,
    location: Location,
}

impl<V> Dispatcher<V> {
    /// Creates a dispatcher positioned at `location`.
    #[must_use]
    pub fn new(routes: RouteTable<V>, location: Location) -> Self {
        Self { routes, location }
    }

    /// The current location.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Moves to `location`, returning `true` if the location changed.
    ///
    /// Setting the same location again is a no-op, so callers can use the
    /// return value to skip re-rendering.
    pub fn set_location(&mut self, location: Location) -> bool {
        if self.location == location {
            return false;
        }
        debug!(from = %self.location, to = %location, "location changed");
        self.location = location;
        true
    }

    /// The route matching the current location, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Route<V>> {
        self.routes.resolve(&self.location)
    }

    /// The view bound to the current location, if any.
    #[must_use]
    pub fn active_view(&self) -> Option<&V> {
        self.active().map(Route::view)
    }

    /// Renders the active view with `render`, or returns `None` when no
    /// route matches.
    pub fn render<R>(&self, render: impl FnOnce(&V) -> R) -> Option<R> {
        self.active_view().map(render)
    }
}
