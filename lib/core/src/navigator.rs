//! Navigation on top of a [`History`] backend.

use crate::error::HistoryError;
use crate::history::History;
use crate::location::Location;
use rootcause::prelude::Report;
use std::fmt;
use tracing::debug;

/// How a navigation was recorded in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// A new entry was added.
    Push,
    /// The current entry was overwritten because the target was already current.
    Replace,
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => f.write_str("push"),
            Self::Replace => f.write_str("replace"),
        }
    }
}

/// Reads and writes the current location through a history backend.
#[derive(Debug, Clone)]
pub struct Navigator<H> {
    history: H,
}

impl<H: History> Navigator<H> {
    #[must_use]
    pub fn new(history: H) -> Self {
        Self { history }
    }

    /// The location currently held by history.
    #[must_use]
    pub fn current(&self) -> Location {
        Location::from_fragment(&self.history.fragment())
    }

    /// Navigates to `target`.
    ///
    /// Navigating to the location that is already current replaces the entry
    /// instead of pushing a duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the history backend rejects the update.
    pub fn navigate(&self, target: &Location) -> Result<NavigationMode, Report<HistoryError>> {
        let fragment = target.to_fragment();
        let mode = if self.current() == *target {
            self.history.replace(&fragment)?;
            NavigationMode::Replace
        } else {
            self.history.push(&fragment)?;
            NavigationMode::Push
        };
        debug!(%target, %mode, "navigated");
        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::Dispatcher;
    use crate::history::MemoryHistory;
    use crate::route::RouteTable;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum View {
        Home,
        About,
    }

    fn routes() -> RouteTable<View> {
        RouteTable::builder()
            .route("/", View::Home)
            .route("/about", View::About)
            .build()
            .expect("valid table")
    }

    /// Stands in for a link activation: navigate, then sync the dispatcher.
    fn activate(
        navigator: &Navigator<&MemoryHistory>,
        dispatcher: &mut Dispatcher<View>,
        path: &str,
    ) -> NavigationMode {
        let mode = navigator
            .navigate(&Location::new(path))
            .expect("memory history never fails");
        dispatcher.set_location(navigator.current());
        mode
    }

    #[test]
    fn current_reads_the_fragment() {
        let history = MemoryHistory::new("#/about");
        assert_eq!(Navigator::new(&history).current().path(), "/about");

        let empty = MemoryHistory::default();
        assert_eq!(Navigator::new(&empty).current(), Location::root());
    }

    #[test]
    fn navigate_pushes_new_locations() {
        let history = MemoryHistory::new("#/");
        let navigator = Navigator::new(&history);

        let mode = navigator
            .navigate(&Location::new("/about"))
            .expect("navigate");
        assert_eq!(mode, NavigationMode::Push);
        assert_eq!(history.fragment(), "#/about");
        assert_eq!(history.entry_count(), 2);
    }

    #[test]
    fn navigate_to_current_location_replaces() {
        let history = MemoryHistory::new("#/about");
        let navigator = Navigator::new(&history);

        let mode = navigator
            .navigate(&Location::new("/about"))
            .expect("navigate");
        assert_eq!(mode, NavigationMode::Replace);
        assert_eq!(history.entry_count(), 1);
    }

    #[test]
    fn empty_fragment_counts_as_root_when_navigating_home() {
        let history = MemoryHistory::default();
        let navigator = Navigator::new(&history);

        let mode = navigator.navigate(&Location::root()).expect("navigate");
        assert_eq!(mode, NavigationMode::Replace);
        assert_eq!(history.fragment(), "#/");
    }

    #[test]
    fn home_link_from_any_state_renders_home() {
        for start in ["", "#/", "#/about", "#/missing"] {
            let history = MemoryHistory::new(start);
            let navigator = Navigator::new(&history);
            let mut dispatcher = Dispatcher::new(routes(), navigator.current());

            activate(&navigator, &mut dispatcher, "/");
            assert_eq!(dispatcher.location().path(), "/");
            assert_eq!(dispatcher.active_view(), Some(&View::Home), "from {start:?}");
        }
    }

    #[test]
    fn about_link_from_any_state_renders_about() {
        for start in ["", "#/", "#/about", "#/missing"] {
            let history = MemoryHistory::new(start);
            let navigator = Navigator::new(&history);
            let mut dispatcher = Dispatcher::new(routes(), navigator.current());

            activate(&navigator, &mut dispatcher, "/about");
            assert_eq!(dispatcher.location().path(), "/about");
            assert_eq!(dispatcher.active_view(), Some(&View::About), "from {start:?}");
        }
    }

    #[test]
    fn home_about_home_equals_direct_home() {
        let history = MemoryHistory::new("#/");
        let navigator = Navigator::new(&history);
        let mut walked = Dispatcher::new(routes(), navigator.current());

        activate(&navigator, &mut walked, "/about");
        activate(&navigator, &mut walked, "/");

        let direct = Dispatcher::new(routes(), Location::root());
        assert_eq!(walked, direct);
        assert_eq!(history.fragment(), "#/");
    }

    #[test]
    fn back_navigation_resyncs_dispatcher() {
        let history = MemoryHistory::new("#/");
        let navigator = Navigator::new(&history);
        let mut dispatcher = Dispatcher::new(routes(), navigator.current());

        activate(&navigator, &mut dispatcher, "/about");
        assert!(history.back());
        assert!(dispatcher.set_location(navigator.current()));
        assert_eq!(dispatcher.active_view(), Some(&View::Home));
    }
}
