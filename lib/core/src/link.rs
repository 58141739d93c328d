//! Navigation links and the click policy for activating them.

use crate::location::Location;

/// Primary (usually left) mouse button, as reported by `MouseEvent.button`.
const PRIMARY_BUTTON: i16 = 0;

/// A navigation-bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: &'static str,
}

impl NavLink {
    #[must_use]
    pub const fn new(label: &'static str, to: &'static str) -> Self {
        Self { label, to }
    }

    /// The location this link navigates to.
    #[must_use]
    pub fn target(&self) -> Location {
        Location::new(self.to)
    }

    /// The `href` value, e.g. `#/about`.
    #[must_use]
    pub fn href(&self) -> String {
        self.target().to_fragment()
    }
}

/// The parts of a click event that decide whether the router handles it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkClick {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    pub default_prevented: bool,
}

impl LinkClick {
    /// Whether the router should take over this click.
    ///
    /// Modified clicks (new tab, new window, download) and clicks another
    /// handler already cancelled are left to the browser.
    #[must_use]
    pub fn should_intercept(&self) -> bool {
        self.button == PRIMARY_BUTTON
            && !self.default_prevented
            && !(self.ctrl || self.meta || self.shift || self.alt)
    }
}
