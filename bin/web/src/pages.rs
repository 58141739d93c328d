//! Page components for the application.
//!
//! Each page is a static Leptos component bound to one route. [`Page`] is the
//! view key stored in the route table.

pub mod about;
pub mod home;

pub use about::AboutPage;
pub use home::HomePage;

use hashnav_core::{RouteError, RouteTable};
use leptos::prelude::*;
use rootcause::prelude::Report;

/// The views the router can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
}

impl Page {
    /// Renders the page component.
    pub fn render(self) -> AnyView {
        match self {
            Self::Home => view! { <HomePage/> }.into_any(),
            Self::About => view! { <AboutPage/> }.into_any(),
        }
    }
}

/// The application's route table: `/` is Home, `/about` is About.
///
/// # Errors
///
/// Returns an error if a route path is invalid.
pub fn routes() -> Result<RouteTable<Page>, Report<RouteError>> {
    RouteTable::builder()
        .route("/", Page::Home)
        .route("/about", Page::About)
        .build()
}
