//! Navigation bar.

use crate::router::Link;
use hashnav_core::NavLink;
use leptos::prelude::*;

/// The links shown in the navigation bar, in display order.
pub const NAV_LINKS: [NavLink; 2] = [NavLink::new("Home", "/"), NavLink::new("About", "/about")];

/// Navigation bar with one link per known route.
#[component]
pub fn NavBar(#[prop(into)] separator: String) -> impl IntoView {
    let links = NAV_LINKS
        .into_iter()
        .enumerate()
        .map(|(index, link)| {
            let separator = (index > 0).then(|| separator.clone());
            let label = link.label;
            view! {
                {separator}
                <Link to=link.to>{label}</Link>
            }
        })
        .collect_view();

    view! { <nav>{links}</nav> }
}
