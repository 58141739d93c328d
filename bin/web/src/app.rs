//! Main Leptos application component.

use crate::config::AppConfig;
use crate::nav::NavBar;
use crate::pages::Page;
use crate::router::{HashRouter, RouteOutlet};
use hashnav_core::RouteTable;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

/// The main application component.
#[component]
pub fn App(config: AppConfig, routes: RouteTable<Page>) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=config.title/>
        <HashRouter routes=routes>
            <NavBar separator=config.nav.separator/>
            <main class="container">
                <RouteOutlet/>
            </main>
        </HashRouter>
    }
}
