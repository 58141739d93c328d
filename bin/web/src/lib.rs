//! hashnav web shell.
//!
//! This crate provides the Leptos client-side rendered interface: a
//! navigation bar and a router that swaps between the Home and About pages
//! based on the URL fragment, without reloading the page.

#![allow(non_snake_case)]

pub mod app;
pub mod config;
pub mod logging;
pub mod nav;
pub mod pages;
pub mod router;

/// Boots the application into `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    use crate::app::App;
    use crate::config::AppConfig;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Failed to load configuration, using defaults");
    }

    let routes = match pages::routes() {
        Ok(routes) => routes,
        Err(report) => {
            tracing::error!(error = %report, "Invalid route table");
            return;
        }
    };

    tracing::info!(routes = routes.len(), "Mounting application");
    leptos::mount::mount_to_body(move || view! { <App config=config routes=routes/> });
}
