//! Hash-based routing components.
//!
//! [`HashRouter`] owns the dispatcher and keeps it in step with the URL
//! fragment, [`RouteOutlet`] renders whichever page is active, and [`Link`]
//! performs in-page navigation.

use crate::pages::Page;
use hashnav_core::{
    Dispatcher, History, HistoryError, LinkClick, Location, Navigator, RouteTable,
};
use leptos::ev;
use leptos::prelude::*;
use rootcause::prelude::Report;
use wasm_bindgen::JsValue;

/// History backed by `window.location.hash` and `window.history`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn fragment(&self) -> String {
        window().location().hash().unwrap_or_default()
    }

    fn push(&self, fragment: &str) -> Result<(), Report<HistoryError>> {
        window()
            .location()
            .set_hash(fragment)
            .map_err(|e| HistoryError::UpdateFailed {
                fragment: fragment.to_string(),
                details: describe(&e),
            })?;
        Ok(())
    }

    fn replace(&self, fragment: &str) -> Result<(), Report<HistoryError>> {
        let history = window()
            .history()
            .map_err(|e| HistoryError::Unavailable {
                details: describe(&e),
            })?;
        // replaceState does not fire `hashchange`; the caller syncs explicitly.
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(fragment))
            .map_err(|e| HistoryError::UpdateFailed {
                fragment: fragment.to_string(),
                details: describe(&e),
            })?;
        Ok(())
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Reactive handle to the dispatcher, provided as context by [`HashRouter`].
#[derive(Debug, Clone, Copy)]
pub struct RouterContext {
    dispatcher: RwSignal<Dispatcher<Page>>,
}

impl RouterContext {
    pub fn new(dispatcher: Dispatcher<Page>) -> Self {
        Self {
            dispatcher: RwSignal::new(dispatcher),
        }
    }

    /// The current location (tracked).
    pub fn location(&self) -> Location {
        self.dispatcher.with(|d| d.location().clone())
    }

    /// The page bound to the current location, if any (tracked).
    pub fn active_page(&self) -> Option<Page> {
        self.dispatcher.with(|d| d.active_view().copied())
    }

    /// Moves the dispatcher to `location`, notifying subscribers only if it
    /// actually changed.
    pub fn sync(&self, location: Location) {
        self.dispatcher.maybe_update(|d| d.set_location(location));
    }

    /// Writes `target` to `history` and re-evaluates the active page.
    ///
    /// On failure the URL is unchanged, so the dispatcher is left as is.
    pub fn navigate<H: History>(&self, history: H, target: &Location) {
        let navigator = Navigator::new(history);
        match navigator.navigate(target) {
            Ok(_) => self.sync(navigator.current()),
            Err(report) => {
                tracing::warn!(error = %report, %target, "Navigation failed");
            }
        }
    }
}

/// Returns the router context.
///
/// # Panics
///
/// Panics if called outside a [`HashRouter`].
pub fn use_router() -> RouterContext {
    expect_context::<RouterContext>()
}

/// Provides routing to its children, driven by the URL fragment.
#[component]
pub fn HashRouter(routes: RouteTable<Page>, children: Children) -> impl IntoView {
    let navigator = Navigator::new(BrowserHistory);
    let router = RouterContext::new(Dispatcher::new(routes, navigator.current()));
    provide_context(router);

    // Address-bar edits and back/forward arrive here.
    let handle = window_event_listener(ev::hashchange, move |_| {
        router.sync(Navigator::new(BrowserHistory).current());
    });
    on_cleanup(move || handle.remove());

    children()
}

/// Renders the active page, or nothing when no route matches.
#[component]
pub fn RouteOutlet() -> impl IntoView {
    let router = use_router();
    let page = Memo::new(move |_| router.active_page());

    move || page.get().map(Page::render)
}

/// An anchor that navigates within the page.
///
/// The `href` is a real fragment link, so modified clicks (new tab, etc.)
/// still work without the router.
#[component]
pub fn Link(to: &'static str, children: Children) -> impl IntoView {
    let router = use_router();
    let target = Location::new(to);
    let href = target.to_fragment();

    let on_click = move |ev: ev::MouseEvent| {
        let click = LinkClick {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
            default_prevented: ev.default_prevented(),
        };
        if click.should_intercept() {
            ev.prevent_default();
            router.navigate(BrowserHistory, &target);
        }
    };

    view! {
        <a href=href on:click=on_click>
            {children()}
        </a>
    }
}
