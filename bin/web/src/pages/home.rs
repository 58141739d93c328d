//! Home page component.

use leptos::prelude::*;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Home"</h1>
            <p>"Welcome to hashnav."</p>
        </div>
    }
}
