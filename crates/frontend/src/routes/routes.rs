use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_configurator::ui::page::ConfiguratorPage;
use crate::shared::dom::navigate_to;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="status-screen">
            <p class="status-screen__title">"404"</p>
            <p class="status-screen__message">"Oops! Page not found"</p>
            <button class="status-screen__link" on:click=|_| navigate_to("/")>
                "Return to Home"
            </button>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=ConfiguratorPage />
            </Routes>
        </Router>
    }
}
