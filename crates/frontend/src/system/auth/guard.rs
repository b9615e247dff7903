use leptos::prelude::*;

use super::context::use_auth;

/// Renders its children only for a verified admin session
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show when=move || auth_state.get().is_admin()>
            {children()}
        </Show>
    }
}
