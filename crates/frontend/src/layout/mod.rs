use leptos::prelude::*;

use crate::shared::modal_stack::ModalHost;
use crate::shared::toast::ToastHost;

/// Page frame: routed content with the toast and dialog layers above it
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <main class="app-main">{children()}</main>
            <ToastHost />
            <ModalHost />
        </div>
    }
}
