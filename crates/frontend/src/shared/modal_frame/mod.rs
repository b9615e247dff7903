use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus the dialog surface.
///
/// Renders no header or footer; each dialog brings its own.
#[component]
pub fn ModalFrame(
    /// Overlay click or host request.
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Stacking order of the overlay (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for `div.modal`, e.g. `modal--wide`.
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Both press and release must happen on the overlay, otherwise selecting
    // text in an input and releasing outside would close the dialog.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // the overlay must outlive its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let modal_class = match modal_class.filter(|c| !c.is_empty()) {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=modal_class
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
