use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_class: Option<String>,
    can_close: Option<CloseGuard>,
}

/// Lets a dialog close itself.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open dialogs.
///
/// The category dialog opens the option dialog on success, the option dialog
/// may open the plan limit prompt; each lands on top of the previous one.
/// Escape closes only the topmost entry (see [`ModalHost`]).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // removal must not happen inside the DOM event that requested it
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        !self.stack.get().is_empty()
    }

    fn push_entry(&self, modal_class: Option<String>, can_close: Option<CloseGuard>, builder: ModalBuilder) -> ModalHandle {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                modal_class,
                can_close,
            });
        });

        ModalHandle { id, svc: *self }
    }

    /// Open a dialog; `builder` receives the handle that closes it
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(None, None, Arc::new(builder))
    }

    /// Open a dialog with an extra surface class (`modal--wide` for the admin forms)
    pub fn push_with_class<F>(&self, modal_class: &str, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(Some(modal_class.to_string()), None, Arc::new(builder))
    }

    /// Like [`push_with_class`](Self::push_with_class), but overlay click and
    /// Escape are ignored while `can_close` returns false (e.g. while saving).
    pub fn push_guarded<F, G>(&self, modal_class: &str, can_close: G, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
        G: Fn() -> bool + Send + Sync + 'static,
    {
        self.push_entry(Some(modal_class.to_string()), Some(Arc::new(can_close)), Arc::new(builder))
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    fn top_can_close(&self) -> bool {
        self.stack
            .get_untracked()
            .last()
            .and_then(|e| e.can_close.clone())
            .map(|f| f())
            .unwrap_or(true)
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }
}

/// Renders the dialog stack. Mounted once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() && svc.top_can_close() {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<(usize, ModalEntry)>>()}
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let z_index = 1000 + idx as i32;
                    let on_close = {
                        let id = entry.id;
                        let can_close = entry.can_close.clone();
                        Callback::new(move |_| {
                            if can_close.as_ref().map(|f| f()).unwrap_or(true) {
                                svc.close_deferred(id);
                            }
                        })
                    };

                    let view = (entry.builder)(ModalHandle { id: entry.id, svc });
                    let modal_class = entry.modal_class.clone().unwrap_or_default();

                    view! {
                        <ModalFrame z_index=z_index on_close=on_close modal_class=modal_class>
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
