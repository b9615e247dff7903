//! Transient notifications in the bottom right corner.

use contracts::shared::api::ApiClientError;
use contracts::shared::configuration::ConfigNotice;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_LIFETIME_MS: u32 = 5_000;
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn push(&self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let toast = Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        };
        self.toasts.update(|list| {
            list.push(toast);
            if list.len() > MAX_VISIBLE {
                list.remove(0);
            }
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, description, ToastVariant::Default);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, description, ToastVariant::Destructive);
    }

    pub fn notice(&self, notice: &ConfigNotice) {
        self.push(notice.title.clone(), notice.description.clone(), ToastVariant::Default);
    }

    pub fn api_error(&self, error: &ApiClientError) {
        self.error(error.title(), error.message.clone());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in component tree")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-viewport" aria-live="polite">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__description">{toast.description}</div>
                            </div>
                            <button class="toast__close" aria-label="Close" on:click=move |_| svc.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
