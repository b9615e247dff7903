use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthProvider;
use crate::system::settings::SettingsContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ToastService::new());
    provide_context(ModalStackService::new());
    provide_context(SettingsContext::new());

    view! {
        <AuthProvider>
            <Shell>
                <AppRoutes />
            </Shell>
        </AuthProvider>
    }
}
