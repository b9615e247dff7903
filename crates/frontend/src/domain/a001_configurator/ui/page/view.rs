use contracts::domain::a002_category::aggregate::ConfigCategory;
use contracts::domain::a003_option::aggregate::ConfigOption;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{ConfiguratorPageViewModel, LoadStatus};
use crate::domain::a001_configurator::ui::list::ConfiguratorsDialog;
use crate::domain::a001_configurator::ui::panel::{AdminActions, ConfiguratorPanel};
use crate::domain::a001_configurator::ui::share::ShareDialog;
use crate::domain::a001_configurator::ui::summary::SummaryPanel;
use crate::domain::a001_configurator::ui::title::EditableTitle;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::domain::a003_option::ui::details::OptionDetails;
use crate::domain::a004_quote::ui::{open_quote_request, QuotesDialog};
use crate::domain::a005_theme::ui::ThemeDialog;
use crate::domain::a006_email_template::ui::EmailTemplatesDialog;
use crate::domain::a008_client::ui::AccountDialog;
use crate::shared::billing_limit::open_billing_limit;
use crate::shared::dom::navigate_to;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::{use_auth, AccessStatus};
use crate::system::auth::guard::RequireAdmin;
use crate::system::settings::use_settings;
use crate::system::settings::view::SettingsDialog;

fn use_modals() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService not found in context")
}

fn open_option_dialog(
    modals: ModalStackService,
    page: ConfiguratorPageViewModel,
    category: ConfigCategory,
    existing: Option<ConfigOption>,
) {
    modals.push_with_class("modal--wide", move |handle| {
        let on_limit = Callback::new(move |_: ()| open_billing_limit(modals));
        view! {
            <OptionDetails
                page=page
                category=category.clone()
                existing=existing.clone()
                handle=handle
                on_limit=on_limit
            />
        }
        .into_any()
    });
}

/// A new category continues straight into its first option
fn open_category_dialog(modals: ModalStackService, page: ConfiguratorPageViewModel, existing: Option<ConfigCategory>) {
    modals.push_with_class("modal--wide", move |handle| {
        let on_saved = Callback::new(move |(category, was_created): (ConfigCategory, bool)| {
            if was_created {
                open_option_dialog(modals, page, category, None);
            }
        });
        view! { <CategoryDetails page=page existing=existing.clone() handle=handle on_saved=on_saved /> }.into_any()
    });
}

#[component]
fn StatusScreen(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional)] error: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="status-screen">
            <div class="status-screen__card" class:status-screen__card--error=error>
                {icon("alert")}
                <p class="status-screen__title">{title}</p>
                <p class="status-screen__message">{message}</p>
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[component]
fn LoadingScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-screen">
            <Spinner />
            <p class="status-screen__message">{message}</p>
        </div>
    }
}

/// The configurator: access checks, then categories and summary
#[component]
pub fn ConfiguratorPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let page = ConfiguratorPageViewModel::new(auth, use_toasts(), use_settings());
    let modals = use_modals();

    Effect::new(move |_| {
        let state = auth.get();
        if state.status != AccessStatus::Ready || page.load_status.get_untracked() != LoadStatus::Idle {
            return;
        }
        if let Some(credentials) = state.credentials {
            page.load(credentials);
        }
    });

    Effect::new(move |_| {
        page.sync_admin_mode(auth.get().is_admin());
    });

    view! {
        {move || {
            let state = auth.get();
            match state.status {
                AccessStatus::Initializing => view! { <LoadingScreen message="Initializing..." /> }.into_any(),
                AccessStatus::Verifying => view! { <LoadingScreen message="Verifying access..." /> }.into_any(),
                AccessStatus::InvalidToken => view! {
                    <StatusScreen
                        title="Access denied"
                        message="Invalid or expired admin token. Please request a new edit link."
                        error=true
                    >
                        <Button appearance=ButtonAppearance::Secondary block=true on_click=|_| navigate_to("/")>
                            "Return to Home"
                        </Button>
                    </StatusScreen>
                }
                .into_any(),
                AccessStatus::Ready if state.credentials.is_none() => view! {
                    <StatusScreen
                        title="Missing Credentials"
                        message="No configurator specified. Please provide valid publicId and publicKey parameters."
                        error=true
                    >
                        <p class="status-screen__hint">"Example: ?publicId=your_id&publicKey=your_key"</p>
                    </StatusScreen>
                }
                .into_any(),
                AccessStatus::Ready => view! { <LoadedContent page=page modals=modals /> }.into_any(),
            }
        }}
    }
}

#[component]
fn LoadedContent(page: ConfiguratorPageViewModel, modals: ModalStackService) -> impl IntoView {
    let is_admin = page.is_admin();

    move || match page.load_status.get() {
        LoadStatus::Idle | LoadStatus::Loading => {
            view! { <LoadingScreen message="Loading configurator..." /> }.into_any()
        }
        LoadStatus::NotFound => view! {
            <StatusScreen
                title="Configurator Not Found"
                message="The configurator you're looking for doesn't exist or you don't have access to it."
                error=true
            />
        }
        .into_any(),
        LoadStatus::Loaded if !is_admin.get() && page.state.with(|s| s.categories.is_empty()) => view! {
            <StatusScreen
                title="Empty Configurator"
                message="This configurator has no categories or options configured yet."
            />
        }
        .into_any(),
        LoadStatus::Loaded => view! { <ConfiguratorLayout page=page modals=modals /> }.into_any(),
    }
}

#[component]
fn ConfiguratorLayout(page: ConfiguratorPageViewModel, modals: ModalStackService) -> impl IntoView {
    let actions = AdminActions {
        edit_category: Callback::new(move |existing: Option<ConfigCategory>| {
            open_category_dialog(modals, page, existing);
        }),
        add_option: Callback::new(move |category_id: String| {
            if let Some(category) = page.state.with_untracked(|s| s.category(&category_id).cloned()) {
                open_option_dialog(modals, page, category, None);
            }
        }),
        edit_option: Callback::new(move |(category_id, option): (String, ConfigOption)| {
            if let Some(category) = page.state.with_untracked(|s| s.category(&category_id).cloned()) {
                open_option_dialog(modals, page, category, Some(option));
            }
        }),
    };
    let on_request_quote = Callback::new(move |_: ()| open_quote_request(modals, page));

    view! {
        <div class="configurator">
            <header class="configurator__header">
                <EditableTitle page=page />
                <RequireAdmin>
                    <AdminToolbar page=page modals=modals />
                </RequireAdmin>
            </header>

            <div class="configurator__body">
                <div class="configurator__options">
                    <ConfiguratorPanel page=page actions=actions />
                </div>
                <aside class="configurator__summary">
                    <SummaryPanel page=page on_request_quote=on_request_quote />
                </aside>
            </div>
        </div>
    }
}

#[component]
fn AdminToolbar(page: ConfiguratorPageViewModel, modals: ModalStackService) -> impl IntoView {
    let (auth, _) = use_auth();
    let settings = use_settings();

    let open_share = move |_| {
        let Some(configurator_id) = page.configurator_id() else {
            return;
        };
        let Some(credentials) = auth.get_untracked().credentials else {
            return;
        };
        modals.push_with_class("modal--narrow", move |handle| {
            view! {
                <ShareDialog
                    handle=handle
                    configurator_id=configurator_id.clone()
                    public_id=credentials.public_id.clone()
                    public_key=credentials.public_key.clone()
                />
            }
            .into_any()
        });
    };

    let open_themes = move |_| {
        modals.push(|handle| view! { <ThemeDialog handle=handle /> }.into_any());
    };

    let open_emails = move |_| {
        let name = page
            .configurator
            .with_untracked(|c| c.as_ref().map(|c| c.display_name().to_string()))
            .unwrap_or_default();
        let total = settings.format_price(page.total().get_untracked());
        modals.push_with_class("modal--wide", move |handle| {
            view! { <EmailTemplatesDialog handle=handle configurator_name=name.clone() total=total.clone() /> }
                .into_any()
        });
    };

    let open_quotes = move |_| {
        let configurator_id = page.configurator_id();
        modals.push_with_class("modal--wide", move |handle| {
            view! { <QuotesDialog handle=handle configurator_id=configurator_id.clone() /> }.into_any()
        });
    };

    let open_configurators = move |_| {
        let current_id = page.configurator_id();
        modals.push(move |handle| {
            view! { <ConfiguratorsDialog handle=handle current_id=current_id.clone() /> }.into_any()
        });
    };

    let open_account = move |_| {
        let configurator_id = page.configurator_id();
        modals.push_with_class("modal--wide", move |handle| {
            view! { <AccountDialog handle=handle configurator_id=configurator_id.clone() /> }.into_any()
        });
    };

    let open_settings = move |_| {
        modals.push_with_class("modal--narrow", |handle| view! { <SettingsDialog handle=handle /> }.into_any());
    };

    view! {
        <div class="configurator__toolbar">
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| page.refresh_categories()>
                {icon("refresh")} "Refresh"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=open_share>
                {icon("link")} "Share"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=open_quotes>
                {icon("file-text")} "Quotes"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=open_emails>
                {icon("mail")} "Emails"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=open_configurators>
                {icon("layers")} "Configurators"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=open_account>
                {icon("user")} "Account"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=open_settings>
                {icon("settings")} "Settings"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=open_themes>
                {icon("palette")} "Theme"
            </Button>
        </div>
    }
}
