use contracts::domain::a008_client::aggregate::{Client, SubscriptionStatus, UpdateClientInput, UpdateDomainsInput};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::UsageAnalyticsPanel;
use crate::domain::a008_client::api;
use crate::shared::components::ui::{FormInput, FormTextarea};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_auth;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AccountTab {
    Profile,
    Domains,
    Usage,
}

/// One domain per line or comma separated; scheme and trailing slash dropped
fn parse_domains(raw: &str) -> Vec<String> {
    let mut domains: Vec<String> = Vec::new();
    for part in raw.split(|c| c == '\n' || c == ',') {
        let domain = part
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_ascii_lowercase();
        if !domain.is_empty() && !domains.contains(&domain) {
            domains.push(domain);
        }
    }
    domains
}

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn subscription_badge(status: SubscriptionStatus) -> (BadgeColor, &'static str) {
    match status {
        SubscriptionStatus::Active => (BadgeColor::Success, "Active"),
        SubscriptionStatus::Trial => (BadgeColor::Brand, "Trial"),
        SubscriptionStatus::Inactive => (BadgeColor::Warning, "Inactive"),
    }
}

/// Account of the admin: profile, embed domains and usage
#[component]
pub fn AccountDialog(handle: ModalHandle, configurator_id: Option<String>) -> impl IntoView {
    let (auth, _) = use_auth();
    let toasts = use_toasts();
    let token = move || auth.get_untracked().token().unwrap_or_default();

    let tab = RwSignal::new(AccountTab::Profile);
    let client = RwSignal::new(None::<Client>);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let domains_text = RwSignal::new(String::new());

    spawn_local(async move {
        match api::fetch_profile(&token()).await {
            Ok(profile) => {
                name.set(profile.name.clone().unwrap_or_default());
                company.set(profile.company_name.clone().unwrap_or_default());
                phone.set(profile.phone.clone().unwrap_or_default());
                domains_text.set(profile.allowed_domains.join("\n"));
                client.set(Some(profile));
            }
            Err(e) => toasts.api_error(&e),
        }
        match api::fetch_domains(&token()).await {
            Ok(allowed) => domains_text.set(allowed.domains.join("\n")),
            Err(e) => log::warn!("Allowed domains unavailable: {}", e),
        }
        loading.set(false);
    });

    let save_profile = move |_| {
        let input = UpdateClientInput {
            token: token(),
            name: optional(name.get_untracked()),
            company_name: optional(company.get_untracked()),
            phone: optional(phone.get_untracked()),
            avatar_url: None,
        };
        saving.set(true);
        spawn_local(async move {
            match api::update_profile(&input).await {
                Ok(updated) => {
                    client.set(Some(updated));
                    toasts.success("Profile updated", "Your account details have been saved.");
                }
                Err(e) => toasts.api_error(&e),
            }
            saving.set(false);
        });
    };

    let save_domains = move |_| {
        let input = UpdateDomainsInput {
            token: token(),
            domains: parse_domains(&domains_text.get_untracked()),
        };
        saving.set(true);
        spawn_local(async move {
            match api::update_domains(&input).await {
                Ok(allowed) => {
                    domains_text.set(allowed.domains.join("\n"));
                    toasts.success("Domains updated", "Allowed embed domains have been saved.");
                }
                Err(e) => toasts.api_error(&e),
            }
            saving.set(false);
        });
    };

    let tab_button = move |value: AccountTab, label: &'static str| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || tab.get() == value
                on:click=move |_| tab.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="dialog account-dialog">
            <div class="dialog__header">
                <h2 class="dialog__title">{icon("user")} "Account"</h2>
                {move || client.get().map(|c| {
                    let (color, label) = subscription_badge(c.subscription_status);
                    view! {
                        <p class="dialog__description">
                            {c.email.clone()} " "
                            <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
                        </p>
                    }
                })}
            </div>

            <div class="tabs">
                {tab_button(AccountTab::Profile, "Profile")}
                {tab_button(AccountTab::Domains, "Domains")}
                {tab_button(AccountTab::Usage, "Usage")}
            </div>

            <div class="dialog__body">
                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    {
                    let configurator_id = configurator_id.clone();
                    move || match tab.get() {
                        AccountTab::Profile => view! {
                            <Flex vertical=true gap=FlexGap::Small>
                                <FormInput label="Name" value=name />
                                <FormInput label="Company" value=company />
                                <FormInput label="Phone" value=phone input_type="tel" />
                                {move || client.get().map(|c| view! {
                                    <div class="account-dialog__usage">
                                        {format!(
                                            "{} of {} requests used this month ({} left)",
                                            c.monthly_requests,
                                            c.request_limit,
                                            c.remaining_requests(),
                                        )}
                                    </div>
                                })}
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || saving.get())
                                    on_click=save_profile
                                >
                                    "Save profile"
                                </Button>
                            </Flex>
                        }.into_any(),
                        AccountTab::Domains => view! {
                            <Flex vertical=true gap=FlexGap::Small>
                                <FormTextarea
                                    label="Allowed domains"
                                    value=domains_text
                                    rows=6
                                    placeholder="shop.example.com"
                                />
                                <p class="form__hint">
                                    "The configurator can only be embedded on these domains. One per line."
                                </p>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || saving.get())
                                    on_click=save_domains
                                >
                                    "Save domains"
                                </Button>
                            </Flex>
                        }.into_any(),
                        AccountTab::Usage => view! {
                            <UsageAnalyticsPanel configurator_id=configurator_id.clone() />
                        }.into_any(),
                    }
                    }
                </Show>
            </div>

            <div class="dialog__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Close"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domains() {
        assert_eq!(
            parse_domains("https://Shop.example.com/\nexample.org, example.org\n\n"),
            vec!["shop.example.com".to_string(), "example.org".to_string()]
        );
        assert!(parse_domains("  ").is_empty());
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional(" Ada ".to_string()), Some("Ada".to_string()));
    }
}
