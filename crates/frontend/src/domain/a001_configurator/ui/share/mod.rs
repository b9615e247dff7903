//! Share links: a fresh admin edit link and the public embed link

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::api::generate_edit_token;

fn edit_link(base: &str, token: &str) -> String {
    format!("{}?admin=true&token={}", base, urlencoding::encode(token))
}

fn embed_link(base: &str, public_id: &str, public_key: &str) -> String {
    format!(
        "{}?publicId={}&publicKey={}",
        base,
        urlencoding::encode(public_id),
        urlencoding::encode(public_key)
    )
}

/// Origin and path of the current page, without query
fn page_base() -> String {
    web_sys::window()
        .and_then(|w| {
            let location = w.location();
            Some(format!("{}{}", location.origin().ok()?, location.pathname().ok()?))
        })
        .unwrap_or_default()
}

fn copy_with_toast(toasts: ToastService, text: String) {
    copy_to_clipboard(&text, move |copied| {
        if copied {
            toasts.success("Copied", "Link copied to clipboard.");
        } else {
            toasts.error("Copy failed", "Select the link and copy it manually.");
        }
    });
}

#[component]
pub fn ShareDialog(
    handle: ModalHandle,
    configurator_id: String,
    public_id: String,
    public_key: String,
) -> impl IntoView {
    let toasts = use_toasts();
    let base = page_base();

    let public_url = embed_link(&base, &public_id, &public_key);
    let edit_url = RwSignal::new(None::<String>);
    let generating = RwSignal::new(false);

    let generate = {
        let base = base.clone();
        move |_| {
            let base = base.clone();
            let configurator_id = configurator_id.clone();
            generating.set(true);
            spawn_local(async move {
                match generate_edit_token(&configurator_id).await {
                    Ok(issued) => {
                        log::info!("Edit token issued for {}", configurator_id);
                        edit_url.set(Some(edit_link(&base, &issued.token)));
                    }
                    Err(e) => toasts.api_error(&e),
                }
                generating.set(false);
            });
        }
    };

    let copy_public = {
        let public_url = public_url.clone();
        move |_| copy_with_toast(toasts, public_url.clone())
    };

    view! {
        <div class="dialog share-dialog">
            <div class="dialog__header">
                <h2 class="dialog__title">{icon("link")} "Share Configurator"</h2>
            </div>

            <div class="dialog__body">
                <h3 class="dialog__section-title">"Public link"</h3>
                <p class="form__hint">"Anyone with this link can view and configure the product."</p>
                <Flex gap=FlexGap::Small>
                    <input class="form__input share-dialog__url" readonly prop:value=public_url />
                    <Button appearance=ButtonAppearance::Secondary on_click=copy_public>
                        {icon("copy")}
                    </Button>
                </Flex>

                <h3 class="dialog__section-title">"Edit link"</h3>
                <p class="form__hint">
                    "Grants admin access to this configurator. Share it only with people who should edit it."
                </p>
                {move || match edit_url.get() {
                    Some(url) => {
                        let copied_url = url.clone();
                        view! {
                            <Flex gap=FlexGap::Small>
                                <input class="form__input share-dialog__url" readonly prop:value=url />
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| copy_with_toast(toasts, copied_url.clone())
                                >
                                    {icon("copy")}
                                </Button>
                            </Flex>
                        }
                        .into_any()
                    }
                    None => view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || generating.get())
                            on_click=generate.clone()
                        >
                            {move || if generating.get() { "Generating..." } else { "Generate edit link" }}
                        </Button>
                    }
                    .into_any(),
                }}
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
    fn test_links() {
        assert_eq!(
            edit_link("https://app.example.com/", "a b"),
            "https://app.example.com/?admin=true&token=a%20b"
        );
        assert_eq!(
            embed_link("https://app.example.com/", "p1", "k/1"),
            "https://app.example.com/?publicId=p1&publicKey=k%2F1"
        );
    }
}
