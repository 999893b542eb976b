//! Registration page. `?oauth_pending=<id>` prefills from an unfinished OAuth sign-in.

use api::forms::RegisterDraft;
use dioxus::prelude::*;
use ui::components::Alert;
use ui::{reload_session, use_auth, use_client};

use super::use_redirect_if_signed_in;
use crate::Route;

#[component]
pub fn Register(oauth_pending: String) -> Element {
    let auth = use_auth();
    let client = use_client();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut provider = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_redirect_if_signed_in();

    let pending_id = (!oauth_pending.is_empty()).then(|| oauth_pending.clone());

    let pending_client = client.clone();
    let pending_for_load = pending_id.clone();
    use_resource(move || {
        let client = pending_client.clone();
        let pending = pending_for_load.clone();
        async move {
            let Some(id) = pending else {
                return;
            };
            match client.oauth_pending(&id).await {
                Ok(info) => {
                    if let Some(n) = info.name {
                        name.set(n);
                    }
                    if let Some(e) = info.email {
                        email.set(e);
                    }
                    provider.set(Some(info.provider));
                }
                Err(e) => {
                    tracing::warn!("oauth pending lookup failed: {}", e);
                    error.set(Some("連携情報の有効期限が切れています。もう一度お試しください。".to_string()));
                }
            }
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let pending_id = pending_id.clone();
        spawn(async move {
            error.set(None);
            let draft = RegisterDraft {
                name: name(),
                email: email(),
                password: password(),
                confirm_password: confirm_password(),
                oauth_pending_id: pending_id,
            };
            let body = match draft.validate() {
                Ok(body) => body,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match client.register(&body).await {
                Ok(_) => {
                    tracing::info!("registered {}", body.email);
                    reload_session(auth, client).await;
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("registration failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "新規登録" }
                if let Some(via) = provider() {
                    p { class: "notice", "{via} アカウントと連携して登録します。" }
                }

                form {
                    class: "form",
                    onsubmit: handle_register,

                    if let Some(err) = error() {
                        Alert { message: err }
                    }

                    input {
                        r#type: "text",
                        placeholder: "名前",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "メールアドレス",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "パスワード（8文字以上）",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "パスワード（確認）",
                        value: confirm_password(),
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "登録中..." } else { "登録する" }
                    }
                }

                p {
                    class: "small muted",
                    "登録すると"
                    Link { to: Route::Privacy {}, "プライバシーポリシー" }
                    "に同意したものとみなします。"
                }
                p {
                    class: "small muted",
                    "すでにアカウントをお持ちの方は "
                    Link { to: Route::Login {}, "ログイン" }
                }
            }
        }
    }
}
