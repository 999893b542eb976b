//! Login page with email/password and OAuth buttons.

use api::forms::LoginDraft;
use api::OAuthProvider;
use dioxus::prelude::*;
use ui::components::Alert;
use ui::{reload_session, use_auth, use_client, OAuthButton};

use super::use_redirect_if_signed_in;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let client = use_client();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_redirect_if_signed_in();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let draft = LoginDraft {
                email: email(),
                password: password(),
            };
            let body = match draft.validate() {
                Ok(body) => body,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match client.login(&body).await {
                Ok(_) => {
                    tracing::info!("signed in as {}", body.email);
                    reload_session(auth, client).await;
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("login failed: {}", e);
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
                h1 { "ログイン" }

                if auth().expired {
                    p { class: "notice", "セッションの有効期限が切れました。もう一度ログインしてください。" }
                }

                form {
                    class: "form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        Alert { message: err }
                    }

                    input {
                        r#type: "email",
                        placeholder: "メールアドレス",
                        autocomplete: "email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "パスワード",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "ログイン中..." } else { "ログイン" }
                    }
                }

                div {
                    class: "auth-divider muted small",
                    "または"
                }
                div {
                    class: "oauth-buttons",
                    OAuthButton { provider: OAuthProvider::Google, class: "btn btn-outline oauth-google" }
                    OAuthButton { provider: OAuthProvider::Line, class: "btn btn-outline oauth-line" }
                }

                p {
                    class: "small",
                    Link { to: Route::PasswordReset {}, "パスワードをお忘れの方" }
                }
                p {
                    class: "small muted",
                    "アカウントをお持ちでない方は "
                    Link { to: Route::Register { oauth_pending: String::new() }, "新規登録" }
                }
            }
        }
    }
}
