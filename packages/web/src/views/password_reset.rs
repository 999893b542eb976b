//! Request a reset mail, then set a new password from the mailed link.

use api::forms::PasswordResetDraft;
use dioxus::prelude::*;
use ui::components::Alert;
use ui::use_client;

use crate::Route;

#[component]
pub fn PasswordReset() -> Element {
    let client = use_client();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let address = email().trim().to_string();
            if !address.contains('@') {
                error.set(Some("有効なメールアドレスを入力してください".to_string()));
                return;
            }
            loading.set(true);
            match client.request_password_reset(&address).await {
                Ok(_) => sent.set(true),
                Err(e) => {
                    tracing::warn!("password reset request failed: {}", e);
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
                h1 { "パスワードの再設定" }
                if sent() {
                    p { "再設定用のリンクを送信しました。メールをご確認ください。" }
                } else {
                    p { class: "muted small", "登録済みのメールアドレスを入力してください。" }
                    form {
                        class: "form",
                        onsubmit: handle_submit,
                        if let Some(err) = error() {
                            Alert { message: err }
                        }
                        input {
                            r#type: "email",
                            placeholder: "メールアドレス",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                        button {
                            class: "btn",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "送信中..." } else { "リンクを送信" }
                        }
                    }
                }
                p {
                    class: "small",
                    Link { to: Route::Login {}, "ログインに戻る" }
                }
            }
        }
    }
}

#[component]
pub fn PasswordResetConfirm(token: String) -> Element {
    let client = use_client();
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut done = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let token = token.clone();
        spawn(async move {
            error.set(None);
            let draft = PasswordResetDraft {
                token,
                password: password(),
                confirm_password: confirm_password(),
            };
            let body = match draft.validate() {
                Ok(body) => body,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            loading.set(true);
            match client.confirm_password_reset(&body).await {
                Ok(_) => done.set(true),
                Err(e) => {
                    tracing::warn!("password reset failed: {}", e);
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
                h1 { "新しいパスワード" }
                if done() {
                    p { "パスワードを更新しました。" }
                    Link { class: "btn", to: Route::Login {}, "ログインへ" }
                } else {
                    form {
                        class: "form",
                        onsubmit: handle_submit,
                        if let Some(err) = error() {
                            Alert { message: err }
                        }
                        input {
                            r#type: "password",
                            placeholder: "新しいパスワード（8文字以上）",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        input {
                            r#type: "password",
                            placeholder: "新しいパスワード（確認）",
                            value: confirm_password(),
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                        button {
                            class: "btn",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "更新中..." } else { "パスワードを更新" }
                        }
                    }
                }
            }
        }
    }
}
