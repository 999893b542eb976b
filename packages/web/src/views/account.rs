use api::forms::avatar_mime;
use api::{NotificationKind, NotificationPreferencesUpdate, ProfileUpdate};
use dioxus::prelude::*;
use ui::components::{Alert, LoadingSpinner};
use ui::{
    notify_error, notify_success, reload_session, use_auth, use_client, use_toasts, LogoutButton,
};

use crate::Route;

#[component]
pub fn Account() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "page narrow",
            div {
                class: "page-header",
                h1 { "アカウント" }
            }
            ProfileSection {}
            AvatarSection {}
            NotificationSection {}
            div {
                class: "card",
                h3 { "ログアウト" }
                p { class: "muted", "この端末からログアウトします。" }
                LogoutButton {
                    class: "btn btn-danger",
                    on_logout: move |_| {
                        nav.replace(Route::Login {});
                    },
                }
            }
        }
    }
}

#[component]
fn ProfileSection() -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut toasts = use_toasts();
    let mut name = use_signal(|| {
        auth.peek()
            .user
            .as_ref()
            .and_then(|u| u.name.clone())
            .unwrap_or_default()
    });
    let mut busy = use_signal(|| false);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let client = client.clone();
        let body = ProfileUpdate {
            name: Some(name().trim().to_string()),
        };
        spawn(async move {
            busy.set(true);
            match client.update_profile(&body).await {
                Ok(_) => {
                    notify_success(&mut toasts, "プロフィールを更新しました");
                    reload_session(auth, client).await;
                }
                Err(e) => {
                    tracing::error!("profile update failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let state = auth();
    let Some(user) = state.user else {
        return rsx! {};
    };

    rsx! {
        form {
            class: "card form",
            onsubmit,
            h3 { "プロフィール" }
            label {
                class: "field",
                span { class: "field-label", "メールアドレス" }
                input { r#type: "email", value: "{user.email}", disabled: true }
            }
            label {
                class: "field",
                span { class: "field-label", "表示名" }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }
            div {
                class: "form-actions",
                button { r#type: "submit", class: "btn", disabled: busy(), "保存" }
            }
        }
    }
}

#[component]
fn AvatarSection() -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut toasts = use_toasts();
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let upload_client = client.clone();
    let on_pick = move |evt: FormEvent| {
        let client = upload_client.clone();
        async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let name = file.name();
            let content_type = file.content_type();
            let mime = match avatar_mime(&name, content_type.as_deref(), file.size()) {
                Ok(mime) => mime,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    tracing::error!("reading {} failed: {}", name, e);
                    error.set(Some("画像を読み込めませんでした".to_string()));
                    busy.set(false);
                    return;
                }
            };
            match client.upload_avatar(&name, mime, bytes).await {
                Ok(_) => {
                    notify_success(&mut toasts, "アバターを更新しました");
                    reload_session(auth, client).await;
                }
                Err(e) => {
                    tracing::error!("avatar upload failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        }
    };

    let on_delete = move |_| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            match client.delete_avatar().await {
                Ok(_) => {
                    notify_success(&mut toasts, "アバターを削除しました");
                    reload_session(auth, client).await;
                }
                Err(e) => {
                    tracing::error!("avatar delete failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let state = auth();
    let Some(user) = state.user else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "card",
            h3 { "アバター" }
            if let Some(message) = error() {
                Alert { message }
            }
            div {
                class: "member",
                if let Some(picture) = user.picture_url.as_ref() {
                    img { class: "avatar avatar-large", src: "{picture}", alt: "" }
                } else {
                    span { class: "avatar avatar-large avatar-placeholder", "{user.initial()}" }
                }
                div {
                    class: "form-actions",
                    label {
                        class: "btn btn-secondary",
                        if busy() { "アップロード中..." } else { "画像を選択" }
                        input {
                            r#type: "file",
                            class: "visually-hidden",
                            accept: "image/jpeg,image/png,image/gif,image/webp",
                            disabled: busy(),
                            onchange: on_pick,
                        }
                    }
                    if user.picture_url.is_some() {
                        button {
                            class: "btn btn-ghost",
                            disabled: busy(),
                            onclick: on_delete,
                            "削除"
                        }
                    }
                }
            }
            p { class: "muted small", "JPEG、PNG、GIF、WebP形式、5MBまで" }
        }
    }
}

#[component]
fn NotificationSection() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();

    let load_client = client.clone();
    let mut prefs = use_resource(move || {
        let client = load_client.clone();
        async move { client.notification_preferences().await }
    });

    let on_toggle = use_callback(move |(kind, value): (NotificationKind, bool)| {
        let client = client.clone();
        spawn(async move {
            let body = NotificationPreferencesUpdate::set(kind, value);
            match client.update_notification_preferences(&body).await {
                Ok(_) => {
                    tracing::info!("{} notifications set to {}", kind.label(), value);
                    prefs.restart();
                }
                Err(e) => {
                    tracing::error!("notification update failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
        });
    });

    rsx! {
        div {
            class: "card",
            h3 { "通知設定" }
            match &*prefs.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
                Some(Ok(current)) => rsx! {
                    for kind in NotificationKind::ALL {
                        label {
                            key: "{kind.label()}",
                            class: "field-inline",
                            input {
                                r#type: "checkbox",
                                checked: current.enabled(kind),
                                onchange: move |e| on_toggle.call((kind, e.checked())),
                            }
                            span { "{kind.label()}" }
                        }
                    }
                },
            }
        }
    }
}
