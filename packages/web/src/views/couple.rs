use api::forms::InviteCodeDraft;
use api::{InviteCode, User, DEFAULT_INVITE_HOURS};
use dioxus::prelude::*;
use ui::components::{Alert, ConfirmDialog};
use ui::format::date_part;
use ui::{notify_error, notify_success, reload_session, use_auth, use_client, use_toasts};

#[component]
pub fn Couple() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        div {
            class: "page narrow",
            div {
                class: "page-header",
                h1 { "カップル" }
            }
            match (state.couple.as_ref(), state.partner()) {
                (Some(couple), Some(partner)) => rsx! {
                    Linked { partner: partner.clone(), since: date_part(&couple.created_at).to_string() }
                },
                _ => rsx! {
                    InvitePanel {}
                    JoinPanel {}
                },
            }
        }
    }
}

#[component]
fn MemberCard(user: User) -> Element {
    rsx! {
        div {
            class: "member",
            if let Some(picture) = user.picture_url.as_ref() {
                img { class: "avatar", src: "{picture}", alt: "" }
            } else {
                span { class: "avatar avatar-placeholder", "{user.initial()}" }
            }
            div {
                p { class: "strong", "{user.display_name()}" }
                p { class: "muted small", "{user.email}" }
            }
        }
    }
}

#[component]
fn Linked(partner: User, since: String) -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut toasts = use_toasts();
    let mut confirming = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let on_leave = move |_| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            match client.leave_couple().await {
                Ok(_) => {
                    tracing::info!("left couple");
                    notify_success(&mut toasts, "カップルを解消しました");
                    confirming.set(false);
                    reload_session(auth, client).await;
                }
                Err(e) => {
                    tracing::error!("leave couple failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "card",
            h3 { "パートナー" }
            MemberCard { user: partner }
            if !since.is_empty() {
                p { class: "muted small", "{since} から共有中" }
            }
            p {
                class: "muted",
                "カップルの取引・予算・資産はふたりで共有されます。"
            }
            div {
                class: "form-actions",
                button {
                    class: "btn btn-danger",
                    onclick: move |_| confirming.set(true),
                    "カップルを解消"
                }
            }
        }

        if confirming() {
            ConfirmDialog {
                title: "カップルの解消",
                message: "カップルを解消すると、共有データは閲覧できなくなります。よろしいですか？",
                confirm_label: "解消する",
                busy: busy(),
                on_confirm: on_leave,
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}

#[component]
fn InvitePanel() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut invite = use_signal(|| Option::<InviteCode>::None);
    let mut busy = use_signal(|| false);

    let on_create = move |_| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            match client.create_invite(DEFAULT_INVITE_HOURS).await {
                Ok(code) => {
                    tracing::info!("invite code created");
                    invite.set(Some(code));
                }
                Err(e) => {
                    tracing::error!("create invite failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "card",
            h3 { "パートナーを招待" }
            p {
                class: "muted",
                "招待コードを発行してパートナーに伝えてください。コードは{DEFAULT_INVITE_HOURS}時間有効です。"
            }
            if let Some(code) = invite() {
                div {
                    class: "invite-code",
                    span { class: "invite-code-value", "{code.code}" }
                    span { class: "muted small", "有効期限: {date_part(&code.expires_at)}" }
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "btn",
                    disabled: busy(),
                    onclick: on_create,
                    if invite().is_some() { "コードを再発行" } else { "招待コードを発行" }
                }
            }
        }
    }
}

#[component]
fn JoinPanel() -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut toasts = use_toasts();
    let mut draft = use_signal(InviteCodeDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let code = match draft.read().validate() {
            Ok(code) => code,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        error.set(None);
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            match client.join_couple(&code).await {
                Ok(_) => {
                    tracing::info!("joined couple");
                    notify_success(&mut toasts, "カップルになりました");
                    reload_session(auth, client).await;
                }
                Err(e) => {
                    tracing::error!("join couple failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        form {
            class: "card form",
            onsubmit,
            h3 { "招待コードで参加" }
            if let Some(message) = error() {
                Alert { message }
            }
            label {
                class: "field",
                span { class: "field-label", "招待コード" }
                input {
                    r#type: "text",
                    autocomplete: "off",
                    value: "{draft.read().code}",
                    oninput: move |e| draft.write().code = e.value(),
                }
            }
            div {
                class: "form-actions",
                button { r#type: "submit", class: "btn", disabled: busy(), "参加する" }
            }
        }
    }
}
