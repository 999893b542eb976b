use api::forms::AssetDraft;
use api::{total_assets, Asset, AssetCreate, AssetType, AssetUpdate};
use dioxus::prelude::*;
use ui::components::{
    Alert, AssetCard, ConfirmDialog, EmptyState, LoadingSpinner, Modal, SummaryCard, Tone,
};
use ui::format::format_yen;
use ui::{notify_error, notify_success, use_client, use_toasts};

use super::loaded;

#[component]
pub fn Assets() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();

    // `None` = closed, `Some(None)` = new, `Some(Some(a))` = editing `a`.
    let mut editing = use_signal(|| Option::<Option<Asset>>::None);
    let mut deleting = use_signal(|| Option::<Asset>::None);
    let mut busy = use_signal(|| false);

    let types_client = client.clone();
    let asset_types = use_resource(move || {
        let client = types_client.clone();
        async move { loaded("asset types", client.asset_types().await).unwrap_or_default() }
    });

    let list_client = client.clone();
    let mut assets = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_assets().await }
    });

    let save_client = client.clone();
    let on_save = move |body: AssetCreate| {
        let client = save_client.clone();
        let Some(target) = editing() else {
            return;
        };
        spawn(async move {
            busy.set(true);
            let result = match target {
                None => client.create_asset(&body).await,
                Some(asset) => client.update_asset(&asset.id, &AssetUpdate::from(body)).await,
            };
            match result {
                Ok(asset) => {
                    notify_success(&mut toasts, format!("{}を保存しました", asset.name));
                    editing.set(None);
                    assets.restart();
                }
                Err(e) => {
                    tracing::error!("save asset failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let delete_client = client.clone();
    let on_confirm_delete = move |_| {
        let client = delete_client.clone();
        let Some(target) = deleting() else {
            return;
        };
        spawn(async move {
            busy.set(true);
            match client.delete_asset(&target.id).await {
                Ok(()) => {
                    notify_success(&mut toasts, format!("{}を削除しました", target.name));
                    deleting.set(None);
                    assets.restart();
                }
                Err(e) => {
                    tracing::error!("delete asset failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let form_dialog = editing().map(|target| match target {
        None => ("資産を追加".to_string(), "new".to_string(), AssetDraft::default()),
        Some(asset) => ("資産を編集".to_string(), asset.id.clone(), AssetDraft::from_asset(&asset)),
    });
    let types = asset_types.cloned().unwrap_or_default();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header card-row",
                h1 { "資産" }
                button {
                    class: "btn",
                    onclick: move |_| editing.set(Some(None)),
                    "＋ 資産を追加"
                }
            }

            match &*assets.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
                Some(Ok(list)) => rsx! {
                    SummaryCard {
                        title: "資産合計",
                        amount: total_assets(list),
                        tone: Tone::Balance,
                        caption: format!("{}件", list.len()),
                    }
                    if list.is_empty() {
                        EmptyState { message: "登録された資産はありません" }
                    } else {
                        div {
                            class: "grid-cards",
                            for asset in list.clone() {
                                AssetCard {
                                    key: "{asset.id}",
                                    asset,
                                    on_edit: move |a| editing.set(Some(Some(a))),
                                    on_delete: move |a| deleting.set(Some(a)),
                                }
                            }
                        }
                    }
                },
            }
        }

        if let Some((title, form_key, initial)) = form_dialog {
            Modal {
                title,
                on_close: move |_| editing.set(None),
                AssetForm {
                    key: "{form_key}",
                    initial,
                    types: types.clone(),
                    busy: busy(),
                    on_submit: on_save,
                }
            }
        }

        if let Some(asset) = deleting() {
            ConfirmDialog {
                title: "資産の削除",
                message: format!("{}（{}）を削除しますか？", asset.name, format_yen(asset.amount)),
                busy: busy(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn AssetForm(
    initial: AssetDraft,
    types: Vec<AssetType>,
    busy: bool,
    on_submit: EventHandler<AssetCreate>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let current = draft();

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        match draft.read().validate() {
            Ok(body) => {
                error.set(None);
                on_submit.call(body);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        form {
            class: "form",
            onsubmit,
            if let Some(message) = error() {
                Alert { message }
            }
            label {
                class: "field",
                span { class: "field-label", "資産名" }
                input {
                    r#type: "text",
                    value: "{current.name}",
                    oninput: move |e| draft.write().name = e.value(),
                }
            }
            label {
                class: "field",
                span { class: "field-label", "種類" }
                select {
                    onchange: move |e| draft.write().asset_type = e.value(),
                    option { value: "", "選択してください" }
                    for t in types {
                        option {
                            key: "{t.value}",
                            value: "{t.value}",
                            selected: current.asset_type == t.value,
                            "{t.label}"
                        }
                    }
                }
            }
            label {
                class: "field",
                span { class: "field-label", "金額" }
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    value: "{current.amount}",
                    oninput: move |e| draft.write().amount = e.value(),
                }
            }
            label {
                class: "field",
                span { class: "field-label", "メモ" }
                input {
                    r#type: "text",
                    value: "{current.description}",
                    oninput: move |e| draft.write().description = e.value(),
                }
            }
            div {
                class: "form-actions",
                button { r#type: "submit", class: "btn", disabled: busy, "保存" }
            }
        }
    }
}
