use api::categories::categories_for;
use api::forms::RecurringDraft;
use api::{
    Frequency, RecurringCreate, RecurringFilter, RecurringTransaction, RecurringUpdate,
    TransactionType, WEEKDAY_LABELS,
};
use dioxus::prelude::*;
use ui::components::{use_data_version, Alert, ConfirmDialog, EmptyState, LoadingSpinner, Modal};
use ui::format::format_signed_yen;
use ui::{notify_error, notify_success, use_auth, use_client, use_toasts};

#[derive(Clone, Debug, PartialEq)]
enum Editing {
    New,
    Existing(RecurringTransaction),
}

#[component]
pub fn Recurring() -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut toasts = use_toasts();
    let mut version = use_data_version();

    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut deleting = use_signal(|| Option::<RecurringTransaction>::None);
    let mut busy = use_signal(|| false);

    let list_client = client.clone();
    let mut items = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_recurring(&RecurringFilter::default()).await }
    });

    let has_couple = auth().couple.is_some();

    let save_client = client.clone();
    let on_save = move |body: RecurringCreate| {
        let client = save_client.clone();
        let Some(mode) = editing() else {
            return;
        };
        spawn(async move {
            busy.set(true);
            let result = match mode {
                Editing::New => client.create_recurring(&body).await,
                Editing::Existing(r) => client.update_recurring(&r.id, &RecurringUpdate::from(body)).await,
            };
            match result {
                Ok(r) => {
                    notify_success(&mut toasts, format!("{}（{}）を保存しました", r.category, r.schedule_label()));
                    editing.set(None);
                    items.restart();
                }
                Err(e) => {
                    tracing::error!("save recurring failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let toggle_client = client.clone();
    let on_toggle = move |r: RecurringTransaction| {
        let client = toggle_client.clone();
        spawn(async move {
            match client.update_recurring(&r.id, &RecurringUpdate::active(!r.is_active)).await {
                Ok(updated) => {
                    let state = if updated.is_active { "有効" } else { "停止" };
                    notify_success(&mut toasts, format!("{}を{}にしました", updated.category, state));
                    items.restart();
                }
                Err(e) => {
                    tracing::error!("toggle recurring failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
        });
    };

    let execute_client = client.clone();
    let on_execute = move |r: RecurringTransaction| {
        let client = execute_client.clone();
        spawn(async move {
            match client.execute_recurring(&r.id).await {
                Ok(result) => {
                    tracing::info!("recurring {} created transaction {}", r.id, result.transaction_id);
                    notify_success(&mut toasts, result.message);
                    version.bump();
                    items.restart();
                }
                Err(e) => {
                    tracing::error!("execute recurring failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
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
            match client.delete_recurring(&target.id).await {
                Ok(()) => {
                    notify_success(&mut toasts, "定期取引を削除しました");
                    deleting.set(None);
                    items.restart();
                }
                Err(e) => {
                    tracing::error!("delete recurring failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let form_dialog = editing().map(|mode| match mode {
        Editing::New => ("定期取引を追加".to_string(), "new".to_string(), RecurringDraft::default()),
        Editing::Existing(r) => (
            "定期取引を編集".to_string(),
            r.id.clone(),
            RecurringDraft::from_recurring(&r),
        ),
    });

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header card-row",
                h1 { "定期取引" }
                button {
                    class: "btn",
                    onclick: move |_| editing.set(Some(Editing::New)),
                    "＋ 定期取引を追加"
                }
            }

            match &*items.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { message: "定期取引はまだありません" }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "grid-cards",
                        for r in list.clone() {
                            RecurringCard {
                                key: "{r.id}",
                                item: r,
                                on_edit: move |r| editing.set(Some(Editing::Existing(r))),
                                on_toggle: on_toggle.clone(),
                                on_execute: on_execute.clone(),
                                on_delete: move |r| deleting.set(Some(r)),
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
                RecurringForm {
                    key: "{form_key}",
                    initial,
                    has_couple,
                    busy: busy(),
                    on_submit: on_save,
                }
            }
        }

        if let Some(r) = deleting() {
            ConfirmDialog {
                title: "定期取引の削除",
                message: format!("{}（{}）を削除しますか？", r.category, r.schedule_label()),
                busy: busy(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn RecurringCard(
    item: RecurringTransaction,
    on_edit: EventHandler<RecurringTransaction>,
    on_toggle: EventHandler<RecurringTransaction>,
    on_execute: EventHandler<RecurringTransaction>,
    on_delete: EventHandler<RecurringTransaction>,
) -> Element {
    let amount_class = match item.kind {
        TransactionType::Income => "amount income",
        TransactionType::Expense => "amount expense",
    };
    let (edit, toggle, execute, delete) = (item.clone(), item.clone(), item.clone(), item.clone());

    rsx! {
        div {
            class: if item.is_active { "card" } else { "card inactive" },
            div {
                class: "card-row",
                div {
                    p { class: "card-title", "{item.category}" }
                    p { class: "muted small", "{item.schedule_label()}" }
                }
                p { class: amount_class, "{format_signed_yen(item.kind, item.amount)}" }
            }
            if let Some(description) = item.description.as_deref() {
                p { class: "muted small", "{description}" }
            }
            div {
                class: "card-row small",
                if item.is_split {
                    span { class: "badge", "割り勘" }
                }
                if let Some(day) = item.next_due_day() {
                    span { class: "muted", "次回 {day}" }
                }
                if !item.is_active {
                    span { class: "badge", "停止中" }
                }
            }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-small",
                    disabled: !item.is_active,
                    onclick: move |_| on_execute.call(execute.clone()),
                    "今すぐ実行"
                }
                button {
                    class: "btn btn-small btn-outline",
                    onclick: move |_| on_toggle.call(toggle.clone()),
                    if item.is_active { "停止" } else { "再開" }
                }
                button {
                    class: "btn btn-small btn-outline",
                    onclick: move |_| on_edit.call(edit.clone()),
                    "編集"
                }
                button {
                    class: "btn btn-small btn-danger-outline",
                    onclick: move |_| on_delete.call(delete.clone()),
                    "削除"
                }
            }
        }
    }
}

#[component]
fn RecurringForm(
    initial: RecurringDraft,
    has_couple: bool,
    busy: bool,
    on_submit: EventHandler<RecurringCreate>,
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
            div {
                class: "segmented",
                for kind in [TransactionType::Expense, TransactionType::Income] {
                    button {
                        key: "{kind.as_str()}",
                        r#type: "button",
                        class: if kind == current.kind { "segment active" } else { "segment" },
                        onclick: move |_| {
                            let mut d = draft.write();
                            if d.kind != kind {
                                d.category.clear();
                            }
                            d.kind = kind;
                            if kind == TransactionType::Income {
                                d.is_split = false;
                            }
                        },
                        "{kind.label()}"
                    }
                }
            }
            label {
                class: "field",
                span { class: "field-label", "カテゴリ" }
                select {
                    onchange: move |e| draft.write().category = e.value(),
                    option { value: "", "選択してください" }
                    for name in categories_for(current.kind) {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: current.category == name,
                            "{name}"
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
            label {
                class: "field",
                span { class: "field-label", "頻度" }
                select {
                    onchange: move |e| {
                        if let Some(frequency) = Frequency::parse(&e.value()) {
                            draft.write().frequency = frequency;
                        }
                    },
                    for frequency in [Frequency::Monthly, Frequency::Weekly, Frequency::Yearly] {
                        option {
                            key: "{frequency.as_str()}",
                            value: "{frequency.as_str()}",
                            selected: frequency == current.frequency,
                            "{frequency.label()}"
                        }
                    }
                }
            }
            match current.frequency {
                Frequency::Monthly => rsx! {
                    label {
                        class: "field",
                        span { class: "field-label", "日" }
                        input {
                            r#type: "number",
                            min: "1",
                            max: "31",
                            value: "{current.day_of_month}",
                            oninput: move |e| draft.write().day_of_month = e.value(),
                        }
                    }
                },
                Frequency::Weekly => rsx! {
                    label {
                        class: "field",
                        span { class: "field-label", "曜日" }
                        select {
                            onchange: move |e| draft.write().day_of_week = e.value().parse().ok(),
                            option { value: "", "選択してください" }
                            for (index, label) in WEEKDAY_LABELS.iter().enumerate() {
                                option {
                                    key: "{index}",
                                    value: "{index}",
                                    selected: current.day_of_week == Some(index as u32),
                                    "{label}"
                                }
                            }
                        }
                    }
                },
                Frequency::Yearly => rsx! {
                    p { class: "muted small", "登録日を基準に毎年作成されます。" }
                },
            }
            if has_couple && current.kind == TransactionType::Expense {
                label {
                    class: "field-inline",
                    input {
                        r#type: "checkbox",
                        checked: current.is_split,
                        onchange: move |e| draft.write().is_split = e.checked(),
                    }
                    span { "割り勘にする" }
                }
            }
            div {
                class: "form-actions",
                button { r#type: "submit", class: "btn", disabled: busy, "保存" }
            }
        }
    }
}
