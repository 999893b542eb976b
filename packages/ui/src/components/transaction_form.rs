use api::categories::categories_for;
use api::forms::TransactionDraft;
use api::{Couple, TransactionCreate, TransactionType};
use dioxus::prelude::*;

use super::controls::PaidBySelector;
use super::dialog::Alert;

/// Create/edit form for one transaction. Validation runs here; the caller
/// only sees a checked request body.
#[component]
pub fn TransactionForm(
    initial: TransactionDraft,
    #[props(default)] couple: Option<Couple>,
    #[props(default)] current_user_id: String,
    #[props(default = "保存".to_string())] submit_label: String,
    #[props(default)] busy: bool,
    on_submit: EventHandler<TransactionCreate>,
    #[props(default)] on_cancel: Option<EventHandler<()>>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let mut error = use_signal(|| Option::<String>::None);

    let current = draft();
    let categories = categories_for(current.kind);
    let can_split = couple.is_some() && current.kind == TransactionType::Expense;

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        match draft.read().validate() {
            Ok(body) => {
                error.set(None);
                on_submit.call(body);
            }
            Err(err) => {
                tracing::debug!("transaction form rejected: {}", err);
                error.set(Some(err.to_string()));
            }
        }
    };

    rsx! {
        form {
            class: "form",
            onsubmit: onsubmit,

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
                        onclick: move |_| draft.write().set_kind(kind),
                        "{kind.label()}"
                    }
                }
            }

            label {
                class: "field",
                span { class: "field-label", "カテゴリ" }
                select {
                    value: "{current.category}",
                    onchange: move |e| draft.write().category = e.value(),
                    option { value: "", "選択してください" }
                    for name in categories {
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
                    placeholder: "1000",
                    value: "{current.amount}",
                    oninput: move |e| draft.write().amount = e.value(),
                }
            }

            label {
                class: "field",
                span { class: "field-label", "日付" }
                input {
                    r#type: "date",
                    value: "{current.date}",
                    oninput: move |e| draft.write().date = e.value(),
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

            if can_split {
                label {
                    class: "field-inline",
                    input {
                        r#type: "checkbox",
                        checked: current.is_split,
                        onchange: move |e| draft.write().is_split = e.checked(),
                    }
                    span { "割り勘にする" }
                }
                if current.is_split {
                    if let Some(couple) = couple.clone() {
                        PaidBySelector {
                            couple,
                            current_user_id: current_user_id.clone(),
                            value: current.paid_by.clone(),
                            on_change: move |id| draft.write().paid_by = id,
                        }
                    }
                }
            }

            div {
                class: "form-actions",
                if let Some(on_cancel) = on_cancel {
                    button {
                        r#type: "button",
                        class: "btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "キャンセル"
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn",
                    disabled: busy,
                    if busy { "保存中..." } else { "{submit_label}" }
                }
            }
        }
    }
}
