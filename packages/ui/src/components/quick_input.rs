//! Floating quick-entry button and the editor for its shortcut list.

use api::forms::TransactionDraft;
use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use store::quick_categories::{AVAILABLE_COLORS, AVAILABLE_ICONS};
use store::QuickCategory;

use super::controls::PaidBySelector;
use super::dialog::{Alert, Modal};
use crate::auth::use_auth;
use crate::client::{make_quick_categories, use_client};
use crate::format::{format_yen, today};
use crate::icons::{color_class, CategoryIcon};
use crate::toast::{notify_error, notify_success, use_toasts};

/// Counter bumped after any write made outside a page's own handlers.
/// Pages read it inside their resources to refetch.
#[derive(Clone, Copy)]
pub struct DataVersion(pub Signal<u64>);

impl DataVersion {
    pub fn get(&self) -> u64 {
        (self.0)()
    }

    pub fn bump(&mut self) {
        *self.0.write() += 1;
    }
}

pub fn use_data_version() -> DataVersion {
    use_context::<DataVersion>()
}

/// The device's quick categories, shared by the FAB and the settings card.
pub fn use_quick_categories() -> Signal<Vec<QuickCategory>> {
    use_context::<Signal<Vec<QuickCategory>>>()
}

/// Provides [`DataVersion`] and the quick-category list.
#[component]
pub fn QuickEntryProvider(children: Element) -> Element {
    use_context_provider(|| DataVersion(Signal::new(0)));
    use_context_provider(|| Signal::new(make_quick_categories().load()));
    rsx! {
        {children}
    }
}

/// Round button in the corner that records an expense in two taps.
#[component]
pub fn QuickInputFab() -> Element {
    let mut open = use_signal(|| false);
    rsx! {
        button {
            class: "fab",
            title: "クイック入力",
            onclick: move |_| open.set(true),
            Icon { width: 22, height: 22, fill: "currentColor", icon: FaPlus }
        }
        if open() {
            QuickInputDialog { on_close: move |_| open.set(false) }
        }
    }
}

/// What the quick-entry dialog collects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickEntry {
    pub category: String,
    pub amount: String,
    pub memo: String,
    pub is_split: bool,
    pub paid_by: Option<String>,
}

impl QuickEntry {
    /// An expense dated `date`. Splitting needs a couple; the payer
    /// defaults to `current_user_id`.
    pub fn draft(&self, date: NaiveDate, in_couple: bool, current_user_id: Option<&str>) -> TransactionDraft {
        let is_split = self.is_split && in_couple;
        let paid_by = if is_split {
            self.paid_by
                .clone()
                .or_else(|| current_user_id.map(str::to_string))
        } else {
            None
        };
        TransactionDraft {
            category: self.category.clone(),
            amount: self.amount.clone(),
            description: self.memo.clone(),
            is_split,
            paid_by,
            ..TransactionDraft::new(date)
        }
    }
}

/// Amount entry for one quick category. `initial_category` preselects a chip.
#[component]
pub fn QuickInputDialog(
    #[props(default)] initial_category: String,
    on_close: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let client = use_client();
    let categories = use_quick_categories();
    let mut toasts = use_toasts();
    let mut version = use_data_version();

    let mut entry = use_signal(|| QuickEntry {
        category: initial_category.clone(),
        ..QuickEntry::default()
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let client = client.clone();
        async move {
            let state = auth.peek().clone();
            let draft = entry.peek().draft(today(), state.couple.is_some(), state.user_id());
            let body = match draft.validate() {
                Ok(body) => body,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            busy.set(true);
            match client.create_transaction(&body).await {
                Ok(tx) => {
                    tracing::info!("quick entry {} {}", tx.category, tx.amount);
                    notify_success(
                        &mut toasts,
                        format!("{} {} を記録しました", tx.category, format_yen(tx.amount)),
                    );
                    version.bump();
                    on_close.call(());
                }
                Err(err) => {
                    tracing::error!("quick entry failed: {}", err);
                    notify_error(&mut toasts, err.user_message());
                }
            }
            busy.set(false);
        }
    };

    let state = auth();
    let current = entry();

    rsx! {
        Modal {
            title: "クイック入力",
            on_close: on_close,
            form {
                class: "form",
                onsubmit: onsubmit,
                if let Some(message) = error() {
                    Alert { message }
                }
                div {
                    class: "chip-grid",
                    for qc in categories() {
                        button {
                            key: "{qc.name}",
                            r#type: "button",
                            class: if current.category == qc.name { "chip selected {color_class(&qc.color)}" } else { "chip {color_class(&qc.color)}" },
                            onclick: {
                                let name = qc.name.clone();
                                move |_| entry.write().category = name.clone()
                            },
                            CategoryIcon { name: qc.icon.clone() }
                            span { "{qc.name}" }
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
                        oninput: move |e| entry.write().amount = e.value(),
                    }
                }
                label {
                    class: "field",
                    span { class: "field-label", "メモ" }
                    input {
                        r#type: "text",
                        value: "{current.memo}",
                        oninput: move |e| entry.write().memo = e.value(),
                    }
                }
                if let (Some(couple), Some(me)) = (state.couple.clone(), state.user_id()) {
                    label {
                        class: "field-inline",
                        input {
                            r#type: "checkbox",
                            checked: current.is_split,
                            onchange: move |e| entry.write().is_split = e.checked(),
                        }
                        span { "割り勘にする" }
                    }
                    if current.is_split {
                        PaidBySelector {
                            couple,
                            current_user_id: me.to_string(),
                            value: current.paid_by.clone(),
                            on_change: move |id| entry.write().paid_by = id,
                        }
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "btn",
                        disabled: busy(),
                        "記録する"
                    }
                }
            }
        }
    }
}

/// Row of quick-category chips; each opens the entry dialog preselected.
#[component]
pub fn QuickCategoryBar() -> Element {
    let categories = use_quick_categories();
    let mut selected = use_signal(|| Option::<String>::None);
    rsx! {
        div {
            class: "chip-grid",
            for qc in categories() {
                button {
                    key: "{qc.name}",
                    class: "chip {color_class(&qc.color)}",
                    onclick: {
                        let name = qc.name.clone();
                        move |_| selected.set(Some(name.clone()))
                    },
                    CategoryIcon { name: qc.icon.clone() }
                    span { "{qc.name}" }
                }
            }
        }
        if let Some(category) = selected() {
            QuickInputDialog {
                initial_category: category,
                on_close: move |_| selected.set(None),
            }
        }
    }
}

/// Dashboard card for editing the quick-category list.
#[component]
pub fn QuickCategorySettings() -> Element {
    let mut categories = use_quick_categories();
    let mut name = use_signal(String::new);
    let mut icon = use_signal(|| AVAILABLE_ICONS[0].0.to_string());
    let mut color = use_signal(|| AVAILABLE_COLORS[0].0.to_string());

    let add = move |e: FormEvent| {
        e.prevent_default();
        if name().trim().is_empty() {
            return;
        }
        let list = make_quick_categories().add(&name(), &icon(), &color());
        categories.set(list);
        name.set(String::new());
    };

    rsx! {
        div {
            class: "card",
            div {
                class: "card-row",
                h3 { "クイックカテゴリ" }
                button {
                    class: "btn-outline btn-small",
                    onclick: move |_| categories.set(make_quick_categories().reset()),
                    "初期設定に戻す"
                }
            }
            ul {
                class: "quick-list",
                for (index, qc) in categories().into_iter().enumerate() {
                    li {
                        key: "{index}-{qc.name}",
                        class: "card-row",
                        span {
                            class: "chip {color_class(&qc.color)}",
                            CategoryIcon { name: qc.icon.clone() }
                            span { "{qc.name}" }
                        }
                        button {
                            class: "icon-button",
                            title: "削除",
                            onclick: move |_| categories.set(make_quick_categories().remove(index)),
                            Icon { width: 14, height: 14, fill: "currentColor", icon: FaTrash }
                        }
                    }
                }
            }
            form {
                class: "form-inline",
                onsubmit: add,
                input {
                    r#type: "text",
                    placeholder: "カテゴリ名",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                select {
                    value: "{icon}",
                    onchange: move |e| icon.set(e.value()),
                    for (value, label) in AVAILABLE_ICONS.iter() {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
                select {
                    value: "{color}",
                    onchange: move |e| color.set(e.value()),
                    for (value, label) in AVAILABLE_COLORS.iter() {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
                button { r#type: "submit", class: "btn btn-small", "追加" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(is_split: bool, paid_by: Option<&str>) -> QuickEntry {
        QuickEntry {
            category: "食費".to_string(),
            amount: "1200".to_string(),
            memo: "ランチ".to_string(),
            is_split,
            paid_by: paid_by.map(str::to_string),
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn test_paid_by_sent_only_when_split() {
        let body = entry(false, Some("u2")).draft(day(), true, Some("u1")).validate().unwrap();
        assert!(!body.is_split);
        assert_eq!(body.paid_by_user_id, None);

        let body = entry(true, Some("u2")).draft(day(), true, Some("u1")).validate().unwrap();
        assert!(body.is_split);
        assert_eq!(body.paid_by_user_id.as_deref(), Some("u2"));
    }

    #[test]
    fn test_payer_defaults_to_current_user() {
        let body = entry(true, None).draft(day(), true, Some("u1")).validate().unwrap();
        assert_eq!(body.paid_by_user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_split_ignored_without_couple() {
        let body = entry(true, Some("u2")).draft(day(), false, Some("u1")).validate().unwrap();
        assert!(!body.is_split);
        assert_eq!(body.paid_by_user_id, None);
        assert_eq!(body.kind, api::TransactionType::Expense);
        assert_eq!(body.description, "ランチ");
    }
}
