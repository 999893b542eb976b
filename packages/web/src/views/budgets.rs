use api::categories::all_expense_categories;
use api::forms::BudgetDraft;
use api::{Budget, BudgetCreate, BudgetFilter, BudgetType, BudgetUpdate, Scope};
use chrono::Datelike;
use dioxus::prelude::*;
use ui::components::{
    Alert, BudgetCard, ConfirmDialog, EmptyState, LoadingSpinner, Modal, MonthPicker, ScopeToggle,
};
use ui::format::{format_yen, today};
use ui::{notify_error, notify_success, use_auth, use_client, use_toasts};

#[component]
pub fn Budgets() -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut toasts = use_toasts();

    let now = today();
    let mut period = use_signal(|| (now.year(), now.month()));
    let mut scope = use_signal(|| Scope::Personal);
    let mut creating = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Budget>::None);
    let mut deleting = use_signal(|| Option::<Budget>::None);
    let mut busy = use_signal(|| false);

    let list_client = client.clone();
    let mut budgets = use_resource(move || {
        let client = list_client.clone();
        let (year, month) = period();
        let filter = BudgetFilter {
            scope: Some(scope()),
            year: Some(year),
            month: Some(month),
            is_active: None,
        };
        async move { client.list_budgets(&filter).await }
    });

    let has_couple = auth().couple.is_some();

    let create_client = client.clone();
    let on_create = move |body: BudgetCreate| {
        let client = create_client.clone();
        spawn(async move {
            busy.set(true);
            match client.create_budget(&body).await {
                Ok(budget) => {
                    notify_success(&mut toasts, format!("{}の予算を作成しました", budget.title()));
                    creating.set(false);
                    budgets.restart();
                }
                Err(e) => {
                    tracing::error!("create budget failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let update_client = client.clone();
    let on_update = move |(id, body): (String, BudgetUpdate)| {
        let client = update_client.clone();
        spawn(async move {
            busy.set(true);
            match client.update_budget(&id, &body).await {
                Ok(_) => {
                    notify_success(&mut toasts, "予算を更新しました");
                    editing.set(None);
                    budgets.restart();
                }
                Err(e) => {
                    tracing::error!("update budget failed: {}", e);
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
            match client.delete_budget(&target.id).await {
                Ok(()) => {
                    notify_success(&mut toasts, "予算を削除しました");
                    deleting.set(None);
                    budgets.restart();
                }
                Err(e) => {
                    tracing::error!("delete budget failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let (year, month) = period();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header card-row",
                h1 { "予算" }
                button {
                    class: "btn",
                    onclick: move |_| creating.set(true),
                    "＋ 予算を追加"
                }
            }

            div {
                class: "filters",
                MonthPicker { year, month, on_change: move |p| period.set(p) }
                ScopeToggle { value: scope(), has_couple, on_change: move |s| scope.set(s) }
            }

            match &*budgets.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
                Some(Ok(items)) if items.is_empty() => rsx! {
                    EmptyState { message: "この月の予算はまだありません" }
                },
                Some(Ok(items)) => rsx! {
                    div {
                        class: "grid-cards",
                        for budget in items.clone() {
                            BudgetCard {
                                key: "{budget.id}",
                                budget,
                                on_edit: move |b| editing.set(Some(b)),
                                on_delete: move |b| deleting.set(Some(b)),
                            }
                        }
                    }
                },
            }
        }

        if creating() {
            Modal {
                title: "予算を追加",
                on_close: move |_| creating.set(false),
                BudgetForm {
                    initial: BudgetDraft {
                        year,
                        month,
                        ..BudgetDraft::new(today(), scope())
                    },
                    has_couple,
                    busy: busy(),
                    on_submit: on_create,
                }
            }
        }

        if let Some(budget) = editing() {
            Modal {
                title: "予算を編集",
                on_close: move |_| editing.set(None),
                BudgetEditForm {
                    key: "{budget.id}",
                    budget,
                    busy: busy(),
                    on_submit: on_update,
                }
            }
        }

        if let Some(budget) = deleting() {
            ConfirmDialog {
                title: "予算の削除",
                message: format!("{}の予算（{}）を削除しますか？", budget.title(), format_yen(budget.amount)),
                busy: busy(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn BudgetForm(
    initial: BudgetDraft,
    has_couple: bool,
    busy: bool,
    on_submit: EventHandler<BudgetCreate>,
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
            if has_couple {
                ScopeToggle {
                    value: current.scope,
                    has_couple,
                    on_change: move |s| draft.write().scope = s,
                }
            }
            div {
                class: "segmented",
                for budget_type in [BudgetType::Category, BudgetType::MonthlyTotal] {
                    button {
                        key: "{budget_type.as_str()}",
                        r#type: "button",
                        class: if budget_type == current.budget_type { "segment active" } else { "segment" },
                        onclick: move |_| draft.write().budget_type = budget_type,
                        "{budget_type.label()}"
                    }
                }
            }
            if current.budget_type == BudgetType::Category {
                label {
                    class: "field",
                    span { class: "field-label", "カテゴリ" }
                    select {
                        onchange: move |e| draft.write().category = e.value(),
                        option { value: "", "選択してください" }
                        for name in all_expense_categories() {
                            option {
                                key: "{name}",
                                value: "{name}",
                                selected: current.category == name,
                                "{name}"
                            }
                        }
                    }
                }
            }
            label {
                class: "field",
                span { class: "field-label", "予算額" }
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    value: "{current.amount}",
                    oninput: move |e| draft.write().amount = e.value(),
                }
            }
            div {
                class: "field-row",
                label {
                    class: "field",
                    span { class: "field-label", "年" }
                    input {
                        r#type: "number",
                        value: "{current.year}",
                        oninput: move |e| {
                            if let Ok(year) = e.value().parse() {
                                draft.write().year = year;
                            }
                        },
                    }
                }
                label {
                    class: "field",
                    span { class: "field-label", "月" }
                    input {
                        r#type: "number",
                        min: "1",
                        max: "12",
                        value: "{current.month}",
                        oninput: move |e| {
                            if let Ok(month) = e.value().parse() {
                                draft.write().month = month;
                            }
                        },
                    }
                }
            }
            div {
                class: "form-actions",
                button { r#type: "submit", class: "btn", disabled: busy, "作成" }
            }
        }
    }
}

/// Only the amount and the active flag of an existing budget can change.
#[component]
fn BudgetEditForm(budget: Budget, busy: bool, on_submit: EventHandler<(String, BudgetUpdate)>) -> Element {
    let initial = BudgetDraft::from_budget(&budget);
    let mut amount = use_signal(|| initial.amount.clone());
    let mut active = use_signal(|| budget.is_active);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let draft = BudgetDraft {
            amount: amount(),
            ..initial.clone()
        };
        match draft.validate() {
            Ok(body) => {
                error.set(None);
                on_submit.call((
                    budget.id.clone(),
                    BudgetUpdate {
                        amount: Some(body.amount),
                        is_active: Some(active()),
                    },
                ));
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
                span { class: "field-label", "予算額" }
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    value: "{amount}",
                    oninput: move |e| amount.set(e.value()),
                }
            }
            label {
                class: "field-inline",
                input {
                    r#type: "checkbox",
                    checked: active(),
                    onchange: move |e| active.set(e.checked()),
                }
                span { "有効" }
            }
            div {
                class: "form-actions",
                button { r#type: "submit", class: "btn", disabled: busy, "保存" }
            }
        }
    }
}
