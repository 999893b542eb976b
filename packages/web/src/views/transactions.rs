use api::categories::all_categories;
use api::forms::TransactionDraft;
use api::{
    ExportQuery, Scope, SummaryQuery, Transaction, TransactionCreate, TransactionFilter,
    TransactionType, TransactionUpdate,
};
use chrono::Datelike;
use dioxus::prelude::*;
use ui::components::{
    save_csv, use_data_version, Alert, ConfirmDialog, LoadingSpinner, Modal, MonthPicker,
    ScopeToggle, SummaryCards, TransactionForm, TransactionList,
};
use ui::format::{format_signed_yen, month_bounds, today};
use ui::{notify_error, notify_success, use_auth, use_client, use_toasts};

use crate::Route;

#[component]
pub fn Transactions() -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut toasts = use_toasts();
    let version = use_data_version();

    let now = today();
    let mut period = use_signal(|| (now.year(), now.month()));
    let mut scope = use_signal(|| Scope::Personal);
    let mut kind = use_signal(|| Option::<TransactionType>::None);
    let mut category = use_signal(String::new);

    let mut creating = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Transaction>::None);
    let mut deleting = use_signal(|| Option::<Transaction>::None);
    let mut busy = use_signal(|| false);
    let mut exporting = use_signal(|| false);

    let list_client = client.clone();
    let mut listing = use_resource(move || {
        let client = list_client.clone();
        let (year, month) = period();
        let (start, end) = month_bounds(year, month);
        let filter = TransactionFilter {
            kind: kind(),
            category: Some(category()).filter(|c| !c.is_empty()),
            ..TransactionFilter::default().scope(scope()).between(start, end)
        };
        let summary_query = SummaryQuery {
            start_date: Some(start),
            end_date: Some(end),
            scope: Some(scope()),
        };
        let _ = version.get();
        async move {
            let (list, summary) = futures::join!(
                client.list_transactions(&filter),
                client.transaction_summary(&summary_query),
            );
            (list, summary.ok())
        }
    });

    let state = auth();
    let has_couple = state.couple.is_some();
    let me = state.user_id().unwrap_or_default().to_string();

    let create_client = client.clone();
    let on_create = move |body: TransactionCreate| {
        let client = create_client.clone();
        spawn(async move {
            busy.set(true);
            match client.create_transaction(&body).await {
                Ok(tx) => {
                    notify_success(
                        &mut toasts,
                        format!("{} {} を登録しました", tx.category, format_signed_yen(tx.kind, tx.amount)),
                    );
                    creating.set(false);
                    listing.restart();
                }
                Err(e) => {
                    tracing::error!("create transaction failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let update_client = client.clone();
    let on_update = move |body: TransactionCreate| {
        let client = update_client.clone();
        let Some(target) = editing() else {
            return;
        };
        spawn(async move {
            busy.set(true);
            match client.update_transaction(&target.id, &TransactionUpdate::from(body)).await {
                Ok(_) => {
                    notify_success(&mut toasts, "取引を更新しました");
                    editing.set(None);
                    listing.restart();
                }
                Err(e) => {
                    tracing::error!("update transaction failed: {}", e);
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
            match client.delete_transaction(&target.id).await {
                Ok(()) => {
                    notify_success(&mut toasts, "取引を削除しました");
                    deleting.set(None);
                    listing.restart();
                }
                Err(e) => {
                    tracing::error!("delete transaction failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let export_client = client.clone();
    let on_export = move |_| {
        let client = export_client.clone();
        let (year, month) = period();
        let (start, end) = month_bounds(year, month);
        let query = ExportQuery {
            start_date: Some(start),
            end_date: Some(end),
            scope: scope(),
        };
        spawn(async move {
            exporting.set(true);
            match client.export_transactions_csv(&query).await {
                Ok(file) => match save_csv(&file) {
                    Ok(()) => notify_success(&mut toasts, format!("{} をダウンロードしました", file.filename)),
                    Err(e) => notify_error(&mut toasts, e),
                },
                Err(e) => {
                    tracing::error!("csv export failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            exporting.set(false);
        });
    };

    let (year, month) = period();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header card-row",
                h1 { "取引" }
                div {
                    class: "card-actions",
                    button {
                        class: "btn-outline",
                        disabled: exporting(),
                        onclick: on_export,
                        if exporting() { "出力中..." } else { "CSV出力" }
                    }
                    button {
                        class: "btn",
                        onclick: move |_| creating.set(true),
                        "＋ 新規取引"
                    }
                }
            }

            div {
                class: "filters",
                MonthPicker {
                    year,
                    month,
                    on_change: move |p| period.set(p),
                }
                ScopeToggle {
                    value: scope(),
                    has_couple,
                    on_change: move |s| scope.set(s),
                }
                select {
                    onchange: move |e| kind.set(TransactionType::parse(&e.value())),
                    option { value: "", "すべての種類" }
                    option { value: "income", "収入" }
                    option { value: "expense", "支出" }
                }
                select {
                    onchange: move |e| category.set(e.value()),
                    option { value: "", "すべてのカテゴリ" }
                    for name in all_categories() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }

            match &*listing.read() {
                None => rsx! { LoadingSpinner {} },
                Some((Err(e), _)) => rsx! { Alert { message: e.user_message() } },
                Some((Ok(items), summary)) => rsx! {
                    if let Some(summary) = summary.clone() {
                        SummaryCards { summary }
                    }
                    div {
                        class: "card",
                        TransactionList {
                            transactions: items.clone(),
                            on_edit: move |tx| editing.set(Some(tx)),
                            on_delete: move |tx| deleting.set(Some(tx)),
                        }
                    }
                },
            }
        }

        if creating() {
            Modal {
                title: "新規取引",
                on_close: move |_| creating.set(false),
                TransactionForm {
                    initial: TransactionDraft::new(today()),
                    couple: state.couple.clone(),
                    current_user_id: me.clone(),
                    submit_label: "登録",
                    busy: busy(),
                    on_submit: on_create,
                }
            }
        }

        if let Some(tx) = editing() {
            Modal {
                title: "取引を編集",
                on_close: move |_| editing.set(None),
                TransactionForm {
                    key: "{tx.id}",
                    initial: TransactionDraft::from_transaction(&tx),
                    couple: state.couple.clone(),
                    current_user_id: me.clone(),
                    busy: busy(),
                    on_submit: on_update,
                }
            }
        }

        if let Some(tx) = deleting() {
            ConfirmDialog {
                title: "取引の削除",
                message: format!("{} {} を削除しますか？", tx.category, format_signed_yen(tx.kind, tx.amount)),
                busy: busy(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

/// Full-page entry form.
#[component]
pub fn NewTransaction() -> Element {
    let auth = use_auth();
    let client = use_client();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let state = auth();
    let me = state.user_id().unwrap_or_default().to_string();

    let on_submit = move |body: TransactionCreate| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            match client.create_transaction(&body).await {
                Ok(tx) => {
                    notify_success(
                        &mut toasts,
                        format!("{} {} を登録しました", tx.category, format_signed_yen(tx.kind, tx.amount)),
                    );
                    nav.push(Route::Transactions {});
                }
                Err(e) => {
                    tracing::error!("create transaction failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "page narrow",
            h1 { "取引を追加" }
            if let Some(message) = error() {
                Alert { message }
            }
            div {
                class: "card",
                TransactionForm {
                    initial: TransactionDraft::new(today()),
                    couple: state.couple.clone(),
                    current_user_id: me,
                    submit_label: "登録",
                    busy: busy(),
                    on_submit,
                    on_cancel: move |_| {
                        nav.push(Route::Transactions {});
                    },
                }
            }
        }
    }
}
