use api::{Transaction, TransactionType};
use dioxus::prelude::*;

use crate::format::{format_month_day, format_signed_yen, format_yen};

/// Rows of transactions, newest first as the server returns them.
#[component]
pub fn TransactionList(
    transactions: Vec<Transaction>,
    #[props(default)] on_edit: Option<EventHandler<Transaction>>,
    #[props(default)] on_delete: Option<EventHandler<Transaction>>,
) -> Element {
    if transactions.is_empty() {
        return rsx! { p { class: "empty", "取引がありません" } };
    }
    rsx! {
        ul {
            class: "tx-list",
            for tx in transactions {
                TransactionRow {
                    key: "{tx.id}",
                    tx,
                    on_edit,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn TransactionRow(
    tx: Transaction,
    on_edit: Option<EventHandler<Transaction>>,
    on_delete: Option<EventHandler<Transaction>>,
) -> Element {
    let amount_class = match tx.kind {
        TransactionType::Income => "amount income",
        TransactionType::Expense => "amount expense",
    };
    let edit_tx = tx.clone();
    let delete_tx = tx.clone();

    rsx! {
        li {
            class: "tx-row",
            div {
                class: "tx-main",
                span { class: "tx-date muted small", "{format_month_day(tx.date)}" }
                span { class: "tx-category", "{tx.category}" }
                if tx.is_couple() {
                    span { class: "badge", "カップル" }
                }
                if tx.is_split {
                    span { class: "badge", "割り勘" }
                }
                if !tx.memo().is_empty() {
                    span { class: "tx-memo muted small", "{tx.memo()}" }
                }
            }
            div {
                class: "tx-side",
                span { class: amount_class, "{format_signed_yen(tx.kind, tx.amount)}" }
                if let Some(original) = tx.original_amount.filter(|_| tx.is_split) {
                    span { class: "muted small", "総額 {format_yen(original)}" }
                }
                if let Some(on_edit) = on_edit {
                    button {
                        class: "btn-small btn-outline",
                        onclick: move |_| on_edit.call(edit_tx.clone()),
                        "編集"
                    }
                }
                if let Some(on_delete) = on_delete {
                    button {
                        class: "btn-small btn-danger-outline",
                        onclick: move |_| on_delete.call(delete_tx.clone()),
                        "削除"
                    }
                }
            }
        }
    }
}
