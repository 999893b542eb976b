//! Administrator pages under `/admin`. The guard keeps non-admins out; a 403
//! from any admin endpoint also sends the visitor back to the dashboard.

use api::{
    AdminTransactionQuery, AdminUser, AdminUserUpdate, Page, TransactionType, UserListQuery,
};
use dioxus::prelude::*;
use ui::components::{Alert, ConfirmDialog, EmptyState, LoadingSpinner, SummaryCard, Tone};
use ui::format::{date_part, format_signed_yen};
use ui::{notify_error, notify_success, use_auth, use_client, use_toasts};

use crate::Route;

/// Redirects to the dashboard once `resource` settles on a 403.
fn use_forbidden_redirect<T: 'static>(resource: Resource<api::Result<T>>) {
    let nav = use_navigator();
    use_effect(move || {
        if let Some(Err(e)) = &*resource.read() {
            if e.is_forbidden() {
                tracing::warn!("admin endpoint refused, leaving admin pages");
                nav.replace(Route::Dashboard {});
            }
        }
    });
}

#[component]
pub fn AdminGuard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let current = use_route::<Route>();

    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_admin() {
            nav.replace(Route::Dashboard {});
        }
    });

    if !auth().is_admin() {
        return rsx! { LoadingSpinner {} };
    }

    let tabs = [
        (Route::AdminHome {}, "概要"),
        (Route::AdminUsers {}, "ユーザー"),
        (Route::AdminCouples {}, "カップル"),
        (Route::AdminTransactions {}, "取引"),
    ];

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "管理" }
            }
            nav {
                class: "segmented",
                for (route, label) in tabs {
                    Link {
                        key: "{label}",
                        class: if route == current { "segment active" } else { "segment" },
                        to: route,
                        "{label}"
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Pager(page: Page, total: u32, on_change: EventHandler<Page>) -> Element {
    let last = total.div_ceil(page.limit.max(1)).max(1);
    rsx! {
        div {
            class: "pager",
            button {
                class: "btn btn-ghost",
                disabled: !page.has_prev(),
                onclick: move |_| on_change.call(page.prev()),
                "前へ"
            }
            span { class: "muted", "{page.number()} / {last}（全{total}件）" }
            button {
                class: "btn btn-ghost",
                disabled: !page.has_next(total),
                onclick: move |_| on_change.call(page.next()),
                "次へ"
            }
        }
    }
}

#[component]
pub fn AdminHome() -> Element {
    let client = use_client();
    let stats = use_resource(move || {
        let client = client.clone();
        async move { client.admin_stats().await }
    });
    use_forbidden_redirect(stats);

    let view = match &*stats.read() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
        Some(Ok(s)) => rsx! {
            div {
                class: "grid-cards",
                StatCard { title: "ユーザー数", value: s.total_users, caption: format!("今月 +{}", s.users_this_month) }
                StatCard { title: "カップル数", value: s.total_couples }
                StatCard { title: "取引数", value: s.total_transactions, caption: format!("今月 +{}", s.transactions_this_month) }
                SummaryCard { title: "総収入", amount: s.total_income, tone: Tone::Income }
                SummaryCard { title: "総支出", amount: s.total_expense, tone: Tone::Expense }
            }
        },
    };
    view
}

#[component]
fn StatCard(title: String, value: u32, #[props(default)] caption: Option<String>) -> Element {
    rsx! {
        div {
            class: "card summary-card",
            p { class: "card-title", "{title}" }
            p { class: "amount", "{value}" }
            if let Some(caption) = caption {
                p { class: "muted small", "{caption}" }
            }
        }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut toasts = use_toasts();
    let mut page = use_signal(Page::default);
    let mut search_input = use_signal(String::new);
    let mut search = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| Option::<AdminUser>::None);
    let mut busy = use_signal(|| false);

    let list_client = client.clone();
    let mut users = use_resource(move || {
        let client = list_client.clone();
        let query = UserListQuery {
            page: page(),
            search: search(),
        };
        async move { client.admin_users(&query).await }
    });
    use_forbidden_redirect(users);

    let toggle_client = client.clone();
    let on_toggle_admin = use_callback(move |user: AdminUser| {
        let client = toggle_client.clone();
        spawn(async move {
            let body = AdminUserUpdate {
                is_admin: Some(!user.is_admin),
                ..AdminUserUpdate::default()
            };
            match client.admin_update_user(&user.id, &body).await {
                Ok(updated) => {
                    tracing::info!("admin flag of {} set to {}", updated.email, updated.is_admin);
                    notify_success(&mut toasts, format!("{} の権限を変更しました", updated.email));
                    users.restart();
                }
                Err(e) => {
                    tracing::error!("admin update failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
        });
    });

    let delete_client = client.clone();
    let on_confirm_delete = move |_| {
        let client = delete_client.clone();
        let Some(target) = deleting() else {
            return;
        };
        spawn(async move {
            busy.set(true);
            match client.admin_delete_user(&target.id).await {
                Ok(_) => {
                    notify_success(&mut toasts, format!("{} を削除しました", target.email));
                    deleting.set(None);
                    users.restart();
                }
                Err(e) => {
                    tracing::error!("admin delete failed: {}", e);
                    notify_error(&mut toasts, e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let me = auth().user_id().map(str::to_string);

    rsx! {
        form {
            class: "filters",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                let text = search_input().trim().to_string();
                search.set((!text.is_empty()).then_some(text));
                page.set(Page::default());
            },
            input {
                r#type: "search",
                placeholder: "メールアドレスまたは名前",
                value: "{search_input}",
                oninput: move |e| search_input.set(e.value()),
            }
            button { r#type: "submit", class: "btn btn-secondary", "検索" }
        }

        match &*users.read() {
            None => rsx! { LoadingSpinner {} },
            Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
            Some(Ok(list)) if list.users.is_empty() => rsx! {
                EmptyState { message: "ユーザーが見つかりません" }
            },
            Some(Ok(list)) => rsx! {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "メール" }
                            th { "名前" }
                            th { "ログイン方法" }
                            th { "登録日" }
                            th { "管理者" }
                            th {}
                        }
                    }
                    tbody {
                        for user in list.users.clone() {
                            tr {
                                key: "{user.id}",
                                td { "{user.email}" }
                                td { "{user.name.clone().unwrap_or_default()}" }
                                td {
                                    for provider in user.providers() {
                                        span { key: "{provider}", class: "badge", "{provider}" }
                                    }
                                }
                                td { "{date_part(&user.created_at)}" }
                                td {
                                    input {
                                        r#type: "checkbox",
                                        checked: user.is_admin,
                                        disabled: me.as_deref() == Some(user.id.as_str()),
                                        onchange: {
                                            let user = user.clone();
                                            move |_| on_toggle_admin.call(user.clone())
                                        },
                                    }
                                }
                                td {
                                    if me.as_deref() != Some(user.id.as_str()) {
                                        button {
                                            class: "btn btn-ghost btn-danger",
                                            onclick: {
                                                let user = user.clone();
                                                move |_| deleting.set(Some(user.clone()))
                                            },
                                            "削除"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Pager { page: page(), total: list.total, on_change: move |p| page.set(p) }
            },
        }

        if let Some(user) = deleting() {
            ConfirmDialog {
                title: "ユーザーの削除",
                message: format!("{} と関連データをすべて削除しますか？", user.email),
                busy: busy(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
pub fn AdminCouples() -> Element {
    let client = use_client();
    let mut page = use_signal(Page::default);
    let couples = use_resource(move || {
        let client = client.clone();
        let page = page();
        async move { client.admin_couples(page).await }
    });
    use_forbidden_redirect(couples);

    let view = match &*couples.read() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
        Some(Ok(list)) if list.couples.is_empty() => rsx! {
            EmptyState { message: "カップルはまだいません" }
        },
        Some(Ok(list)) => rsx! {
            table {
                class: "table",
                thead {
                    tr {
                        th { "ユーザー1" }
                        th { "ユーザー2" }
                        th { "成立日" }
                    }
                }
                tbody {
                    for couple in list.couples.iter() {
                        tr {
                            key: "{couple.id}",
                            td { "{couple.user1_name.as_deref().unwrap_or(&couple.user1_email)}" }
                            td { "{couple.user2_name.as_deref().unwrap_or(&couple.user2_email)}" }
                            td { "{date_part(&couple.created_at)}" }
                        }
                    }
                }
            }
            Pager { page: page(), total: list.total, on_change: move |p| page.set(p) }
        },
    };
    view
}

#[component]
pub fn AdminTransactions() -> Element {
    let client = use_client();
    let mut page = use_signal(Page::default);
    let mut kind = use_signal(|| Option::<TransactionType>::None);
    let mut user_id = use_signal(String::new);

    let transactions = use_resource(move || {
        let client = client.clone();
        let id = user_id().trim().to_string();
        let query = AdminTransactionQuery {
            page: page(),
            user_id: (!id.is_empty()).then_some(id),
            kind: kind(),
        };
        async move { client.admin_transactions(&query).await }
    });
    use_forbidden_redirect(transactions);

    rsx! {
        div {
            class: "filters",
            select {
                onchange: move |e| {
                    kind.set(TransactionType::parse(&e.value()));
                    page.set(Page::default());
                },
                option { value: "", "すべて" }
                for k in [TransactionType::Income, TransactionType::Expense] {
                    option { key: "{k.as_str()}", value: k.as_str(), "{k.label()}" }
                }
            }
            input {
                r#type: "text",
                placeholder: "ユーザーID",
                value: "{user_id}",
                onchange: move |e| {
                    user_id.set(e.value());
                    page.set(Page::default());
                },
            }
        }

        match &*transactions.read() {
            None => rsx! { LoadingSpinner {} },
            Some(Err(e)) => rsx! { Alert { message: e.user_message() } },
            Some(Ok(list)) if list.transactions.is_empty() => rsx! {
                EmptyState { message: "取引がありません" }
            },
            Some(Ok(list)) => rsx! {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "日付" }
                            th { "ユーザー" }
                            th { "カテゴリ" }
                            th { "金額" }
                            th { "メモ" }
                        }
                    }
                    tbody {
                        for tx in list.transactions.iter() {
                            tr {
                                key: "{tx.id}",
                                td { "{date_part(&tx.date)}" }
                                td { "{tx.user_name.as_deref().unwrap_or(&tx.user_email)}" }
                                td { "{tx.category}" }
                                td {
                                    class: tx.kind.as_str(),
                                    "{format_signed_yen(tx.kind, tx.amount)}"
                                }
                                td { "{tx.description.clone().unwrap_or_default()}" }
                            }
                        }
                    }
                }
                Pager { page: page(), total: list.total, on_change: move |p| page.set(p) }
            },
        }
    }
}
