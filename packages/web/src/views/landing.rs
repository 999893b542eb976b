use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let signed_in = auth().user.is_some();

    rsx! {
        div {
            class: "landing",
            header {
                class: "landing-hero",
                h1 { "Kakepple" }
                p { class: "lead", "ふたりの家計を、ひとつのアプリで。" }
                div {
                    class: "landing-actions",
                    if signed_in {
                        Link { class: "btn", to: Route::Dashboard {}, "ダッシュボードへ" }
                    } else {
                        Link { class: "btn", to: Route::Register { oauth_pending: String::new() }, "無料ではじめる" }
                        Link { class: "btn btn-outline", to: Route::Login {}, "ログイン" }
                    }
                }
            }
            section {
                class: "grid-cards",
                Feature { title: "かんたん入力", body: "よく使うカテゴリからワンタップで支出を記録できます。" }
                Feature { title: "割り勘", body: "ふたりの支出を自動で折半し、誰が払ったかも記録します。" }
                Feature { title: "予算管理", body: "カテゴリ別・月全体の予算と使用状況をひと目で確認できます。" }
                Feature { title: "分析とレポート", body: "月次・年次のレポートをグラフとCSVで振り返れます。" }
            }
            footer {
                class: "landing-footer muted small",
                Link { to: Route::Privacy {}, "プライバシーポリシー" }
            }
        }
    }
}

#[component]
fn Feature(title: String, body: String) -> Element {
    rsx! {
        div {
            class: "card",
            h3 { "{title}" }
            p { class: "muted", "{body}" }
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    rsx! {
        article {
            class: "page prose",
            h1 { "プライバシーポリシー" }
            p { "Kakepple（以下「本サービス」）は、利用者の個人情報を以下の方針に基づき取り扱います。" }
            h2 { "取得する情報" }
            p { "メールアドレス、表示名、プロフィール画像、および利用者が入力した収支・予算・資産の情報を取得します。GoogleまたはLINEでログインした場合は、各サービスから提供される基本プロフィールを取得します。" }
            h2 { "利用目的" }
            p { "取得した情報は、本サービスの提供、パートナーとの家計共有、通知の送信、および不具合の調査のためにのみ利用します。" }
            h2 { "第三者提供" }
            p { "法令に基づく場合を除き、本人の同意なく第三者に個人情報を提供することはありません。" }
            h2 { "端末に保存する情報" }
            p { "ログイン状態を保つためのトークン、クイックカテゴリの設定、表示テーマ、および一時的なキャッシュをブラウザのローカルストレージに保存します。" }
            h2 { "お問い合わせ" }
            p { "個人情報の開示・訂正・削除のご依頼は、アカウント設定画面またはお問い合わせ窓口からご連絡ください。" }
            Link { class: "btn btn-outline", to: Route::Landing {}, "トップへ戻る" }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "page center",
            h1 { "ページが見つかりません" }
            p { class: "muted", "/{path}" }
            Link { class: "btn", to: Route::Landing {}, "トップへ戻る" }
        }
    }
}
