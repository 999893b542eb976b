//! Landing point of the OAuth redirect. Tokens arrive in the URL fragment.

use dioxus::prelude::*;
use ui::{clear_location_fragment, location_fragment, reload_session, sleep_ms, use_auth, use_client};

use crate::Route;

const FAILURE_REDIRECT_MILLIS: u32 = 3000;

#[component]
pub fn AuthCallback() -> Element {
    let auth = use_auth();
    let client = use_client();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);

    use_resource(move || {
        let client = client.clone();
        async move {
            let accepted = location_fragment()
                .map(|fragment| client.tokens().accept_callback_fragment(&fragment))
                .unwrap_or(false);
            clear_location_fragment();

            if accepted {
                tracing::info!("oauth sign-in completed");
                client.invalidate_cache();
                reload_session(auth, client).await;
                nav.replace(Route::Dashboard {});
            } else {
                tracing::warn!("oauth callback without tokens");
                error.set(Some("認証に失敗しました。再度ログインしてください。".to_string()));
                sleep_ms(FAILURE_REDIRECT_MILLIS).await;
                nav.replace(Route::Login {});
            }
        }
    });

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card center",
                if let Some(message) = error() {
                    p { class: "expense", "{message}" }
                    p { class: "muted small", "ログインページにリダイレクトしています..." }
                } else {
                    div { class: "spinner" }
                    p { class: "muted", "認証中..." }
                }
            }
        }
    }
}
