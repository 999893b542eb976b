use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "読み込み中...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
            span { class: "muted", "{label}" }
        }
    }
}

/// Grey placeholder blocks shown while the dashboard loads.
#[component]
pub fn PageSkeleton(#[props(default = 4)] cards: usize) -> Element {
    rsx! {
        div {
            class: "grid-cards",
            for i in 0..cards {
                div { key: "{i}", class: "card skeleton" }
            }
        }
        div { class: "card skeleton skeleton-tall" }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        p { class: "empty", "{message}" }
    }
}
