use dioxus::prelude::*;

/// Centered overlay; clicking the backdrop closes it.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "{title}" }
                    button {
                        class: "icon-button",
                        aria_label: "閉じる",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

/// Yes/no confirmation before a destructive action.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "削除".to_string())] confirm_label: String,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            title: title,
            on_close: on_cancel,
            p { class: "modal-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-outline",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "キャンセル"
                }
                button {
                    class: "btn btn-danger",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "処理中..." } else { "{confirm_label}" }
                }
            }
        }
    }
}

/// Inline error box for forms and failed loads.
#[component]
pub fn Alert(message: String) -> Element {
    rsx! {
        div { class: "alert", role: "alert", "{message}" }
    }
}
