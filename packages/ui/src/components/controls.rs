use api::{Couple, Scope};
use dioxus::prelude::*;

use crate::format::{format_year_month, shift_month};

/// Personal / couple switch. Hidden entirely when the user has no partner.
#[component]
pub fn ScopeToggle(value: Scope, has_couple: bool, on_change: EventHandler<Scope>) -> Element {
    if !has_couple {
        return rsx! {};
    }
    rsx! {
        div {
            class: "segmented",
            for scope in [Scope::Personal, Scope::Couple] {
                button {
                    key: "{scope.as_str()}",
                    r#type: "button",
                    class: if scope == value { "segment active" } else { "segment" },
                    onclick: move |_| on_change.call(scope),
                    "{scope.label()}"
                }
            }
        }
    }
}

/// Previous / next month stepper.
#[component]
pub fn MonthPicker(year: i32, month: u32, on_change: EventHandler<(i32, u32)>) -> Element {
    rsx! {
        div {
            class: "month-picker",
            button {
                r#type: "button",
                class: "btn-outline btn-small",
                onclick: move |_| on_change.call(shift_month(year, month, -1)),
                "‹"
            }
            span { class: "strong", "{format_year_month(year, month)}" }
            button {
                r#type: "button",
                class: "btn-outline btn-small",
                onclick: move |_| on_change.call(shift_month(year, month, 1)),
                "›"
            }
        }
    }
}

/// Chooses which member paid a split expense. `None` means the current user.
#[component]
pub fn PaidBySelector(
    couple: Couple,
    current_user_id: String,
    value: Option<String>,
    on_change: EventHandler<Option<String>>,
) -> Element {
    let selected = value.unwrap_or_else(|| current_user_id.clone());
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "支払った人" }
            select {
                value: "{selected}",
                onchange: move |e| {
                    let id = e.value();
                    on_change.call((!id.is_empty()).then_some(id));
                },
                for member in couple.members() {
                    option {
                        key: "{member.id}",
                        value: "{member.id}",
                        selected: member.id == selected,
                        if member.id == current_user_id {
                            "{member.display_name()}（自分）"
                        } else {
                            "{member.display_name()}"
                        }
                    }
                }
            }
        }
    }
}
