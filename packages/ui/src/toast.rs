use dioxus::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_MILLIS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Queues a message and returns its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Shows a toast and schedules its removal.
pub fn notify(toasts: &mut Signal<Toasts>, level: ToastLevel, message: impl Into<String>) {
    let message = message.into();
    match level {
        ToastLevel::Error => tracing::error!("{}", message),
        _ => tracing::info!("{}", message),
    }
    let id = toasts.write().push(level, message);
    #[cfg(target_arch = "wasm32")]
    {
        let mut toasts = *toasts;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            toasts.write().dismiss(id);
        });
    }
    // Native builds have no timer; toasts close on click.
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

pub fn notify_success(toasts: &mut Signal<Toasts>, message: impl Into<String>) {
    notify(toasts, ToastLevel::Success, message);
}

pub fn notify_error(toasts: &mut Signal<Toasts>, message: impl Into<String>) {
    notify(toasts, ToastLevel::Error, message);
}

/// Provides the toast queue and renders it above the page.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in toasts().entries {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    role: "status",
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Success, "保存しました");
        let b = toasts.push(ToastLevel::Error, "失敗しました");
        assert!(b > a);
        assert_eq!(toasts.entries.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Info, "a");
        toasts.push(ToastLevel::Info, "b");
        toasts.dismiss(a);
        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].message, "b");
        toasts.dismiss(99);
        assert_eq!(toasts.entries.len(), 1);
    }
}
