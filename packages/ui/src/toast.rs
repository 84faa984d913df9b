//! Transient notifications surfaced at the edge of the screen.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
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
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Queue a transient notification.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, title: &str, message: &str) {
    let mut queue = toasts.write();
    let id = queue.next_id;
    queue.next_id += 1;
    queue.entries.push(Toast {
        id,
        level,
        title: title.to_string(),
        message: message.to_string(),
    });
}

pub fn dismiss_toast(toasts: &mut Signal<Toasts>, id: u64) {
    toasts.write().entries.retain(|t| t.id != id);
}

/// Provider component that owns the toast queue and renders it above the app.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastHost {}
    }
}

/// Renders queued toasts; a toast disappears when clicked.
#[component]
fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "toast-host",
            for toast in toasts().entries {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    onclick: move |_| dismiss_toast(&mut toasts, toast.id),
                    div { class: "toast-title", "{toast.title}" }
                    div { class: "toast-message", "{toast.message}" }
                }
            }
        }
    }
}
