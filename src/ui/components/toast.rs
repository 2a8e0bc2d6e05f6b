use std::time::Duration;

use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Warning => "⚠️",
            Self::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

/// Appends to the queue, dropping the oldest entry once the limit is reached.
pub fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= TOAST_LIMIT {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, message));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for message in messages {
                    ToastCard { key: "{message.id}", message: message.clone(), toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toasts_for_timer = toasts.clone();
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let dismiss_id = message.id.clone();
    rsx! {
        li {
            class: theme::toast(message.kind),
            span { "{message.kind.icon()}" }
            p { "{message.text}" }
            button {
                class: "toast__dismiss",
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}
