use dioxus::prelude::*;
use std::time::Duration;

use crate::host::Toast;

/// How long a notice stays up before dismissing itself.
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[component]
pub fn ToastStack(toasts: Signal<Vec<Toast>>) -> Element {
    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts.read().iter().cloned() {
                ToastItem { key: "{toast.id}", toast, toasts }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, mut toasts: Signal<Vec<Toast>>) -> Element {
    let toast_id = toast.id;

    use_future(move || async move {
        tokio::time::sleep(TOAST_LIFETIME).await;
        toasts.write().retain(|toast| toast.id != toast_id);
    });

    rsx! {
        div {
            class: "toast",
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| {
                    toasts.write().retain(|toast| toast.id != toast_id);
                },
                "×"
            }
        }
    }
}
