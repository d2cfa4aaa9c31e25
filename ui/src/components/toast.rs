use dioxus::prelude::*;

use crate::hooks::use_toasts::use_toasts;

/// Renders the visible toasts in the bottom-right corner. Click to dismiss.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let queue = toasts.queue();

    rsx! {
        div {
            class: "toast-host",
            for (id, toast) in queue.read().visible().cloned() {
                article {
                    key: "{id:?}",
                    class: "toast",
                    role: "status",
                    onclick: move |_| toasts.dismiss(id),
                    strong { "{toast.title}" }
                    p { "{toast.description}" }
                }
            }
        }
    }
}
