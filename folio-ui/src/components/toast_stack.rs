//! Toast notifications pinned to the top-right corner.

use crate::state::{use_page, AppState};
use dioxus::prelude::*;
use folio_core::notification::ToastId;
use folio_core::Msg;

#[derive(Clone, PartialEq)]
struct ToastView {
    id: ToastId,
    dom_id: String,
    class: String,
    icon: &'static str,
    message: String,
}

#[component]
pub fn ToastStack() -> Element {
    let state = use_context::<AppState>();
    let toasts = use_page(|p| {
        p.toasts
            .toasts()
            .iter()
            .map(|t| ToastView {
                id: t.id,
                dom_id: t.id.dom_id(),
                class: format!(
                    "fixed top-4 right-4 z-50 p-4 rounded-lg shadow-lg max-w-sm {} text-white",
                    t.severity.class()
                ),
                icon: t.severity.icon(),
                message: t.message.clone(),
            })
            .collect::<Vec<ToastView>>()
    });
    let toasts = toasts().unwrap_or_default();

    rsx! {
        for toast in toasts.into_iter() {
            div {
                key: "{toast.dom_id}",
                id: "{toast.dom_id}",
                class: "{toast.class}",
                div {
                    class: "flex items-center space-x-3",
                    div { class: "flex-shrink-0", "{toast.icon}" }
                    div {
                        class: "flex-1",
                        p { class: "text-sm font-medium", "{toast.message}" }
                    }
                    div {
                        class: "flex-shrink-0",
                        button {
                            class: "text-white hover:text-gray-200",
                            onclick: move |_| state.dispatch(Msg::NotificationDismissed(toast.id)),
                            "×"
                        }
                    }
                }
            }
        }
    }
}
