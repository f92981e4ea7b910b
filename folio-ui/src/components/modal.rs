//! Project detail dialogs.

use crate::dom;
use crate::state::{use_page, AppState};
use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use folio_core::Msg;

#[derive(Clone, PartialEq)]
struct ModalView {
    id: String,
    title: String,
    body: String,
    style: &'static str,
    overlay_id: String,
    close_id: String,
}

/// One overlay per modal in the content. Clicks bubble up to the overlay,
/// which reports whether it was itself the target.
#[component]
pub fn Modals() -> Element {
    let state = use_context::<AppState>();
    let modals = use_page(move |p| {
        let content = state.content.read();
        let views: Vec<ModalView> = content
            .iter()
            .flat_map(|c| c.modals.iter())
            .map(|m| ModalView {
                id: m.id.clone(),
                title: m.title.clone(),
                body: m.body.clone(),
                style: if p.modals.is_visible(&m.id) {
                    "display: block;"
                } else {
                    "display: none;"
                },
                overlay_id: m.id.clone(),
                close_id: m.id.clone(),
            })
            .collect();
        views
    });
    let modals = modals().unwrap_or_default();

    rsx! {
        for m in modals.into_iter() {
            div {
                key: "{m.id}",
                id: "{m.id}",
                class: "modal fixed inset-0 z-50 bg-black/70",
                style: m.style,
                onclick: move |evt: MouseEvent| {
                    let on_overlay = evt
                        .try_as_web_event()
                        .is_some_and(|e| dom::target_matches(&e, ".modal"));
                    state.dispatch(Msg::ModalClicked {
                        id: m.overlay_id.clone(),
                        on_overlay,
                    });
                },
                div {
                    class: "modal-content max-w-lg mx-auto mt-24 rounded-lg bg-primary p-6",
                    h3 { class: "text-2xl font-bold mb-4", "{m.title}" }
                    p { class: "text-gray-300", "{m.body}" }
                    button {
                        class: "mt-6 px-4 py-2 rounded bg-secondary",
                        onclick: move |_| state.close_modal(&m.close_id),
                        "Close"
                    }
                }
            }
        }
    }
}
