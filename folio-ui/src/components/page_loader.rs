//! Full-screen loading overlay.

use crate::state::use_page;
use dioxus::prelude::*;
use folio_core::loader::LOADER_ID;

/// Rendered while the loader is visible or fading out.
#[component]
pub fn PageLoader() -> Element {
    let present = use_page(|p| p.loader.is_present());
    let present = present().unwrap_or(false);

    rsx! {
        if present {
            div {
                id: LOADER_ID,
                class: "fixed inset-0 bg-primary z-50 flex items-center justify-center",
                div {
                    class: "text-center",
                    div { class: "animate-spin rounded-full h-32 w-32 border-b-2 border-secondary" }
                    p { class: "mt-4 text-xl", "Loading Portfolio..." }
                }
            }
        }
    }
}
