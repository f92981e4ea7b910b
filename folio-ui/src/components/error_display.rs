//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown in place of the page when its content could not be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "m-8 p-4 rounded-lg bg-red-900/40 border border-red-500 text-red-200",
            strong { "Could not load the page: " }
            "{props.message}"
        }
    }
}
