//! Page sections that fade in the first time they scroll into view.

use crate::state::use_page;
use dioxus::prelude::*;
use folio_core::reveal::{HIDDEN_STYLE, REVEALED_CLASS, REVEAL_CLASS};

#[derive(Props, Clone, PartialEq)]
pub struct RevealSectionProps {
    /// DOM id, the target of nav links
    pub id: String,
    /// Position among all reveal elements; sets the stagger delay
    pub index: usize,
    pub children: Element,
}

/// The inline style never changes after the first render, so the
/// animation's own inline writes are left in place.
#[component]
pub fn RevealSection(props: RevealSectionProps) -> Element {
    let index = props.index;
    let revealed = use_page(move |p| p.reveal.is_revealed(index));
    let revealed = revealed().unwrap_or(false);
    let class = if revealed {
        format!("{REVEAL_CLASS} {REVEALED_CLASS} py-20")
    } else {
        format!("{REVEAL_CLASS} py-20")
    };

    rsx! {
        section {
            id: "{props.id}",
            class: "{class}",
            style: HIDDEN_STYLE,
            "data-reveal-index": "{props.index}",
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Heading with an optional one-line subtitle.
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            class: "text-center mb-10",
            h2 { class: "text-3xl font-bold", "{props.title}" }
            if !props.subtitle.is_empty() {
                p { class: "mt-2 text-gray-400", "{props.subtitle}" }
            }
        }
    }
}
