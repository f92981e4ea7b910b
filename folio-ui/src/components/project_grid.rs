//! Filter buttons and the project cards they show and hide.

use crate::state::{use_page, AppState};
use dioxus::prelude::*;
use folio_core::Msg;

#[derive(Clone, PartialEq)]
struct CardView {
    id: String,
    title: String,
    summary: String,
    category: String,
    tags: Vec<String>,
    modal: Option<String>,
    class: &'static str,
}

#[component]
pub fn ProjectGrid() -> Element {
    let state = use_context::<AppState>();
    let grid = use_page(move |p| {
        let loaded = state.content.read();
        let Some(content) = loaded.as_ref() else {
            return (Vec::new(), Vec::new());
        };
        let buttons: Vec<(String, String, &'static str)> = content
            .filters
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let class = if p.filter.is_active(i) {
                    "filter-btn active"
                } else {
                    "filter-btn"
                };
                (f.key.clone(), f.label.clone(), class)
            })
            .collect();
        let cards: Vec<CardView> = content
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| CardView {
                id: project.id.clone(),
                title: project.title.clone(),
                summary: project.summary.clone(),
                category: project.category.clone(),
                tags: project.tags.clone(),
                modal: project.modal.clone(),
                class: if p.filter.is_card_visible(i) {
                    "project-card rounded-lg bg-white/5 p-6"
                } else {
                    "project-card rounded-lg bg-white/5 p-6 hidden"
                },
            })
            .collect();
        (buttons, cards)
    });
    let (buttons, cards) = grid().unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-wrap justify-center gap-3 mb-8",
            for (i, (key, label, class)) in buttons.into_iter().enumerate() {
                button {
                    key: "{key}",
                    class: class,
                    "data-filter": "{key}",
                    onclick: move |_| state.dispatch(Msg::FilterClicked(i)),
                    "{label}"
                }
            }
        }
        div {
            class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
            for (i, card) in cards.into_iter().enumerate() {
                div {
                    key: "{card.id}",
                    class: card.class,
                    "data-category": "{card.category}",
                    "data-card-index": "{i}",
                    h3 { class: "text-xl font-semibold mb-2", "{card.title}" }
                    p { class: "text-gray-300 mb-4", "{card.summary}" }
                    div {
                        class: "flex flex-wrap gap-2",
                        for tag in card.tags.iter() {
                            span { class: "text-xs px-2 py-1 rounded bg-secondary/30", "{tag}" }
                        }
                    }
                    if let Some(modal_id) = card.modal.clone() {
                        button {
                            class: "mt-4 text-secondary underline",
                            onclick: move |_| state.open_modal(&modal_id),
                            "Details"
                        }
                    }
                }
            }
        }
    }
}
