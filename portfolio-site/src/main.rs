//! Personal portfolio page.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/portfolio.json` into `OUT_DIR`.
//! 2. `include_str!` embeds it in the WASM binary.
//! 3. On mount: parse the content and build the page runtime (`AppState::new`).
//! 4. After the first render: run the initializers (typewriter, chart, reveal
//!    observer, floating shapes) and attach the window listeners.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use folio_core::skills::SKILLS;
use folio_ui::components::{
    ContactForm, ErrorDisplay, Hero, Modals, NavBar, PageLoader, ProjectGrid, RevealSection,
    SectionHeader, SkillsChart, ToastStack,
};
use folio_ui::state::AppState;

const PORTFOLIO_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/portfolio.json"));

const TYPED_JS: &str = "https://cdn.jsdelivr.net/npm/typed.js@2.1.0/dist/typed.umd.js";
const ANIME_JS: &str = "https://cdn.jsdelivr.net/npm/animejs@3.2.2/lib/anime.min.js";
const ECHARTS_JS: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.0/dist/echarts.min.js";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting portfolio site");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("portfolio-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(PORTFOLIO_JSON));

    // Runs once, after the sections exist in the document.
    use_effect(move || {
        if state.content.peek().is_some() {
            state.boot();
        }
    });

    let content = state.content.read().clone();
    let error = state.error_msg.read().clone();

    rsx! {
        document::Script { src: TYPED_JS }
        document::Script { src: ANIME_JS }
        document::Script { src: ECHARTS_JS }

        if let Some(err) = error {
            ErrorDisplay { message: err }
        }

        if let Some(content) = content {
            PageLoader {}
            NavBar {}
            ToastStack {}
            Modals {}

            main {
                class: "bg-primary text-white",
                for (index, section) in content.sections.iter().enumerate() {
                    RevealSection {
                        key: "{section.id}",
                        id: section.id.clone(),
                        index,
                        SectionBody {
                            id: section.id.clone(),
                            label: section.label.clone(),
                            owner: content.owner.clone(),
                        }
                    }
                }
            }
        }
    }
}

/// Body of one section, picked by section id.
#[component]
fn SectionBody(id: String, label: String, owner: String) -> Element {
    match id.as_str() {
        "home" => rsx! { Hero { owner } },
        "about" => rsx! {
            div {
                class: "max-w-3xl mx-auto px-4",
                SectionHeader { title: label }
                p {
                    class: "text-lg text-gray-300 leading-relaxed",
                    "I study artificial intelligence and enjoy turning data into tools people actually use, \
                     from small machine learning experiments to mobile apps."
                }
            }
        },
        "skills" => rsx! {
            div {
                class: "max-w-4xl mx-auto px-4",
                SectionHeader {
                    title: label,
                    subtitle: format!("{} areas, scored out of 100", SKILLS.len()),
                }
                SkillsChart { min_height: 450 }
            }
        },
        "projects" => rsx! {
            div {
                class: "max-w-6xl mx-auto px-4",
                SectionHeader { title: label }
                ProjectGrid {}
            }
        },
        "contact" => rsx! {
            div {
                class: "max-w-3xl mx-auto px-4",
                SectionHeader { title: label, subtitle: "Questions, ideas or opportunities are all welcome.".to_string() }
                ContactForm {}
            }
        },
        _ => rsx! {
            div {
                class: "max-w-3xl mx-auto px-4",
                SectionHeader { title: label }
            }
        },
    }
}
