//! Hero banner with the typewriter line.

use crate::components::FloatingShapes;
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    pub owner: String,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "relative min-h-screen flex flex-col items-center justify-center text-center",
            FloatingShapes {}
            h1 { class: "text-5xl font-bold mb-4", "Hi, I'm {props.owner}" }
            p {
                class: "text-2xl h-8",
                span { id: "typed-text" }
            }
            a {
                class: "mt-8 px-6 py-3 rounded-lg bg-secondary",
                href: "#projects",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    state.scroll_to_section("projects");
                },
                "View my work"
            }
        }
    }
}
