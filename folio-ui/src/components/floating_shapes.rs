//! Decorative shapes behind the hero.

use crate::state::use_page;
use dioxus::prelude::*;

/// The outer `.shape` carries the parallax offset; anime.js spins the inner
/// glyph.
#[component]
pub fn FloatingShapes() -> Element {
    let transforms = use_page(|p| {
        (0..p.shapes.len())
            .map(|i| p.shapes.transform(i))
            .collect::<Vec<String>>()
    });
    let transforms = transforms().unwrap_or_default();

    rsx! {
        div {
            class: "floating-shapes pointer-events-none absolute inset-0 overflow-hidden",
            for (i, transform) in transforms.into_iter().enumerate() {
                div {
                    key: "{i}",
                    id: "shape-{i}",
                    class: "shape shape-{i}",
                    style: "transform: {transform};",
                    div { class: "shape-glyph" }
                }
            }
        }
    }
}
