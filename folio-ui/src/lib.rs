//! Shared Dioxus components and JS library bridge for the portfolio site.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Typed.js, anime.js and ECharts via `js_sys::eval()`
//! - `dom`: `web-sys` listeners, timeouts, scrolling and the reveal observer
//! - `state`: `AppState`, which runs the `folio-core` page runtime inside a Dioxus signal
//! - `components`: the page's RSX components

pub mod components;
pub mod dom;
pub mod js_bridge;
pub mod state;
