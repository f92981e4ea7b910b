//! Browser plumbing through `web-sys`: clock, timeouts, window listeners,
//! scrolling and the reveal observer.
//!
//! Closures handed to the browser live for the whole page and are leaked
//! with `forget()`.

use folio_core::reveal::{ObserverConfig, REVEAL_CLASS};
use folio_core::{Clock, Millis};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Wall clock backed by `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebClock;

impl Clock for WebClock {
    fn now(&self) -> Millis {
        Millis(js_sys::Date::now().max(0.0) as u64)
    }
}

/// Run `f` once after `after`.
pub fn set_timeout(after: Millis, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let ms = i32::try_from(after.as_u64()).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
    {
        log::warn!("[folio] setTimeout failed: {:?}", e);
    }
}

/// Attach a listener to `window` for the rest of the page's life.
pub fn listen_window(event: &str, f: impl FnMut(web_sys::Event) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(f);
    match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        Ok(()) => callback.forget(),
        Err(e) => log::warn!("[folio] could not listen for '{}': {:?}", event, e),
    }
}

/// Call `f` whenever Escape is pressed.
pub fn on_escape(mut f: impl FnMut() + 'static) {
    listen_window("keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            if key.key() == "Escape" {
                f();
            }
        }
    });
}

/// Call `f` with the vertical scroll offset on every scroll.
pub fn on_scroll(mut f: impl FnMut(f64) + 'static) {
    listen_window("scroll", move |_| {
        if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
            f(y);
        }
    });
}

/// Call `f` once the window has loaded; right away if it already has.
pub fn on_window_load(f: impl FnOnce() + 'static) {
    let complete = web_sys::window()
        .and_then(|w| w.document())
        .is_some_and(|d| d.ready_state() == "complete");
    if complete {
        f();
        return;
    }
    let mut f = Some(f);
    listen_window("load", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

/// True if the event's own target (not an ancestor it bubbled through)
/// matches the CSS `selector`.
pub fn target_matches(event: &web_sys::Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.matches(selector).ok())
        .unwrap_or(false)
}

/// Smooth-scroll the element with `id` to the top of the viewport.
pub fn scroll_into_view(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Observe every reveal element and call `on_enter` with its
/// `data-reveal-index` each time one starts intersecting.
pub fn observe_reveals(config: &ObserverConfig, on_enter: impl Fn(usize) + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let index = entry
                    .target()
                    .get_attribute("data-reveal-index")
                    .and_then(|v| v.parse::<usize>().ok());
                if let Some(index) = index {
                    on_enter(index);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("[folio] IntersectionObserver unavailable: {:?}", e);
                return;
            }
        };
    callback.forget();

    let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) else {
        return;
    };
    let mut observed = 0;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&element);
            observed += 1;
        }
    }
    log::info!("[folio] observing {} reveal elements", observed);
}
