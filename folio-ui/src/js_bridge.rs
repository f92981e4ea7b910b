//! Typed wrappers around the page's JS libraries via `js_sys::eval()`.
//!
//! Typed.js, anime.js and ECharts are loaded by `<script>` tags in the host
//! page, possibly after the WASM module starts. `assets/js/folio-bridge.js`
//! defines small global helpers over them; this module loads that file once
//! and calls the helpers with JSON-serialized arguments.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

static BRIDGE_JS: &str = include_str!("../assets/js/folio-bridge.js");

/// Quote `s` as a JS string literal.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[folio] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the bridge helpers at global scope and promote them to
/// `window.*`. Call once at app startup.
pub fn init_bridge() {
    let store_js = format!("window.__folioBridgeScript = {};", js_string(BRIDGE_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__folioBridgeReady) return;
            (0, eval)(window.__folioBridgeScript);
            delete window.__folioBridgeScript;
            if (typeof folioStartTypewriter !== 'undefined') window.folioStartTypewriter = folioStartTypewriter;
            if (typeof folioRenderRadar !== 'undefined') window.folioRenderRadar = folioRenderRadar;
            if (typeof folioResizeRadar !== 'undefined') window.folioResizeRadar = folioResizeRadar;
            if (typeof folioAnimate !== 'undefined') window.folioAnimate = folioAnimate;
            window.__folioBridgeReady = true;
        })();
    "#;
    call_js(init_js);
}

/// JS that polls every 100ms until `ready` is truthy, then runs `body` once.
fn when_ready(ready: &str, body: &str) -> String {
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__folioBridgeReady && ({ready})) {{
                    clearInterval(poll);
                    try {{ {body} }} catch(e) {{ console.error('[folio] bridge error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Start the Typed.js effect on `selector` once Typed.js is loaded.
pub fn start_typewriter(selector: &str, options_json: &str) {
    call_js(&when_ready(
        "typeof Typed !== 'undefined'",
        &format!(
            "window.folioStartTypewriter({}, {});",
            js_string(selector),
            js_string(options_json)
        ),
    ));
}

/// Render the radar chart into `container_id` once ECharts is loaded.
/// Does nothing if the container is not in the document.
pub fn render_radar_chart(container_id: &str, option_json: &str) {
    call_js(&when_ready(
        "typeof echarts !== 'undefined'",
        &format!(
            "window.folioRenderRadar({}, {});",
            js_string(container_id),
            js_string(option_json)
        ),
    ));
}

pub fn resize_chart(container_id: &str) {
    call_js(&format!(
        "if (window.folioResizeRadar) window.folioResizeRadar({});",
        js_string(container_id)
    ));
}

/// Start an anime.js animation without waiting for it (looping tweens).
pub fn start_animation(params_json: &str) {
    call_js(&when_ready(
        "typeof anime !== 'undefined'",
        &format!("window.folioAnimate({});", js_string(params_json)),
    ));
}

/// JS expression for a promise over one animation run.
fn animate_call(params_json: &str) -> String {
    format!(
        "(typeof window.folioAnimate === 'function') ? window.folioAnimate({}) : Promise.resolve()",
        js_string(params_json)
    )
}

/// Run an anime.js animation and resolve when it finishes. If anime.js has
/// not loaded yet the helper waits for it, so early tweens still play.
pub async fn animate(params_json: &str) {
    let code = animate_call(params_json);
    let promise = match js_sys::eval(&code).map(|v| v.dyn_into::<js_sys::Promise>()) {
        Ok(Ok(promise)) => promise,
        _ => return,
    };
    if let Err(e) = JsFuture::from(promise).await {
        log::warn!("[folio] animation rejected: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's \"x\"\n"), r#""it's \"x\"\n""#);
    }

    #[test]
    fn when_ready_guards_on_bridge_and_condition() {
        let js = when_ready("typeof anime !== 'undefined'", "go();");
        assert!(js.contains("window.__folioBridgeReady && (typeof anime !== 'undefined')"));
        assert!(js.contains("try { go(); }"));
    }

    fn helper_body(name: &str) -> &'static str {
        let start = BRIDGE_JS
            .find(&format!("function {name}("))
            .expect("helper is defined");
        let rest = &BRIDGE_JS[start..];
        let end = rest[1..].find("\nfunction ").map_or(rest.len(), |i| i + 1);
        &rest[..end]
    }

    #[test]
    fn animate_waits_for_anime_instead_of_skipping() {
        let body = helper_body("folioAnimate");
        assert!(body.contains("setInterval"));
        assert!(body.contains("clearInterval(poll)"));
        assert!(!body.contains("typeof anime === 'undefined') return Promise.resolve()"));
        assert!(animate_call("{}").contains("window.folioAnimate(\"{}\")"));
    }

    #[test]
    fn every_helper_is_defined() {
        for name in ["folioStartTypewriter", "folioRenderRadar", "folioResizeRadar", "folioAnimate"] {
            assert!(!helper_body(name).is_empty());
        }
    }
}
