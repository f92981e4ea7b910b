//! Hero typewriter settings, serialized as Typed.js options.

use serde::Serialize;

/// Selector of the element Typed.js types into.
pub const TYPED_TARGET: &str = "#typed-text";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypewriterConfig {
    pub strings: Vec<String>,
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub show_cursor: bool,
    pub cursor_char: String,
}

impl TypewriterConfig {
    pub fn new(strings: Vec<String>) -> Self {
        Self {
            strings,
            type_speed: 50,
            back_speed: 30,
            back_delay: 2000,
            looped: true,
            show_cursor: true,
            cursor_char: "|".to_string(),
        }
    }

    pub fn to_options_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_use_typed_js_names() {
        let json = TypewriterConfig::new(vec!["Problem Solver".into()]).to_options_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["typeSpeed"], 50);
        assert_eq!(value["backSpeed"], 30);
        assert_eq!(value["backDelay"], 2000);
        assert_eq!(value["loop"], true);
        assert_eq!(value["cursorChar"], "|");
    }
}
