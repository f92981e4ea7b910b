//! Animation requests in the shape anime.js expects.
//!
//! A [`Tween`] serializes directly to an anime.js parameter object, e.g.
//! `{"targets":"#toast-1","opacity":[0,1],"duration":400,"easing":"easeOutQuart"}`.

use crate::clock::Millis;
use serde::Serialize;

/// Easing curves used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Easing {
    #[serde(rename = "easeOutQuart")]
    OutQuart,
    #[serde(rename = "easeInQuart")]
    InQuart,
    #[serde(rename = "easeInOutSine")]
    InOutSine,
    #[serde(rename = "linear")]
    Linear,
}

/// One anime.js animation over a CSS selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    #[serde(rename = "targets")]
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<Vec<f64>>,
    pub duration: u64,
    pub delay: u64,
    pub easing: Easing,
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl Tween {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            opacity: None,
            scale: None,
            translate_x: None,
            translate_y: None,
            rotate: None,
            duration: 0,
            delay: 0,
            easing: Easing::Linear,
            looped: false,
        }
    }

    pub fn opacity(mut self, keyframes: impl Into<Vec<f64>>) -> Self {
        self.opacity = Some(keyframes.into());
        self
    }

    pub fn scale(mut self, keyframes: impl Into<Vec<f64>>) -> Self {
        self.scale = Some(keyframes.into());
        self
    }

    pub fn translate_x(mut self, keyframes: impl Into<Vec<f64>>) -> Self {
        self.translate_x = Some(keyframes.into());
        self
    }

    pub fn translate_y(mut self, keyframes: impl Into<Vec<f64>>) -> Self {
        self.translate_y = Some(keyframes.into());
        self
    }

    pub fn rotate(mut self, keyframes: impl Into<Vec<f64>>) -> Self {
        self.rotate = Some(keyframes.into());
        self
    }

    pub fn duration(mut self, duration: Millis) -> Self {
        self.duration = duration.as_u64();
        self
    }

    pub fn delay(mut self, delay: Millis) -> Self {
        self.delay = delay.as_u64();
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn looped(mut self) -> Self {
        self.looped = true;
        self
    }

    /// Time from start until the animation settles, or `None` if it loops
    /// forever.
    pub fn settles_after(&self) -> Option<Millis> {
        if self.looped {
            None
        } else {
            Some(Millis(self.delay + self.duration))
        }
    }

    /// anime.js parameter object as JSON.
    pub fn to_params_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Handle for an in-flight animation whose completion the host reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(pub u64);
