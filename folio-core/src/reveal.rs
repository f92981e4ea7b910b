//! One-time staggered entrance animations for `.section-reveal` elements.

use crate::animation::{Easing, Tween};
use crate::clock::Millis;
use crate::effect::Effect;
use serde::Serialize;

pub const REVEAL_CLASS: &str = "section-reveal";
pub const REVEALED_CLASS: &str = "revealed";
pub const STAGGER: Millis = Millis(100);
pub const REVEAL_DURATION: Millis = Millis(800);

/// Inline style a reveal element is rendered with: the first frame of the
/// entrance tween, so nothing shows before it plays.
pub const HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(30px);";

/// IntersectionObserver options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

pub fn reveal_selector(index: usize) -> String {
    format!(".{REVEAL_CLASS}[data-reveal-index=\"{index}\"]")
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealState {
    revealed: Vec<bool>,
}

impl RevealState {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Element `index` (document order among all observed elements) entered
    /// the viewport. Only the first intersection animates.
    pub fn intersect(&mut self, index: usize) -> Option<Effect> {
        let slot = self.revealed.get_mut(index)?;
        if *slot {
            return None;
        }
        *slot = true;
        let delay = Millis(STAGGER.as_u64() * index as u64);
        Some(Effect::animate(
            Tween::new(reveal_selector(index))
                .opacity([0.0, 1.0])
                .translate_y([30.0, 0.0])
                .duration(REVEAL_DURATION)
                .delay(delay)
                .easing(Easing::OutQuart),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_starts_from_the_hidden_style() {
        let mut state = RevealState::new(1);
        let Some(Effect::Animate { tween, .. }) = state.intersect(0) else {
            panic!("first intersection should animate");
        };
        assert_eq!(tween.opacity, Some(vec![0.0, 1.0]));
        assert_eq!(tween.translate_y, Some(vec![30.0, 0.0]));
        assert!(HIDDEN_STYLE.contains("opacity: 0;"));
        assert!(HIDDEN_STYLE.contains("translateY(30px)"));
    }

    #[test]
    fn delay_is_index_times_stagger() {
        let mut state = RevealState::new(5);
        for i in 0..5 {
            let Some(Effect::Animate { tween, .. }) = state.intersect(i) else {
                panic!("element {i} should animate");
            };
            assert_eq!(tween.delay, i as u64 * 100);
            assert_eq!(tween.translate_y, Some(vec![30.0, 0.0]));
        }
    }

    #[test]
    fn repeat_intersections_are_ignored() {
        let mut state = RevealState::new(2);
        assert!(state.intersect(1).is_some());
        assert!(state.intersect(1).is_none());
        assert!(state.is_revealed(1));
        assert!(!state.is_revealed(0));
        assert!(state.intersect(5).is_none());
    }

    #[test]
    fn observer_defaults() {
        let config = ObserverConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.root_margin, "0px 0px -50px 0px");
    }
}
