//! Full-screen loading overlay shown after `window` load.

use crate::animation::{Easing, Tween};
use crate::clock::Millis;
use crate::effect::{Effect, Msg};

pub const LOADER_ID: &str = "page-loader";
pub const LOADER_HOLD: Millis = Millis(1500);
pub const LOADER_FADE: Millis = Millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderState {
    #[default]
    Absent,
    Visible,
    Fading,
}

impl LoaderState {
    pub fn is_present(self) -> bool {
        self != LoaderState::Absent
    }

    pub fn window_loaded(&mut self) -> Option<Effect> {
        if *self != LoaderState::Absent {
            return None;
        }
        *self = LoaderState::Visible;
        Some(Effect::Schedule {
            after: LOADER_HOLD,
            msg: Msg::LoaderElapsed,
        })
    }

    pub fn elapsed(&mut self) -> Option<Effect> {
        if *self != LoaderState::Visible {
            return None;
        }
        *self = LoaderState::Fading;
        Some(Effect::animate_then(
            Tween::new(format!("#{LOADER_ID}"))
                .opacity([1.0, 0.0])
                .duration(LOADER_FADE)
                .easing(Easing::OutQuart),
            Msg::LoaderFaded,
        ))
    }

    pub fn faded(&mut self) {
        *self = LoaderState::Absent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let mut loader = LoaderState::default();
        assert!(loader.elapsed().is_none());
        assert!(loader.window_loaded().is_some());
        assert!(loader.is_present());
        assert!(loader.window_loaded().is_none());
        assert!(matches!(
            loader.elapsed(),
            Some(Effect::Animate { then: Some(Msg::LoaderFaded), .. })
        ));
        loader.faded();
        assert!(!loader.is_present());
    }
}
