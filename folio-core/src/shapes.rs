//! Decorative floating shapes: a looped bob-and-spin plus scroll parallax.

use crate::animation::{Easing, Tween};
use crate::clock::Millis;
use crate::effect::Effect;

pub const FLOAT_DURATION: Millis = Millis(6000);
pub const FLOAT_STAGGER: Millis = Millis(1000);

/// Selector of the animated glyph inside shape `index`. The outer `.shape`
/// element carries the parallax transform, so the two never fight over the
/// same `transform`.
pub fn glyph_selector(index: usize) -> String {
    format!("#shape-{index} .shape-glyph")
}

/// Parallax speed multiplier of shape `index`.
pub fn parallax_speed(index: usize) -> f64 {
    0.5 + index as f64 * 0.1
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeField {
    offsets: Vec<f64>,
}

impl ShapeField {
    pub fn new(count: usize) -> Self {
        Self {
            offsets: vec![0.0; count],
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offset(&self, index: usize) -> f64 {
        self.offsets.get(index).copied().unwrap_or(0.0)
    }

    pub fn transform(&self, index: usize) -> String {
        format!("translateY({}px)", self.offset(index))
    }

    /// Infinite float animation for every shape.
    pub fn float(&self) -> Vec<Effect> {
        (0..self.offsets.len())
            .map(|i| {
                Effect::animate(
                    Tween::new(glyph_selector(i))
                        .translate_y([0.0, -20.0, 0.0])
                        .rotate([0.0, 180.0, 360.0])
                        .duration(FLOAT_DURATION)
                        .delay(Millis(FLOAT_STAGGER.as_u64() * i as u64))
                        .easing(Easing::InOutSine)
                        .looped(),
                )
            })
            .collect()
    }

    pub fn scrolled(&mut self, scroll_y: f64) {
        for (i, offset) in self.offsets.iter_mut().enumerate() {
            *offset = scroll_y * parallax_speed(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_scales_with_index() {
        let mut field = ShapeField::new(3);
        field.scrolled(100.0);
        assert_eq!(field.offset(0), 50.0);
        assert!((field.offset(2) - 70.0).abs() < 1e-9);
        assert_eq!(field.transform(0), "translateY(50px)");
        assert_eq!(field.offset(9), 0.0);
    }

    #[test]
    fn float_loops_with_stagger() {
        let effects = ShapeField::new(2).float();
        let Effect::Animate { tween, then: None } = &effects[1] else {
            panic!("float should animate");
        };
        assert!(tween.looped);
        assert_eq!(tween.delay, 1000);
        assert_eq!(tween.rotate, Some(vec![0.0, 180.0, 360.0]));
        assert_eq!(tween.settles_after(), None);
    }
}
