//! Project filter buttons and card visibility.
//!
//! Every filter pass bumps each card's generation. A fade-out completion
//! carries the generation it was started under and is dropped if the card
//! has moved on since, so a card that is re-selected while fading out is
//! never hidden after it has been shown again.

use crate::animation::{Easing, Tween};
use crate::clock::Millis;
use crate::content::FILTER_ALL;
use crate::effect::{Effect, Msg};

pub const SHOW_DURATION: Millis = Millis(600);
pub const HIDE_DURATION: Millis = Millis(400);

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub category: String,
    pub visible: bool,
    generation: u64,
}

impl Card {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            visible: true,
            generation: 0,
        }
    }

    fn matches(&self, filter: &str) -> bool {
        filter == FILTER_ALL || self.category == filter
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Filter key of each button, in button order.
    buttons: Vec<String>,
    active: Option<usize>,
    cards: Vec<Card>,
}

/// Selector of the card at `index`.
pub fn card_selector(index: usize) -> String {
    format!(".project-card[data-card-index=\"{index}\"]")
}

impl FilterState {
    pub fn new(buttons: Vec<String>, cards: Vec<Card>) -> Self {
        let active = buttons.iter().position(|b| b == FILTER_ALL);
        Self {
            buttons,
            active,
            cards,
        }
    }

    pub fn buttons(&self) -> &[String] {
        &self.buttons
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active_filter(&self) -> Option<&str> {
        self.active.map(|i| self.buttons[i].as_str())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_card_visible(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|c| c.visible)
    }

    /// Activate the button at `index` and re-evaluate every card.
    pub fn click(&mut self, index: usize) -> Vec<Effect> {
        let Some(filter) = self.buttons.get(index).cloned() else {
            return Vec::new();
        };
        self.active = Some(index);
        log::debug!("[folio] filter: '{}'", filter);

        self.cards
            .iter_mut()
            .enumerate()
            .map(|(i, card)| {
                card.generation += 1;
                if card.matches(&filter) {
                    card.visible = true;
                    Effect::animate(
                        Tween::new(card_selector(i))
                            .opacity([0.0, 1.0])
                            .scale([0.8, 1.0])
                            .duration(SHOW_DURATION)
                            .easing(Easing::OutQuart),
                    )
                } else {
                    Effect::animate_then(
                        Tween::new(card_selector(i))
                            .opacity([1.0, 0.0])
                            .scale([1.0, 0.8])
                            .duration(HIDE_DURATION)
                            .easing(Easing::InQuart),
                        Msg::CardFadedOut {
                            card: i,
                            generation: card.generation,
                        },
                    )
                }
            })
            .collect()
    }

    /// A fade-out finished; hide the card unless a later pass claimed it.
    pub fn faded_out(&mut self, card: usize, generation: u64) {
        if let Some(card) = self.cards.get_mut(card) {
            if card.generation == generation {
                card.visible = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FilterState {
        let buttons = ["all", "ml", "data", "mobile"].map(String::from).to_vec();
        let cards = ["ml", "data", "ml", "mobile"].into_iter().map(Card::new).collect();
        FilterState::new(buttons, cards)
    }

    /// Deliver every fade-out completion, as the host would once anime.js
    /// finishes.
    fn settle(state: &mut FilterState, effects: Vec<Effect>) {
        for effect in effects {
            if let Effect::Animate {
                then: Some(Msg::CardFadedOut { card, generation }),
                ..
            } = effect
            {
                state.faded_out(card, generation);
            }
        }
    }

    #[test]
    fn starts_on_all_with_every_card_visible() {
        let state = state();
        assert_eq!(state.active_filter(), Some("all"));
        assert!((0..4).all(|i| state.is_card_visible(i)));
    }

    #[test]
    fn settled_visibility_matches_filter() {
        let mut state = state();
        for button in [1, 2, 3, 0, 2] {
            let effects = state.click(button);
            settle(&mut state, effects);
            let filter = state.active_filter().unwrap().to_string();
            for (i, card) in state.cards().iter().enumerate() {
                assert_eq!(
                    state.is_card_visible(i),
                    filter == FILTER_ALL || card.category == filter,
                    "card {i} under filter {filter}"
                );
            }
        }
    }

    #[test]
    fn one_button_active_at_a_time() {
        let mut state = state();
        state.click(2);
        let active: Vec<usize> = (0..4).filter(|i| state.is_active(*i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn reselect_during_fade_out_keeps_card_visible() {
        let mut state = state();
        // "data" starts fading out the ml cards...
        let stale = state.click(2);
        // ...and "ml" is clicked before the fade finishes.
        let fresh = state.click(1);
        settle(&mut state, stale);
        settle(&mut state, fresh);

        assert!(state.is_card_visible(0));
        assert!(state.is_card_visible(2));
        assert!(!state.is_card_visible(1));
    }

    #[test]
    fn animations_use_show_and_hide_timings() {
        let mut state = state();
        let effects = state.click(1);
        let Effect::Animate { tween, then: None } = &effects[0] else {
            panic!("ml card should animate in");
        };
        assert_eq!(tween.duration, 600);
        assert_eq!(tween.easing, Easing::OutQuart);
        let Effect::Animate { tween, then: Some(_) } = &effects[1] else {
            panic!("data card should animate out");
        };
        assert_eq!(tween.duration, 400);
        assert_eq!(tween.target, ".project-card[data-card-index=\"1\"]");
    }

    #[test]
    fn unknown_button_is_ignored() {
        let mut state = state();
        assert!(state.click(7).is_empty());
        assert_eq!(state.active_filter(), Some("all"));
    }
}
