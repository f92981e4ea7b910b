//! Modal dialogs.
//!
//! `open`/`close` animate the `.modal-content` box; a click on the overlay
//! or Escape hides it straight away.

use crate::animation::{Easing, Tween};
use crate::clock::Millis;
use crate::effect::{Effect, Msg};

pub const OPEN_DURATION: Millis = Millis(400);
pub const CLOSE_DURATION: Millis = Millis(300);

pub fn content_selector(id: &str) -> String {
    format!("#{id} .modal-content")
}

#[derive(Debug, Clone, PartialEq)]
struct Modal {
    id: String,
    visible: bool,
    closing: bool,
    generation: u64,
}

/// Modals in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    modals: Vec<Modal>,
}

impl ModalState {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            modals: ids
                .into_iter()
                .map(|id| Modal {
                    id,
                    visible: false,
                    closing: false,
                    generation: 0,
                })
                .collect(),
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.find(id).is_some_and(|m| m.visible)
    }

    /// Ids of visible modals, in document order.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.modals
            .iter()
            .filter(|m| m.visible)
            .map(|m| m.id.as_str())
    }

    fn find(&self, id: &str) -> Option<&Modal> {
        self.modals.iter().find(|m| m.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Modal> {
        self.modals.iter_mut().find(|m| m.id == id)
    }

    pub fn open(&mut self, id: &str) -> Option<Effect> {
        let modal = self.find_mut(id)?;
        modal.visible = true;
        modal.closing = false;
        modal.generation += 1;
        Some(Effect::animate(
            Tween::new(content_selector(id))
                .scale([0.8, 1.0])
                .opacity([0.0, 1.0])
                .duration(OPEN_DURATION)
                .easing(Easing::OutQuart),
        ))
    }

    /// Animate the content out, then hide the overlay.
    pub fn close(&mut self, id: &str) -> Option<Effect> {
        let modal = self.find_mut(id)?;
        if !modal.visible || modal.closing {
            return None;
        }
        modal.closing = true;
        modal.generation += 1;
        Some(Effect::animate_then(
            Tween::new(content_selector(id))
                .scale([1.0, 0.8])
                .opacity([1.0, 0.0])
                .duration(CLOSE_DURATION)
                .easing(Easing::InQuart),
            Msg::ModalFadedOut {
                id: id.to_string(),
                generation: modal.generation,
            },
        ))
    }

    pub fn faded_out(&mut self, id: &str, generation: u64) {
        if let Some(modal) = self.find_mut(id) {
            if modal.closing && modal.generation == generation {
                modal.visible = false;
                modal.closing = false;
            }
        }
    }

    /// A click somewhere in the modal. Only a click on the overlay itself
    /// hides it; clicks inside the content box are left alone.
    pub fn clicked(&mut self, id: &str, on_overlay: bool) {
        if !on_overlay {
            return;
        }
        if let Some(modal) = self.find_mut(id) {
            hide(modal);
        }
    }

    /// Hide the first visible modal. Returns its id.
    pub fn escape(&mut self) -> Option<String> {
        let modal = self.modals.iter_mut().find(|m| m.visible)?;
        hide(modal);
        Some(modal.id.clone())
    }
}

fn hide(modal: &mut Modal) {
    modal.visible = false;
    modal.closing = false;
    modal.generation += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ModalState {
        ModalState::new(["first".to_string(), "second".to_string()])
    }

    #[test]
    fn open_then_close_hides_after_fade() {
        let mut modals = state();
        assert!(matches!(
            modals.open("first"),
            Some(Effect::Animate { then: None, .. })
        ));
        assert!(modals.is_visible("first"));

        let Some(Effect::Animate { tween, then: Some(Msg::ModalFadedOut { id, generation }) }) =
            modals.close("first")
        else {
            panic!("close should animate then report back");
        };
        assert_eq!(tween.target, "#first .modal-content");
        assert_eq!(tween.duration, 300);
        assert!(modals.is_visible("first"));

        modals.faded_out(&id, generation);
        assert!(!modals.is_visible("first"));
    }

    #[test]
    fn reopen_during_close_ignores_stale_fade() {
        let mut modals = state();
        modals.open("first");
        let Some(Effect::Animate { then: Some(Msg::ModalFadedOut { generation, .. }), .. }) =
            modals.close("first")
        else {
            panic!("close should animate");
        };
        modals.open("first");
        modals.faded_out("first", generation);
        assert!(modals.is_visible("first"));
    }

    #[test]
    fn backdrop_click_closes_only_that_modal() {
        let mut modals = state();
        modals.open("first");
        modals.open("second");
        modals.clicked("second", true);
        assert!(modals.is_visible("first"));
        assert!(!modals.is_visible("second"));
    }

    #[test]
    fn click_inside_content_keeps_modal_open() {
        let mut modals = state();
        modals.open("first");
        modals.clicked("first", false);
        assert!(modals.is_visible("first"));
        assert_eq!(modals.visible().collect::<Vec<_>>(), vec!["first"]);
    }

    #[test]
    fn escape_closes_first_visible_in_document_order() {
        let mut modals = state();
        modals.open("second");
        modals.open("first");
        assert_eq!(modals.escape().as_deref(), Some("first"));
        assert_eq!(modals.visible().collect::<Vec<_>>(), vec!["second"]);
        assert_eq!(modals.escape().as_deref(), Some("second"));
        assert_eq!(modals.escape(), None);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut modals = state();
        assert!(modals.open("nope").is_none());
        assert!(modals.close("first").is_none());
        modals.clicked("nope", true);
    }
}
