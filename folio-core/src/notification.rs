//! Toast notifications.
//!
//! A toast slides in, lingers for [`LINGER`], slides out and is removed.
//! Dismissing it by hand removes it at once; the expiry that is still
//! scheduled then finds nothing and does nothing.

use crate::animation::{Easing, Tween};
use crate::clock::Millis;
use crate::effect::{Effect, Msg};
use std::fmt;

pub const ENTER_DURATION: Millis = Millis(400);
pub const LINGER: Millis = Millis(5000);
pub const EXIT_DURATION: Millis = Millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Background utility class.
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-600",
            Severity::Error => "bg-red-600",
            Severity::Info => "bg-blue-600",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

impl ToastId {
    pub fn dom_id(self) -> String {
        format!("toast-{}", self.0)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn show(&mut self, message: String, severity: Severity) -> (ToastId, Vec<Effect>) {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        log::info!("[folio] {}: {:?} '{}'", id, severity, message);
        self.toasts.push(Toast {
            id,
            message,
            severity,
            phase: ToastPhase::Entering,
        });

        let effects = vec![
            Effect::animate_then(
                Tween::new(format!("#{}", id.dom_id()))
                    .translate_x([300.0, 0.0])
                    .opacity([0.0, 1.0])
                    .duration(ENTER_DURATION)
                    .easing(Easing::OutQuart),
                Msg::NotificationEntered(id),
            ),
            Effect::Schedule {
                after: LINGER,
                msg: Msg::NotificationExpired(id),
            },
        ];
        (id, effects)
    }

    pub fn entered(&mut self, id: ToastId) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            if toast.phase == ToastPhase::Entering {
                toast.phase = ToastPhase::Shown;
            }
        }
    }

    /// Linger time is over: slide out, then remove.
    pub fn expire(&mut self, id: ToastId) -> Option<Effect> {
        let toast = self.toasts.iter_mut().find(|t| t.id == id)?;
        if toast.phase == ToastPhase::Leaving {
            return None;
        }
        toast.phase = ToastPhase::Leaving;
        Some(Effect::animate_then(
            Tween::new(format!("#{}", id.dom_id()))
                .translate_x([0.0, 300.0])
                .opacity([1.0, 0.0])
                .duration(EXIT_DURATION)
                .easing(Easing::InQuart),
            Msg::NotificationFadedOut(id),
        ))
    }

    /// Remove a toast if it is still there.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_defaults_to_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Success.class(), "bg-green-600");
        assert_eq!(Severity::Error.icon(), "✗");
    }

    #[test]
    fn show_animates_in_and_schedules_expiry() {
        let mut stack = ToastStack::default();
        let (id, effects) = stack.show("hi".into(), Severity::Info);
        assert_eq!(stack.toasts()[0].phase, ToastPhase::Entering);
        assert!(matches!(
            &effects[0],
            Effect::Animate { tween, then: Some(Msg::NotificationEntered(t)) }
                if tween.target == "#toast-0" && *t == id
        ));
        assert_eq!(
            effects[1],
            Effect::Schedule {
                after: Millis(5000),
                msg: Msg::NotificationExpired(id)
            }
        );
    }

    #[test]
    fn expire_after_dismiss_is_a_no_op() {
        let mut stack = ToastStack::default();
        let (id, _) = stack.show("bye".into(), Severity::Error);
        assert!(stack.remove(id));
        assert!(stack.expire(id).is_none());
        assert!(!stack.remove(id));
    }

    #[test]
    fn expire_runs_once() {
        let mut stack = ToastStack::default();
        let (id, _) = stack.show("once".into(), Severity::Success);
        assert!(stack.expire(id).is_some());
        assert_eq!(stack.toasts()[0].phase, ToastPhase::Leaving);
        assert!(stack.expire(id).is_none());
    }

    #[test]
    fn phases_run_entering_shown_leaving() {
        let mut stack = ToastStack::default();
        let (id, _) = stack.show("hello".into(), Severity::Info);
        stack.entered(id);
        assert_eq!(stack.toasts()[0].phase, ToastPhase::Shown);
        stack.expire(id);
        stack.entered(id);
        assert_eq!(stack.toasts()[0].phase, ToastPhase::Leaving);
    }
}
