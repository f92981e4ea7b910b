//! Drives a [`PageState`] against a clock.
//!
//! The runtime keeps `Schedule` effects in a [`TimerQueue`] and remembers the
//! follow-up message of every in-flight animation. What is left for the host
//! comes back as [`Command`]s: DOM and library calls, plus a `Wake` hint
//! telling it when to call [`Runtime::run_due`] next.

use crate::animation::{AnimationHandle, Tween};
use crate::clock::{Clock, Millis};
use crate::effect::{Effect, Msg};
use crate::page::{update, PageState};
use crate::reveal::ObserverConfig;
use crate::timer::TimerQueue;
use crate::typewriter::TypewriterConfig;
use std::collections::HashMap;

/// Host-facing side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    StartTypewriter(TypewriterConfig),
    RenderChart(serde_json::Value),
    ResizeChart,
    ObserveReveals(ObserverConfig),
    ScrollIntoView { element_id: String },
    /// Run the tween and report [`Runtime::complete`] with `handle` once it
    /// finishes.
    Animate { handle: AnimationHandle, tween: Tween },
    /// Call [`Runtime::run_due`] after this long.
    Wake { after: Millis },
}

#[derive(Debug)]
struct InFlight {
    #[cfg(test)]
    settles_at: Option<Millis>,
    then: Option<Msg>,
}

pub struct Runtime<C: Clock> {
    state: PageState,
    clock: C,
    timers: TimerQueue<Msg>,
    animations: HashMap<AnimationHandle, InFlight>,
    next_handle: u64,
}

impl<C: Clock> Runtime<C> {
    pub fn new(state: PageState, clock: C) -> Self {
        Self {
            state,
            clock,
            timers: TimerQueue::new(),
            animations: HashMap::new(),
            next_handle: 0,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    pub fn boot(&mut self) -> Vec<Command> {
        let effects = self.state.boot();
        self.absorb(effects)
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Command> {
        let effects = update(&mut self.state, msg);
        self.absorb(effects)
    }

    /// Deliver every scheduled message that is due by now.
    pub fn run_due(&mut self) -> Vec<Command> {
        let due = self.timers.pop_due(self.clock.now());
        let mut commands = Vec::new();
        for msg in due {
            commands.extend(self.dispatch(msg));
        }
        if commands.is_empty() {
            commands.extend(self.wake_hint());
        }
        commands
    }

    /// The host reports that an animation finished.
    pub fn complete(&mut self, handle: AnimationHandle) -> Vec<Command> {
        match self.animations.remove(&handle).and_then(|a| a.then) {
            Some(msg) => self.dispatch(msg),
            None => Vec::new(),
        }
    }

    /// Complete every finite animation whose duration has elapsed, standing
    /// in for the browser in tests.
    #[cfg(test)]
    fn complete_elapsed(&mut self) -> Vec<Command> {
        let now = self.clock.now();
        let mut done: Vec<AnimationHandle> = self
            .animations
            .iter()
            .filter(|(_, a)| a.settles_at.is_some_and(|t| t <= now))
            .map(|(h, _)| *h)
            .collect();
        done.sort();
        let mut commands = Vec::new();
        for handle in done {
            commands.extend(self.complete(handle));
        }
        commands
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn absorb(&mut self, effects: Vec<Effect>) -> Vec<Command> {
        let now = self.clock.now();
        let mut commands = Vec::with_capacity(effects.len());
        let mut scheduled = false;
        for effect in effects {
            match effect {
                Effect::Schedule { after, msg } => {
                    self.timers.schedule(now, after, msg);
                    scheduled = true;
                }
                Effect::Animate { tween, then } => {
                    let handle = AnimationHandle(self.next_handle);
                    self.next_handle += 1;
                    if then.is_some() {
                        self.animations.insert(
                            handle,
                            InFlight {
                                #[cfg(test)]
                                settles_at: tween.settles_after().map(|d| now + d),
                                then,
                            },
                        );
                    }
                    commands.push(Command::Animate { handle, tween });
                }
                Effect::StartTypewriter(config) => commands.push(Command::StartTypewriter(config)),
                Effect::RenderChart(option) => commands.push(Command::RenderChart(option)),
                Effect::ResizeChart => commands.push(Command::ResizeChart),
                Effect::ObserveReveals(config) => commands.push(Command::ObserveReveals(config)),
                Effect::ScrollIntoView { element_id } => {
                    commands.push(Command::ScrollIntoView { element_id })
                }
            }
        }
        if scheduled {
            commands.extend(self.wake_hint());
        }
        commands
    }

    fn wake_hint(&self) -> Option<Command> {
        self.timers.next_deadline().map(|due| Command::Wake {
            after: due.since(self.clock.now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FakeClock;
    use crate::content::PortfolioContent;
    use crate::contact::{PENDING_LABEL, SUBMIT_LABEL};
    use crate::notification::Severity;

    fn runtime() -> (Runtime<FakeClock>, FakeClock) {
        let content =
            PortfolioContent::from_json(include_str!("../../fixtures/portfolio.json")).unwrap();
        let clock = FakeClock::new();
        (Runtime::new(PageState::new(&content), clock.clone()), clock)
    }

    /// Advance one millisecond at a time, letting timers and animations
    /// settle, until `done` holds. Returns the elapsed time.
    fn advance_until(
        rt: &mut Runtime<FakeClock>,
        clock: &FakeClock,
        limit: Millis,
        done: impl Fn(&PageState) -> bool,
    ) -> Option<Millis> {
        let start = clock.now();
        while clock.now().since(start) <= limit {
            rt.run_due();
            rt.complete_elapsed();
            if done(rt.state()) {
                return Some(clock.now().since(start));
            }
            clock.advance(Millis(1));
        }
        None
    }

    #[test]
    fn contact_submit_restores_no_sooner_than_delay() {
        let (mut rt, clock) = runtime();
        let commands = rt.dispatch(Msg::ContactSubmitted);
        assert_eq!(rt.state().contact.submit_label(), PENDING_LABEL);
        assert!(commands.contains(&Command::Wake {
            after: Millis(2000)
        }));

        clock.advance(Millis(1999));
        rt.run_due();
        assert!(rt.state().contact.is_sending());

        clock.advance(Millis(1));
        rt.run_due();
        assert!(!rt.state().contact.is_sending());
        assert_eq!(rt.state().contact.submit_label(), SUBMIT_LABEL);
        assert_eq!(rt.state().toasts.toasts().len(), 1);
    }

    #[test]
    fn unattended_toast_is_gone_within_5400ms() {
        let (mut rt, clock) = runtime();
        rt.dispatch(Msg::ShowNotification {
            message: "hello".into(),
            severity: Severity::Info,
        });
        let elapsed = advance_until(&mut rt, &clock, Millis(6000), |s| {
            s.toasts.toasts().is_empty()
        });
        assert_eq!(elapsed, Some(Millis(5400)));
    }

    #[test]
    fn dismissed_toast_is_gone_immediately_and_expiry_is_harmless() {
        let (mut rt, clock) = runtime();
        rt.dispatch(Msg::ShowNotification {
            message: "bye".into(),
            severity: Severity::Error,
        });
        let id = rt.state().toasts.toasts()[0].id;
        rt.dispatch(Msg::NotificationDismissed(id));
        assert!(rt.state().toasts.toasts().is_empty());

        clock.advance(Millis(5000));
        assert!(rt.run_due().is_empty());
        assert_eq!(rt.pending_timers(), 0);
    }

    #[test]
    fn close_modal_hides_after_animation_completes() {
        let (mut rt, _clock) = runtime();
        rt.dispatch(Msg::OpenModal("modal-air-quality".into()));
        let commands = rt.dispatch(Msg::CloseModal("modal-air-quality".into()));
        let Some(Command::Animate { handle, .. }) = commands.first().cloned() else {
            panic!("close should animate");
        };
        assert!(rt.state().modals.is_visible("modal-air-quality"));
        rt.complete(handle);
        assert!(!rt.state().modals.is_visible("modal-air-quality"));
    }

    #[test]
    fn loader_fades_after_hold() {
        let (mut rt, clock) = runtime();
        rt.dispatch(Msg::WindowLoaded);
        let elapsed = advance_until(&mut rt, &clock, Millis(3000), |s| !s.loader.is_present());
        assert_eq!(elapsed, Some(Millis(2000)));
    }

    #[test]
    fn boot_issues_host_commands_without_timers() {
        let (mut rt, _clock) = runtime();
        let commands = rt.boot();
        assert!(matches!(commands[0], Command::StartTypewriter(_)));
        assert!(!commands.iter().any(|c| matches!(c, Command::Wake { .. })));
        assert_eq!(rt.pending_timers(), 0);
    }
}
