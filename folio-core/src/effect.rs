//! Messages fed into the page and side effects it asks the host to perform.

use crate::animation::Tween;
use crate::clock::Millis;
use crate::contact::ContactField;
use crate::notification::{Severity, ToastId};
use crate::reveal::ObserverConfig;
use crate::typewriter::TypewriterConfig;

/// Everything that can happen to the page: user input, browser events and
/// the page's own deferred follow-ups.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// `window` finished loading.
    WindowLoaded,
    LoaderElapsed,
    LoaderFaded,

    /// Click on the nav link at this index.
    NavLinkClicked(usize),
    MenuToggled,
    /// Click inside the mobile menu; `on_backdrop` when the container
    /// itself was the target rather than the panel.
    MenuClicked { on_backdrop: bool },
    /// In-page anchor or programmatic scroll to a section id.
    ScrollToSection(String),

    /// Click on the filter button at this index.
    FilterClicked(usize),
    CardFadedOut { card: usize, generation: u64 },

    /// The reveal element at this index intersected the viewport.
    RevealIntersected(usize),

    ContactInput(ContactField, String),
    ContactSubmitted,
    ContactDelivered,

    OpenModal(String),
    CloseModal(String),
    ModalFadedOut { id: String, generation: u64 },
    /// Click within a modal; `on_overlay` when the overlay itself was the
    /// target rather than anything inside `.modal-content`.
    ModalClicked { id: String, on_overlay: bool },
    EscapePressed,

    ShowNotification { message: String, severity: Severity },
    NotificationEntered(ToastId),
    NotificationExpired(ToastId),
    NotificationFadedOut(ToastId),
    NotificationDismissed(ToastId),

    Scrolled(f64),
    ScrollSettled { offset: f64, token: u64 },
    Resized,
}

/// Side effects requested by [`update`](crate::page::update).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartTypewriter(TypewriterConfig),
    /// Hand an option object to the chart library.
    RenderChart(serde_json::Value),
    ResizeChart,
    ObserveReveals(ObserverConfig),
    ScrollIntoView { element_id: String },
    /// Run a tween and, once it has finished, deliver `then`.
    Animate { tween: Tween, then: Option<Msg> },
    /// Deliver `msg` after a delay.
    Schedule { after: Millis, msg: Msg },
}

impl Effect {
    pub fn animate(tween: Tween) -> Self {
        Effect::Animate { tween, then: None }
    }

    pub fn animate_then(tween: Tween, then: Msg) -> Self {
        Effect::Animate {
            tween,
            then: Some(then),
        }
    }
}
