//! The whole page as one state value and the handler that advances it.

use crate::content::PortfolioContent;
use crate::contact::{ContactForm, SENT_MESSAGE};
use crate::debounce::{Debouncer, SCROLL_QUIET};
use crate::effect::{Effect, Msg};
use crate::filter::{Card, FilterState};
use crate::loader::LoaderState;
use crate::modal::ModalState;
use crate::nav::NavState;
use crate::notification::{Severity, ToastStack};
use crate::reveal::{ObserverConfig, RevealState};
use crate::shapes::ShapeField;
use crate::skills::{radar_option, SKILLS};
use crate::typewriter::TypewriterConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub nav: NavState,
    pub filter: FilterState,
    pub reveal: RevealState,
    pub contact: ContactForm,
    pub modals: ModalState,
    pub toasts: ToastStack,
    pub shapes: ShapeField,
    pub loader: LoaderState,
    pub typewriter: TypewriterConfig,
    pub scroll_y: f64,
    /// Offset at the end of the last scroll burst.
    pub settled_scroll_y: Option<f64>,
    scroll_debounce: Debouncer,
}

impl PageState {
    pub fn new(content: &PortfolioContent) -> Self {
        let section_ids = content.section_ids();
        let cards = content
            .projects
            .iter()
            .map(|p| Card::new(p.category.clone()))
            .collect();
        Self {
            nav: NavState::new(section_ids.clone(), section_ids),
            filter: FilterState::new(
                content.filters.iter().map(|f| f.key.clone()).collect(),
                cards,
            ),
            reveal: RevealState::new(reveal_count(content)),
            contact: ContactForm::default(),
            modals: ModalState::new(content.modals.iter().map(|m| m.id.clone())),
            toasts: ToastStack::default(),
            shapes: ShapeField::new(content.shape_count),
            loader: LoaderState::default(),
            typewriter: TypewriterConfig::new(content.typewriter.clone()),
            scroll_y: 0.0,
            settled_scroll_y: None,
            scroll_debounce: Debouncer::new(SCROLL_QUIET),
        }
    }

    /// Initializers, run once when the document is ready.
    pub fn boot(&self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::StartTypewriter(self.typewriter.clone()),
            Effect::RenderChart(radar_option(&SKILLS)),
            Effect::ObserveReveals(ObserverConfig::default()),
        ];
        effects.extend(self.shapes.float());
        effects
    }
}

/// Every page section is revealed on scroll.
pub fn reveal_count(content: &PortfolioContent) -> usize {
    content.sections.len()
}

/// Apply one message and return the side effects it needs.
pub fn update(state: &mut PageState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::WindowLoaded => state.loader.window_loaded().into_iter().collect(),
        Msg::LoaderElapsed => state.loader.elapsed().into_iter().collect(),
        Msg::LoaderFaded => {
            state.loader.faded();
            Vec::new()
        }

        Msg::NavLinkClicked(index) => state.nav.click_link(index).into_iter().collect(),
        Msg::MenuToggled => {
            state.nav.toggle_menu();
            Vec::new()
        }
        Msg::MenuClicked { on_backdrop } => {
            state.nav.menu_clicked(on_backdrop);
            Vec::new()
        }
        Msg::ScrollToSection(id) => state.nav.scroll_to(&id).into_iter().collect(),

        Msg::FilterClicked(index) => state.filter.click(index),
        Msg::CardFadedOut { card, generation } => {
            state.filter.faded_out(card, generation);
            Vec::new()
        }

        Msg::RevealIntersected(index) => state.reveal.intersect(index).into_iter().collect(),

        Msg::ContactInput(field, value) => {
            state.contact.input(field, value);
            Vec::new()
        }
        Msg::ContactSubmitted => state.contact.submit().into_iter().collect(),
        Msg::ContactDelivered => match state.contact.delivered() {
            Some(_) => {
                let (_, effects) = state.toasts.show(SENT_MESSAGE.to_string(), Severity::Success);
                effects
            }
            None => Vec::new(),
        },

        Msg::OpenModal(id) => state.modals.open(&id).into_iter().collect(),
        Msg::CloseModal(id) => state.modals.close(&id).into_iter().collect(),
        Msg::ModalFadedOut { id, generation } => {
            state.modals.faded_out(&id, generation);
            Vec::new()
        }
        Msg::ModalClicked { id, on_overlay } => {
            state.modals.clicked(&id, on_overlay);
            Vec::new()
        }
        Msg::EscapePressed => {
            if let Some(id) = state.modals.escape() {
                log::debug!("[folio] modal: escape closed '{}'", id);
            }
            Vec::new()
        }

        Msg::ShowNotification { message, severity } => state.toasts.show(message, severity).1,
        Msg::NotificationEntered(id) => {
            state.toasts.entered(id);
            Vec::new()
        }
        Msg::NotificationExpired(id) => state.toasts.expire(id).into_iter().collect(),
        Msg::NotificationFadedOut(id) | Msg::NotificationDismissed(id) => {
            state.toasts.remove(id);
            Vec::new()
        }

        Msg::Scrolled(offset) => {
            state.scroll_y = offset;
            state.shapes.scrolled(offset);
            let token = state.scroll_debounce.trigger();
            vec![Effect::Schedule {
                after: state.scroll_debounce.wait(),
                msg: Msg::ScrollSettled { offset, token },
            }]
        }
        Msg::ScrollSettled { offset, token } => {
            if state.scroll_debounce.is_current(token) {
                log::trace!("[folio] scroll settled at {}", offset);
                state.settled_scroll_y = Some(offset);
            }
            Vec::new()
        }
        Msg::Resized => vec![Effect::ResizeChart],
    }
}
