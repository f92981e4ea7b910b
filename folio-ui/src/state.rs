//! Application state managed via Dioxus context.
//!
//! `AppState` owns the page [`Runtime`] in a signal and is provided with
//! `use_context_provider`. Components read their slice of the page through
//! [`use_page`] and send events with [`AppState::dispatch`]; whatever the
//! runtime asks for in return is carried out here.

use crate::dom::{self, WebClock};
use crate::js_bridge;
use dioxus::prelude::*;
use folio_core::content::PortfolioContent;
use folio_core::notification::Severity;
use folio_core::skills::CHART_MOUNT_ID;
use folio_core::typewriter::TYPED_TARGET;
use folio_core::{Command, Msg, PageState, Runtime};

/// Shared state for the portfolio page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parsed page content (None if it failed to load)
    pub content: Signal<Option<PortfolioContent>>,
    /// Error message if the content could not be loaded
    pub error_msg: Signal<Option<String>>,
    runtime: Signal<Option<Runtime<WebClock>>>,
}

/// Memoized view of the page. The calling component re-renders only when
/// the value `f` derives changes, not on every runtime update.
pub fn use_page<R>(f: impl Fn(&PageState) -> R + 'static) -> Memo<Option<R>>
where
    R: PartialEq + 'static,
{
    let state = use_context::<AppState>();
    use_memo(move || state.with_page(&f))
}

impl AppState {
    /// Parse the embedded content and build the page runtime.
    pub fn new(content_json: &str) -> Self {
        match PortfolioContent::from_json(content_json) {
            Ok(content) => {
                let page = PageState::new(&content);
                Self {
                    content: Signal::new(Some(content)),
                    error_msg: Signal::new(None),
                    runtime: Signal::new(Some(Runtime::new(page, WebClock))),
                }
            }
            Err(e) => {
                log::error!("[folio] content failed to load: {:#}", e);
                Self {
                    content: Signal::new(None),
                    error_msg: Signal::new(Some(format!("{:#}", e))),
                    runtime: Signal::new(None),
                }
            }
        }
    }

    /// Read the current page state. Subscribes the calling scope to every
    /// change; components go through [`use_page`] instead.
    pub fn with_page<R>(&self, f: impl FnOnce(&PageState) -> R) -> Option<R> {
        self.runtime.read().as_ref().map(|rt| f(rt.state()))
    }

    /// Run every initializer once. Call after the first render.
    pub fn boot(self) {
        js_bridge::init_bridge();
        let commands = self.with_runtime(|rt| rt.boot());
        self.perform(commands);
        self.listen();
    }

    pub fn dispatch(self, msg: Msg) {
        let commands = self.with_runtime(|rt| rt.dispatch(msg));
        self.perform(commands);
    }

    pub fn scroll_to_section(self, id: &str) {
        self.dispatch(Msg::ScrollToSection(id.to_string()));
    }

    pub fn open_modal(self, id: &str) {
        self.dispatch(Msg::OpenModal(id.to_string()));
    }

    pub fn close_modal(self, id: &str) {
        self.dispatch(Msg::CloseModal(id.to_string()));
    }

    pub fn show_notification(self, message: impl Into<String>, severity: Severity) {
        self.dispatch(Msg::ShowNotification {
            message: message.into(),
            severity,
        });
    }

    fn run_due(self) {
        let commands = self.with_runtime(|rt| rt.run_due());
        self.perform(commands);
    }

    fn with_runtime(mut self, f: impl FnOnce(&mut Runtime<WebClock>) -> Vec<Command>) -> Vec<Command> {
        // The write guard is dropped before any command runs.
        let mut runtime = self.runtime.write();
        let commands = runtime.as_mut().map(f).unwrap_or_default();
        commands
    }

    /// Window-level listeners: Escape, scroll, resize and load.
    fn listen(self) {
        dom::on_escape(move || self.dispatch(Msg::EscapePressed));
        dom::on_scroll(move |y| self.dispatch(Msg::Scrolled(y)));
        dom::listen_window("resize", move |_| self.dispatch(Msg::Resized));
        dom::on_window_load(move || self.dispatch(Msg::WindowLoaded));
    }

    fn perform(self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::StartTypewriter(config) => {
                    js_bridge::start_typewriter(TYPED_TARGET, &config.to_options_json());
                }
                Command::RenderChart(option) => {
                    js_bridge::render_radar_chart(CHART_MOUNT_ID, &option.to_string());
                }
                Command::ResizeChart => js_bridge::resize_chart(CHART_MOUNT_ID),
                Command::ObserveReveals(config) => {
                    dom::observe_reveals(&config, move |index| {
                        self.dispatch(Msg::RevealIntersected(index))
                    });
                }
                Command::ScrollIntoView { element_id } => dom::scroll_into_view(&element_id),
                Command::Animate { handle, tween } => {
                    let params = tween.to_params_json();
                    if tween.looped {
                        js_bridge::start_animation(&params);
                    } else {
                        wasm_bindgen_futures::spawn_local(async move {
                            js_bridge::animate(&params).await;
                            let commands = self.with_runtime(|rt| rt.complete(handle));
                            self.perform(commands);
                        });
                    }
                }
                Command::Wake { after } => dom::set_timeout(after, move || self.run_due()),
            }
        }
    }
}
