//! Dioxus RSX components for the portfolio page.
//!
//! Every component reads its slice of the page through `use_page` and reports
//! user input with `AppState::dispatch`; none of them mutates the DOM itself.

mod contact_form;
mod error_display;
mod floating_shapes;
mod hero;
mod modal;
mod nav_bar;
mod page_loader;
mod project_grid;
mod reveal_section;
mod skills_chart;
mod toast_stack;

pub use contact_form::ContactForm;
pub use error_display::ErrorDisplay;
pub use floating_shapes::FloatingShapes;
pub use hero::Hero;
pub use modal::Modals;
pub use nav_bar::NavBar;
pub use page_loader::PageLoader;
pub use project_grid::ProjectGrid;
pub use reveal_section::{RevealSection, SectionHeader};
pub use skills_chart::SkillsChart;
pub use toast_stack::ToastStack;
