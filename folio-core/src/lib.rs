//! Host-independent behavior of the portfolio page.
//!
//! The page is one [`PageState`](page::PageState) value. Browser events
//! become [`Msg`](effect::Msg)s, [`update`](page::update) applies them and
//! returns [`Effect`](effect::Effect)s, and a [`Runtime`](runtime::Runtime)
//! turns those into timer entries and host [`Command`](runtime::Command)s.
//! Nothing here touches the DOM, so all of it runs under plain `cargo test`.
//!
//! - `clock` / `timer` / `debounce`: time, deferred messages, coalescing
//! - `animation`: anime.js tween descriptions
//! - `content` / `skills` / `typewriter`: static page data
//! - `nav`, `filter`, `reveal`, `contact`, `modal`, `notification`,
//!   `shapes`, `loader`: one controller each
//! - `page` / `runtime`: wiring

pub mod animation;
pub mod clock;
pub mod contact;
pub mod content;
pub mod debounce;
pub mod effect;
pub mod filter;
pub mod loader;
pub mod modal;
pub mod nav;
pub mod notification;
pub mod page;
pub mod reveal;
pub mod runtime;
pub mod shapes;
pub mod skills;
pub mod timer;
pub mod typewriter;

pub use clock::{Clock, FakeClock, Millis};
pub use effect::{Effect, Msg};
pub use page::{update, PageState};
pub use runtime::{Command, Runtime};
