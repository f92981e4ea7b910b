//! Top navigation bar and the slide-in mobile menu.

use crate::dom;
use crate::state::{use_page, AppState};
use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use folio_core::Msg;

#[derive(Clone, PartialEq)]
struct LinkView {
    id: String,
    label: String,
    class: &'static str,
}

fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Desktop links, the menu button and the mobile menu.
#[component]
pub fn NavBar() -> Element {
    let state = use_context::<AppState>();
    let nav = use_page(move |p| {
        let content = state.content.read();
        let links: Vec<LinkView> = content
            .iter()
            .flat_map(|c| c.sections.iter())
            .enumerate()
            .map(|(i, s)| LinkView {
                id: s.id.clone(),
                label: s.label.clone(),
                class: link_class(p.nav.is_active(i)),
            })
            .collect();
        (links, p.nav.menu_open())
    });
    let (links, menu_open) = nav().unwrap_or_default();

    let menu_class = if menu_open {
        "fixed inset-0 z-40 bg-black/50 md:hidden transition-transform"
    } else {
        "fixed inset-0 z-40 bg-black/50 md:hidden transition-transform -translate-x-full"
    };

    let mobile_links = links.clone();

    rsx! {
        nav {
            class: "fixed top-0 inset-x-0 z-30 bg-primary/90 backdrop-blur",
            div {
                class: "max-w-6xl mx-auto flex items-center justify-between px-4 py-3",
                div {
                    class: "hidden md:flex space-x-6",
                    for (i, link) in links.into_iter().enumerate() {
                        a {
                            key: "{link.id}",
                            class: link.class,
                            href: "#{link.id}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                state.dispatch(Msg::NavLinkClicked(i));
                            },
                            "{link.label}"
                        }
                    }
                }
                button {
                    id: "mobile-menu-btn",
                    class: "md:hidden text-2xl",
                    onclick: move |_| state.dispatch(Msg::MenuToggled),
                    "☰"
                }
            }
        }
        div {
            id: "mobile-menu",
            class: menu_class,
            onclick: move |evt: MouseEvent| {
                let on_backdrop = evt
                    .try_as_web_event()
                    .is_some_and(|e| dom::target_matches(&e, "#mobile-menu"));
                state.dispatch(Msg::MenuClicked { on_backdrop });
            },
            div {
                class: "menu-panel w-64 h-full bg-primary p-6 space-y-4",
                for (i, link) in mobile_links.into_iter().enumerate() {
                    a {
                        key: "m-{link.id}",
                        class: "{link.class} block",
                        href: "#{link.id}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            state.dispatch(Msg::NavLinkClicked(i));
                        },
                        "{link.label}"
                    }
                }
            }
        }
    }
}
