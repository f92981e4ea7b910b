//! Navigation links, their active highlight and the mobile menu.

use crate::effect::Effect;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    /// Section id each link points at, in link order.
    links: Vec<String>,
    /// Ids of sections present in the document.
    sections: HashSet<String>,
    active: Option<usize>,
    menu_open: bool,
}

impl NavState {
    pub fn new(links: Vec<String>, sections: impl IntoIterator<Item = String>) -> Self {
        Self {
            links,
            sections: sections.into_iter().collect(),
            active: None,
            menu_open: false,
        }
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Follow the link at `index`: scroll to its section, make it the only
    /// active link and close the mobile menu. Links to missing sections do
    /// nothing.
    pub fn click_link(&mut self, index: usize) -> Option<Effect> {
        let target = self.links.get(index)?;
        if !self.sections.contains(target) {
            log::debug!("[folio] nav: no section '{}' for link {}", target, index);
            return None;
        }
        let effect = Effect::ScrollIntoView {
            element_id: target.clone(),
        };
        self.active = Some(index);
        self.menu_open = false;
        Some(effect)
    }

    /// Smooth-scroll to a section without touching the highlight.
    pub fn scroll_to(&self, id: &str) -> Option<Effect> {
        let id = id.trim_start_matches('#');
        self.sections.contains(id).then(|| Effect::ScrollIntoView {
            element_id: id.to_string(),
        })
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A click inside the open mobile menu closes it only when it landed on
    /// the container, outside the link panel.
    pub fn menu_clicked(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.menu_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavState {
        let links = vec!["home".to_string(), "about".to_string(), "blog".to_string()];
        NavState::new(links, ["home".to_string(), "about".to_string()])
    }

    #[test]
    fn exactly_one_link_active_after_each_click() {
        let mut nav = nav();
        for index in [1, 0, 0, 1] {
            assert!(nav.click_link(index).is_some());
            let active: Vec<usize> = (0..nav.links().len()).filter(|i| nav.is_active(*i)).collect();
            assert_eq!(active, vec![index]);
        }
    }

    #[test]
    fn click_scrolls_and_closes_menu() {
        let mut nav = nav();
        nav.toggle_menu();
        assert!(nav.menu_open());

        let effect = nav.click_link(1);
        assert_eq!(
            effect,
            Some(Effect::ScrollIntoView {
                element_id: "about".into()
            })
        );
        assert!(!nav.menu_open());
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let mut nav = nav();
        nav.click_link(0);
        nav.toggle_menu();

        assert_eq!(nav.click_link(2), None);
        assert_eq!(nav.click_link(9), None);
        assert_eq!(nav.active(), Some(0));
        assert!(nav.menu_open());
    }

    #[test]
    fn scroll_to_accepts_anchor_hrefs() {
        let nav = nav();
        assert_eq!(
            nav.scroll_to("#about"),
            Some(Effect::ScrollIntoView {
                element_id: "about".into()
            })
        );
        assert_eq!(nav.scroll_to("blog"), None);
    }

    #[test]
    fn toggle_flips_menu() {
        let mut nav = nav();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn only_backdrop_clicks_close_the_menu() {
        let mut nav = nav();
        nav.toggle_menu();
        nav.menu_clicked(false);
        assert!(nav.menu_open());
        nav.menu_clicked(true);
        assert!(!nav.menu_open());
    }
}
