//! Page content loaded from the embedded `portfolio.json` fixture.
//!
//! The consuming app embeds the JSON with `include_str!` at compile time and
//! calls [`PortfolioContent::from_json`] once on mount.

use anyhow::{bail, ensure, Context};
use serde::Deserialize;
use std::collections::HashSet;

/// Filter key that matches every project.
pub const FILTER_ALL: &str = "all";

fn default_shape_count() -> usize {
    4
}

/// Everything the page renders that is not behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioContent {
    /// Owner name shown in the hero.
    pub owner: String,
    /// Phrases cycled by the typewriter.
    pub typewriter: Vec<String>,
    /// Page sections, in document order. Each one gets a nav link.
    pub sections: Vec<Section>,
    /// Filter buttons, in display order.
    pub filters: Vec<FilterOption>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub modals: Vec<ModalSpec>,
    /// Number of decorative floating shapes.
    #[serde(default = "default_shape_count")]
    pub shape_count: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterOption {
    /// Category key, or `"all"`.
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Id of the modal with the project write-up, if any.
    #[serde(default)]
    pub modal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModalSpec {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl PortfolioContent {
    /// Parse and sanity-check the content JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let content: PortfolioContent =
            serde_json::from_str(json).context("portfolio content is not valid JSON")?;
        content.validate()?;
        log::info!(
            "[folio] content: {} sections, {} projects, {} modals",
            content.sections.len(),
            content.projects.len(),
            content.modals.len()
        );
        Ok(content)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.typewriter.is_empty(), "typewriter needs at least one phrase");
        unique("section", self.sections.iter().map(|s| s.id.as_str()))?;
        unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        unique("modal", self.modals.iter().map(|m| m.id.as_str()))?;
        unique("filter", self.filters.iter().map(|f| f.key.as_str()))?;

        let modal_ids: HashSet<&str> = self.modals.iter().map(|m| m.id.as_str()).collect();
        for project in &self.projects {
            if let Some(modal) = &project.modal {
                ensure!(
                    modal_ids.contains(modal.as_str()),
                    "project '{}' links to unknown modal '{}'",
                    project.id,
                    modal
                );
            }
        }
        Ok(())
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }
}

fn unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            bail!("{kind} with empty id");
        }
        if !seen.insert(id) {
            bail!("duplicate {kind} id '{id}'");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "owner": "Sam",
        "typewriter": ["Problem Solver"],
        "sections": [{"id": "home", "label": "Home"}, {"id": "projects", "label": "Projects"}],
        "filters": [{"key": "all", "label": "All"}, {"key": "ml", "label": "ML"}],
        "projects": [
            {"id": "p1", "title": "Digits", "summary": "CNN", "category": "ml", "modal": "m1"}
        ],
        "modals": [{"id": "m1", "title": "Digits", "body": "Details"}]
    }"#;

    #[test]
    fn parses_minimal_content_with_defaults() {
        let content = PortfolioContent::from_json(MINIMAL).unwrap();
        assert_eq!(content.shape_count, 4);
        assert_eq!(content.section_ids(), vec!["home", "projects"]);
        assert!(content.projects[0].tags.is_empty());
    }

    #[test]
    fn rejects_duplicate_section_ids() {
        let json = MINIMAL.replace(r#""id": "projects""#, r#""id": "home""#);
        let err = PortfolioContent::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate section id 'home'"));
    }

    #[test]
    fn rejects_dangling_modal_link() {
        let json = MINIMAL.replace(r#""modal": "m1""#, r#""modal": "m9""#);
        assert!(PortfolioContent::from_json(&json).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(PortfolioContent::from_json("{").is_err());
    }

    #[test]
    fn shipped_fixture_is_valid() {
        let content =
            PortfolioContent::from_json(include_str!("../../fixtures/portfolio.json")).unwrap();
        assert!(content.filters.iter().any(|f| f.key == FILTER_ALL));
    }
}
