//! Dialog content derived from one entity record.

use dossier_types::Entity;

pub const NO_ALIASES: &str = "No known aliases";
pub const NO_EPISODES: &str = "Episodes TBD";

/// A list region of the dialog. Empty lists show a single placeholder item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalList {
    pub items: Vec<String>,
    pub placeholder: &'static str,
}

impl ModalList {
    pub fn new(items: &[String], placeholder: &'static str) -> Self {
        Self {
            items: items.to_vec(),
            placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines to show, in order
    pub fn lines(&self) -> Vec<&str> {
        if self.items.is_empty() {
            vec![self.placeholder]
        } else {
            self.items.iter().map(String::as_str).collect()
        }
    }

    /// `<li>` items for the list element
    pub fn markup(&self) -> String {
        self.lines()
            .into_iter()
            .map(|line| format!("<li>{line}</li>"))
            .collect()
    }
}

/// Everything the dialog shows for one record.
///
/// The summary is always the full text; spoiler hiding never applies here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub type_label: String,
    /// `Season 1, Season 3`, ascending and deduplicated
    pub seasons: String,
    pub aliases: ModalList,
    pub episodes: ModalList,
}

impl ModalContent {
    pub fn from_entity(entity: &Entity, type_label: &str) -> Self {
        let seasons = entity
            .sorted_seasons()
            .iter()
            .map(|season| format!("Season {season}"))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: entity.id.clone(),
            title: entity.name.clone(),
            summary: entity.summary.clone(),
            type_label: type_label.to_string(),
            seasons,
            aliases: ModalList::new(&entity.aliases, NO_ALIASES),
            episodes: ModalList::new(&entity.notable_episodes, NO_EPISODES),
        }
    }

    /// Plain-text rendition for terminal output
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n\n{}\n", self.title, self.type_label, self.summary);
        if !self.seasons.is_empty() {
            out.push_str(&format!("\nSeasons: {}\n", self.seasons));
        }
        out.push_str("\nAliases:\n");
        for line in self.aliases.lines() {
            out.push_str(&format!("  - {line}\n"));
        }
        out.push_str("\nNotable episodes:\n");
        for line in self.episodes.lines() {
            out.push_str(&format!("  - {line}\n"));
        }
        out
    }
}
