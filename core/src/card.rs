//! Card markup for the character and villain grids.
//!
//! Rendering is pure: the same entity and options always produce the same
//! fragment. Source text is emitted verbatim.

use std::fmt::Write;

use dossier_types::{Entity, EntityKind};

use crate::summary::summarize;

/// Shown in place of a summary while spoiler hiding is on
pub const SPOILER_PLACEHOLDER: &str = "Spoiler hidden - toggle to view.";

/// Options that affect a single card's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    pub kind: EntityKind,
    pub hide_spoilers: bool,
    /// Summary budget in characters
    pub summary_limit: usize,
}

impl CardOptions {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            hide_spoilers: false,
            summary_limit: dossier_types::SummaryLimits::default().card,
        }
    }

    pub fn hide_spoilers(mut self, hide: bool) -> Self {
        self.hide_spoilers = hide;
        self
    }

    pub fn summary_limit(mut self, limit: usize) -> Self {
        self.summary_limit = limit;
        self
    }

    /// Whether `entity`'s summary is covered under these options
    pub fn covers(&self, entity: &Entity) -> bool {
        self.hide_spoilers && entity.is_high_spoiler()
    }
}

/// `Season N` badges in ascending season order, whatever the input order.
pub fn season_badges(seasons: &[u32]) -> String {
    let mut sorted = seasons.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(|season| format!(r#"<span class="badge">Season {season}</span>"#))
        .collect()
}

/// Render one grid card.
pub fn render_card(entity: &Entity, options: &CardOptions) -> String {
    let covered = options.covers(entity);
    let summary = if covered {
        SPOILER_PLACEHOLDER.to_string()
    } else {
        summarize(&entity.summary, options.summary_limit)
    };
    let card_class = if covered {
        "card card--spoiler-hidden"
    } else {
        "card"
    };
    let kind_badge = match options.kind {
        EntityKind::Villain => r#"<span class="badge badge--villain">Villain</span>"#,
        EntityKind::Character => "",
    };

    let mut html = String::with_capacity(640 + summary.len());
    // Writing into a String cannot fail
    let _ = write!(
        html,
        r#"<article class="{card_class}" id="{id}" data-entity-card>
  <div class="card__media">
    <img src="{img}" alt="{name}" width="400" height="300" loading="lazy" />
  </div>
  <div class="card__body">
    <div>
      <h3 class="card__title">{name}</h3>
      <div class="badge-group">{kind_badge}{badges}</div>
    </div>
    <p class="card__summary">{summary}</p>
    <div class="card__footer">
      <button class="card__button" type="button" data-detail-trigger="{id}" data-entity-type="{kind}">View details</button>
    </div>
  </div>
</article>
"#,
        id = entity.id,
        img = entity.img,
        name = entity.name,
        badges = season_badges(&entity.seasons),
        kind = options.kind.as_str(),
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_types::SpoilerLevel;

    fn debra() -> Entity {
        Entity {
            id: "deb-morgan".into(),
            name: "Debra Morgan".into(),
            summary: "Dexter's foul-mouthed sister and a detective with Miami Metro.".into(),
            img: "img/deb.jpg".into(),
            seasons: vec![3, 1, 2],
            spoiler_level: SpoilerLevel::High,
            ..Default::default()
        }
    }

    #[test]
    fn badges_are_ascending() {
        assert_eq!(
            season_badges(&[4, 1, 3]),
            concat!(
                r#"<span class="badge">Season 1</span>"#,
                r#"<span class="badge">Season 3</span>"#,
                r#"<span class="badge">Season 4</span>"#
            )
        );
    }

    #[test]
    fn card_exposes_detail_trigger_with_id_and_kind() {
        let html = render_card(&debra(), &CardOptions::new(EntityKind::Character));
        assert!(html.contains(r#"data-detail-trigger="deb-morgan" data-entity-type="character""#));
        assert!(html.contains(r#"id="deb-morgan""#));
    }

    #[test]
    fn high_spoiler_is_covered_when_hiding() {
        let options = CardOptions::new(EntityKind::Villain).hide_spoilers(true);
        let html = render_card(&debra(), &options);
        assert!(html.contains(SPOILER_PLACEHOLDER));
        assert!(html.contains("card--spoiler-hidden"));
        assert!(!html.contains("foul-mouthed"));
        // Title, image and badges stay visible
        assert!(html.contains(r#"<h3 class="card__title">Debra Morgan</h3>"#));
        assert!(html.contains(r#"src="img/deb.jpg""#));
        assert!(html.contains("Season 3"));
    }

    #[test]
    fn normal_spoiler_is_never_covered() {
        let entity = Entity {
            spoiler_level: SpoilerLevel::Normal,
            ..debra()
        };
        let options = CardOptions::new(EntityKind::Villain).hide_spoilers(true);
        let html = render_card(&entity, &options);
        assert!(html.contains("foul-mouthed"));
        assert!(!html.contains("card--spoiler-hidden"));
    }

    #[test]
    fn villain_badge_only_for_villains() {
        let villain = render_card(&debra(), &CardOptions::new(EntityKind::Villain));
        let character = render_card(&debra(), &CardOptions::new(EntityKind::Character));
        assert!(villain.contains("badge--villain"));
        assert!(!character.contains("badge--villain"));
    }

    #[test]
    fn summary_is_truncated_to_card_budget() {
        let options = CardOptions::new(EntityKind::Character).summary_limit(20);
        let html = render_card(&debra(), &options);
        assert!(html.contains(r#"<p class="card__summary">Dexter's...</p>"#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let options = CardOptions::new(EntityKind::Villain).hide_spoilers(true);
        assert_eq!(render_card(&debra(), &options), render_card(&debra(), &options));
    }
}
