//! Home page featured cards.

use std::fmt::Write;

use dossier_types::{Entity, EntityKind, FeaturedIds};

use crate::catalog::{Catalog, EntitySet};
use crate::summary::summarize;

/// Preferred record for `kind`, or the set's first record.
pub fn pick<'a>(set: &'a EntitySet, preferred_id: &str) -> Option<&'a Entity> {
    set.get(preferred_id).or_else(|| set.entities().first())
}

pub fn badge_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Character => "Featured Character",
        EntityKind::Villain => "Featured Villain",
    }
}

pub fn render_feature_card(entity: &Entity, kind: EntityKind, summary_limit: usize) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<article class="feature-card" tabindex="0">
  <div class="feature-card__img">
    <img src="{img}" alt="{name}" width="480" height="360" loading="lazy" />
    <span class="feature-card__badge">{label}</span>
  </div>
  <div>
    <h3>{name}</h3>
    <p class="feature-card__summary">{summary}</p>
    <a class="btn btn--ghost" href="{page}#{id}">Explore profile</a>
  </div>
</article>
"#,
        img = entity.img,
        name = entity.name,
        label = badge_label(kind),
        summary = summarize(&entity.summary, summary_limit),
        page = kind.profile_page(),
        id = entity.id,
    );
    html
}

/// Featured character then featured villain. Empty sets contribute nothing.
pub fn render_featured(catalog: &Catalog, ids: &FeaturedIds, summary_limit: usize) -> String {
    let picks = [
        (EntityKind::Character, pick(&catalog.characters, &ids.character)),
        (EntityKind::Villain, pick(&catalog.villains, &ids.villain)),
    ];
    picks
        .into_iter()
        .filter_map(|(kind, entity)| entity.map(|e| render_feature_card(e, kind, summary_limit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str, name: &str) -> Entity {
        Entity {
            id: id.into(),
            name: name.into(),
            summary: "Word ".repeat(60),
            img: format!("img/{id}.jpg"),
            ..Default::default()
        }
    }

    #[test]
    fn preferred_id_wins_over_first_record() {
        let set = EntitySet::new(vec![entity("harry-morgan", "Harry"), entity("dexter-morgan", "Dexter")]);
        assert_eq!(pick(&set, "dexter-morgan").unwrap().id, "dexter-morgan");
        assert_eq!(pick(&set, "missing").unwrap().id, "harry-morgan");
        assert!(pick(&EntitySet::default(), "dexter-morgan").is_none());
    }

    #[test]
    fn renders_character_then_villain() {
        let catalog = Catalog::new(
            vec![entity("dexter-morgan", "Dexter Morgan")],
            vec![entity("arthur-mitchell", "Arthur Mitchell")],
        );
        let html = render_featured(&catalog, &FeaturedIds::default(), 180);
        let character = html.find("Featured Character").unwrap();
        let villain = html.find("Featured Villain").unwrap();
        assert!(character < villain);
        assert!(html.contains(r#"href="villains.html#arthur-mitchell""#));
        assert!(html.contains(r#"width="480" height="360""#));
    }

    #[test]
    fn summary_uses_featured_budget() {
        let html = render_feature_card(&entity("a", "A"), EntityKind::Character, 20);
        assert!(html.contains(r#"<p class="feature-card__summary">Word Word Word...</p>"#));
    }

    #[test]
    fn missing_sets_contribute_nothing() {
        let catalog = Catalog::new(Vec::new(), vec![entity("brian-moser", "Brian Moser")]);
        let html = render_featured(&catalog, &FeaturedIds::default(), 180);
        assert!(!html.contains("Featured Character"));
        assert!(html.contains("Featured Villain"));
        assert_eq!(render_featured(&Catalog::default(), &FeaturedIds::default(), 180), "");
    }
}
