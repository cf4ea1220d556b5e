//! Source data sets
//!
//! The catalog holds the two externally supplied record sequences. Each set is
//! shared (`Arc`) so grids, the timeline and the dialog can hold it without
//! copying, and carries an id index built once at load time.

mod error;

pub use error::CatalogError;

use std::path::Path;
use std::sync::Arc;

use dossier_types::{Entity, EntityKind};
use hashbrown::HashMap;
use serde_json::Value;

/// One immutable, ordered data set with an id lookup table.
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    entities: Arc<[Entity]>,
    index: Arc<HashMap<String, usize>>,
}

impl EntitySet {
    pub fn new(entities: Vec<Entity>) -> Self {
        let mut index = HashMap::with_capacity(entities.len());
        for (position, entity) in entities.iter().enumerate() {
            // First record wins, same as a front-to-back scan
            index.entry(entity.id.clone()).or_insert(position);
        }
        Self {
            entities: entities.into(),
            index: Arc::new(index),
        }
    }

    /// Read a set from an arbitrary JSON value.
    ///
    /// Anything but an array is an empty set; array items that are not valid
    /// records are skipped.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(Value::Array(items)) = value else {
            if value.is_some_and(|v| !v.is_null()) {
                tracing::warn!("entity data is not an array, treating as empty");
            }
            return Self::default();
        };

        let entities = items
            .iter()
            .enumerate()
            .filter_map(|(position, item)| {
                match serde_json::from_value::<Entity>(item.clone()) {
                    Ok(entity) => Some(entity),
                    Err(err) => {
                        tracing::warn!(position, error = %err, "skipping malformed entity record");
                        None
                    }
                }
            })
            .collect();
        Self::new(entities)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.index.get(id).map(|&position| &self.entities[position])
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All seasons present in the set, ascending
    pub fn seasons(&self) -> Vec<u32> {
        let mut seasons: Vec<u32> = self
            .entities
            .iter()
            .flat_map(|entity| entity.seasons.iter().copied())
            .collect();
        seasons.sort_unstable();
        seasons.dedup();
        seasons
    }
}

/// Characters and villains, as supplied by the page.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub characters: EntitySet,
    pub villains: EntitySet,
}

impl Catalog {
    pub fn new(characters: Vec<Entity>, villains: Vec<Entity>) -> Self {
        Self {
            characters: EntitySet::new(characters),
            villains: EntitySet::new(villains),
        }
    }

    /// Build from two loosely typed values (e.g. page globals).
    pub fn from_values(characters: Option<&Value>, villains: Option<&Value>) -> Self {
        Self {
            characters: EntitySet::from_value(characters),
            villains: EntitySet::from_value(villains),
        }
    }

    /// Parse `{ "characters": [...], "villains": [...] }`.
    ///
    /// Only an unparsable document is an error; missing or non-array members
    /// are empty sets.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(json)?;
        Ok(Self::from_values(
            document.get("characters"),
            document.get("villains"),
        ))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            characters = catalog.characters.len(),
            villains = catalog.villains.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn set(&self, kind: EntityKind) -> &EntitySet {
        match kind {
            EntityKind::Character => &self.characters,
            EntityKind::Villain => &self.villains,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.villains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_non_array_members_are_empty() {
        let catalog = Catalog::from_json_str(r#"{"characters": {"id": "x"}}"#).unwrap();
        assert!(catalog.characters.is_empty());
        assert!(catalog.villains.is_empty());
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_records_are_skipped() {
        let catalog = Catalog::from_json_str(
            r#"{"villains": [{"id": "trinity", "name": "Arthur Mitchell"}, {"name": 7}, 12]}"#,
        )
        .unwrap();
        assert_eq!(catalog.villains.len(), 1);
        assert_eq!(catalog.villains.entities()[0].id, "trinity");
    }

    #[test]
    fn unparsable_document_is_an_error() {
        assert!(matches!(
            Catalog::from_json_str("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn lookup_uses_first_record_with_id() {
        let set = EntitySet::new(vec![
            Entity { id: "a".into(), name: "First".into(), ..Default::default() },
            Entity { id: "a".into(), name: "Second".into(), ..Default::default() },
        ]);
        assert_eq!(set.get("a").unwrap().name, "First");
        assert!(set.get("missing").is_none());
    }

    #[test]
    fn seasons_are_collected_ascending() {
        let set = EntitySet::new(vec![
            Entity { id: "a".into(), seasons: vec![3, 1], ..Default::default() },
            Entity { id: "b".into(), seasons: vec![1, 2], ..Default::default() },
        ]);
        assert_eq!(set.seasons(), vec![1, 2, 3]);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("data.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
