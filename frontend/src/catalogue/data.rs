use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::models::Treatment;

const EMBEDDED_CATALOGUE: &str = include_str!("../../data/treatments.json");

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to parse catalogue: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("treatment at position {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate treatment id `{0}`")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct CatalogueFile {
    treatments: Vec<Treatment>,
}

/// Validated, read-only list of treatments in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalogue {
    items: Vec<Treatment>,
}

impl Catalogue {
    pub fn new(items: Vec<Treatment>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(CatalogueError::EmptyId(position));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogueError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Treatment] {
        &self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn load_catalogue(json: &str) -> Result<Catalogue, CatalogueError> {
    let file: CatalogueFile = serde_json::from_str(json)?;
    Catalogue::new(file.treatments)
}

/// The catalogue shipped with the site.
pub fn embedded_catalogue() -> Result<Catalogue, CatalogueError> {
    load_catalogue(EMBEDDED_CATALOGUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::models::Category;

    fn treatment_json(id: &str, category: &str) -> String {
        format!(
            r#"{{"id":"{id}","title":"T {id}","category":"{category}","duration":"30 mins",
                "price":"From £—","summary":"s","downtime":"None"}}"#
        )
    }

    #[test]
    fn embedded_catalogue_loads_in_source_order() {
        let catalogue = embedded_catalogue().unwrap();
        let ids: Vec<_> = catalogue.items().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
        assert_eq!(ids.first(), Some(&"signature-facial"));
        assert_eq!(ids.last(), Some(&"skin-consultation"));
        assert_eq!(catalogue.items()[1].category, Category::AdvancedSkin);
        assert!(catalogue.items().iter().all(|t| !t.best_for.is_empty()));
    }

    #[test]
    fn optional_tag_lists_default_to_empty() {
        let json = format!(r#"{{"treatments":[{}]}}"#, treatment_json("a", "Facials"));
        let catalogue = load_catalogue(&json).unwrap();
        assert!(catalogue.items()[0].best_for.is_empty());
        assert!(catalogue.items()[0].highlights.is_empty());
        assert!(catalogue.contains("a"));
        assert!(!catalogue.contains("b"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            load_catalogue("{\"treatments\": ["),
            Err(CatalogueError::Parse(_))
        ));
    }

    #[test]
    fn rejects_unknown_category() {
        let json = format!(r#"{{"treatments":[{}]}}"#, treatment_json("a", "Nails"));
        assert!(matches!(load_catalogue(&json), Err(CatalogueError::Parse(_))));
    }

    #[test]
    fn rejects_empty_id() {
        let json = format!(
            r#"{{"treatments":[{},{}]}}"#,
            treatment_json("a", "Facials"),
            treatment_json("  ", "Massage")
        );
        assert!(matches!(load_catalogue(&json), Err(CatalogueError::EmptyId(1))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = format!(
            r#"{{"treatments":[{},{}]}}"#,
            treatment_json("a", "Facials"),
            treatment_json("a", "Massage")
        );
        match load_catalogue(&json) {
            Err(CatalogueError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }
}
