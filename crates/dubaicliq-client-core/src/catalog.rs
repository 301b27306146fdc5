use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::filter::Filterable;

/// Sample dataset shipped with the site until real SKUs are provided.
pub const BUNDLED_PRODUCTS_JSON: &str = include_str!("../data/products.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product dataset is not valid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("product id `{0}` appears more than once")]
    DuplicateId(String),
    #[error("product at position {0} has an empty id")]
    EmptyId(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl ProductRecord {
    /// Category line under the card title, e.g. `displays · projectors`.
    #[must_use]
    pub fn meta_line(&self) -> String {
        [self.category.as_str(), self.subcategory.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" · ")
    }

    /// Text blocks of a rendered card in display order: title, meta line,
    /// price, bullets, description. Empty blocks are left out.
    #[must_use]
    pub fn card_blocks(&self) -> Vec<String> {
        let mut blocks = vec![self.name.clone(), self.meta_line(), self.price.clone()];
        blocks.extend(self.bullets.iter().cloned());
        blocks.push(self.description.clone());
        blocks.retain(|block| !block.is_empty());
        blocks
    }

    /// Searchable text of a rendered card: its blocks joined by spaces.
    #[must_use]
    pub fn rendered_text(&self) -> String {
        self.card_blocks().join(" ")
    }

    #[must_use]
    pub fn tags_attribute(&self) -> String {
        self.tags.join(" ")
    }
}

impl Filterable for ProductRecord {
    fn category(&self) -> &str {
        &self.category
    }

    fn tags_text(&self) -> String {
        self.tags_attribute()
    }

    fn full_text(&self) -> String {
        self.rendered_text()
    }
}

/// Ordered, read-only product list with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    records: Vec<ProductRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ProductRecord>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for (position, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(raw)?;
        Self::new(records)
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_PRODUCTS_JSON)
    }

    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for record in &self.records {
            if !categories.contains(&record.category.as_str()) {
                categories.push(record.category.as_str());
            }
        }
        categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: format!("{id} name"),
            category: category.to_string(),
            subcategory: String::new(),
            price: "Request quote".to_string(),
            tags: vec!["one".to_string(), "two words".to_string()],
            image: String::new(),
            bullets: vec!["Bullet".to_string()],
            description: "Description".to_string(),
        }
    }

    #[test]
    fn bundled_catalog_loads_in_order() {
        let catalog = Catalog::bundled().expect("bundled catalog");
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.records()[0].id, "laser-projector-5000lm");
        assert_eq!(
            catalog.categories(),
            vec!["displays", "videowalls", "audio", "conference", "control", "signal", "racks"]
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let error = Catalog::new(vec![record("a", "audio"), record("a", "control")])
            .expect_err("duplicate id");
        assert!(matches!(error, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn rejects_blank_ids() {
        let error = Catalog::new(vec![record("a", "audio"), record(" ", "audio")])
            .expect_err("blank id");
        assert!(matches!(error, CatalogError::EmptyId(1)));
    }

    #[test]
    fn rendered_text_skips_empty_parts() {
        let text = record("kit", "audio").rendered_text();
        assert_eq!(text, "kit name audio Request quote Bullet Description");
    }

    #[test]
    fn rendered_text_follows_card_block_order() {
        let mut projector = record("laser", "displays");
        projector.subcategory = "projectors".to_string();
        projector.bullets.push("Calibration".to_string());
        assert_eq!(projector.meta_line(), "displays · projectors");
        assert_eq!(
            projector.card_blocks(),
            vec![
                "laser name",
                "displays · projectors",
                "Request quote",
                "Bullet",
                "Calibration",
                "Description",
            ]
        );
        assert_eq!(
            projector.rendered_text(),
            "laser name displays · projectors Request quote Bullet Calibration Description"
        );
    }

    #[test]
    fn bundled_cards_are_searchable_by_category_key() {
        let catalog = Catalog::bundled().expect("bundled catalog");
        let hits: Vec<&str> = catalog
            .records()
            .iter()
            .filter(|record| record.rendered_text().to_lowercase().contains("videowalls"))
            .map(|record| record.id.as_str())
            .collect();
        let expected: Vec<&str> = catalog
            .records()
            .iter()
            .filter(|record| record.category == "videowalls")
            .map(|record| record.id.as_str())
            .collect();
        assert!(!expected.is_empty());
        assert_eq!(hits, expected);
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let catalog = Catalog::from_json(r#"[{"id":"x","name":"X","category":"audio"}]"#)
            .expect("minimal record");
        let record = &catalog.records()[0];
        assert!(record.tags.is_empty());
        assert!(record.description.is_empty());
    }
}
