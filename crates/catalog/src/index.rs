//! Catalog building, validation and derived lookups.
//!
//! This module turns a parsed `CatalogDocument` into an indexed `Catalog`
//! and checks the integrity rules a catalog has to satisfy before any
//! browsing happens:
//! - drink ids, focus ids are unique and non-empty
//! - ingredient names are unique within a drink
//! - drinks only use declared categories (when the document declares them)
//!
//! Focus benefits that no drink carries are tolerated. They only produce
//! empty results, so they are reported with a warning.

use crate::error::{CatalogError, Result};
use crate::parser::{self, CatalogDocument, EMBEDDED_CATALOG};
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load the catalog that ships with this crate
    pub fn embedded() -> Result<Self> {
        let doc = parser::parse_catalog_str(EMBEDDED_CATALOG, "embedded")?;
        Self::from_document(doc)
    }

    /// Load a catalog from a local JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {}", path.display());
        let doc = parser::parse_catalog_file(path)?;
        Self::from_document(doc)
    }

    /// Build and validate a catalog from a parsed document
    pub fn from_document(doc: CatalogDocument) -> Result<Self> {
        if !doc.categories.is_empty() {
            if let Some(drink) = doc
                .drinks
                .iter()
                .find(|d| !doc.categories.contains(&d.category))
            {
                return Err(CatalogError::ValidationError(format!(
                    "drink {} uses undeclared category {}",
                    drink.id, drink.category
                )));
            }
        }
        Self::from_parts(doc.drinks, doc.focuses)
    }

    /// Build and validate a catalog from drinks and focus presets
    pub fn from_parts(drinks: Vec<Drink>, focuses: Vec<HealthFocus>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for drink in drinks {
            catalog.insert_drink(drink);
        }
        for focus in focuses {
            catalog.insert_focus(focus);
        }

        catalog.validate()?;

        let (drinks, focuses) = catalog.counts();
        info!("Catalog ready: {} drinks, {} health focuses", drinks, focuses);
        Ok(catalog)
    }

    /// Validate catalog integrity
    ///
    /// Returns the first hard error found. Dangling focus benefits are only
    /// logged.
    pub fn validate(&self) -> Result<()> {
        let mut drink_ids = HashSet::new();
        for drink in &self.drinks {
            if drink.id.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "drink \"{}\" has an empty id",
                    drink.name
                )));
            }
            if !drink_ids.insert(drink.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    entity: "drink".to_string(),
                    id: drink.id.clone(),
                });
            }

            let mut names = HashSet::new();
            for ingredient in &drink.ingredients {
                if !names.insert(ingredient.name.as_str()) {
                    return Err(CatalogError::DuplicateIngredient {
                        drink_id: drink.id.clone(),
                        name: ingredient.name.clone(),
                    });
                }
            }
        }

        let mut focus_ids = HashSet::new();
        for focus in &self.focuses {
            if focus.id.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "health focus \"{}\" has an empty id",
                    focus.label
                )));
            }
            if !focus_ids.insert(focus.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    entity: "health focus".to_string(),
                    id: focus.id.clone(),
                });
            }
        }

        for (focus_id, benefit) in self.dangling_focus_benefits() {
            warn!(
                "Health focus {} counts benefit \"{}\" which no drink lists",
                focus_id, benefit
            );
        }

        Ok(())
    }

    /// (focus id, benefit) pairs where no drink lists the benefit
    pub fn dangling_focus_benefits(&self) -> Vec<(&str, &str)> {
        let known: HashSet<&str> = self
            .drinks
            .iter()
            .flat_map(|d| d.health_benefits.iter().map(String::as_str))
            .collect();

        self.focuses
            .iter()
            .flat_map(|f| {
                f.benefits
                    .iter()
                    .map(move |b| (f.id.as_str(), b.as_str()))
            })
            .filter(|(_, b)| !known.contains(b))
            .collect()
    }

    /// Distinct ingredient names used in a category, first-seen order.
    ///
    /// These are the ingredient filter options offered for that category.
    pub fn ingredient_names(&self, category: DrinkCategory) -> Vec<&str> {
        distinct(self.drinks_in(category).flat_map(|d| d.ingredient_names()))
    }

    /// Distinct health benefits listed in a category, first-seen order
    pub fn benefit_names(&self, category: DrinkCategory) -> Vec<&str> {
        distinct(
            self.drinks_in(category)
                .flat_map(|d| d.health_benefits.iter().map(String::as_str)),
        )
    }
}

fn distinct<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}
