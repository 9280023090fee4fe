//! Core domain types for the beverage catalog.
//!
//! Everything here is immutable once loaded. Drinks own their
//! ingredients; the `Catalog` owns drinks and health focus presets and
//! keeps lookup indices over them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a drink, e.g. "golden-root-chai"
pub type DrinkId = String;

/// Unique identifier for a health focus preset, e.g. "calm-focus"
pub type FocusId = String;

// =============================================================================
// Enums
// =============================================================================

/// The closed set of drink categories the browser offers as tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkCategory {
    Tea,
    Coffee,
    Water,
}

impl DrinkCategory {
    /// All categories in display order
    pub const ALL: [DrinkCategory; 3] = [DrinkCategory::Tea, DrinkCategory::Coffee, DrinkCategory::Water];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkCategory::Tea => "tea",
            DrinkCategory::Coffee => "coffee",
            DrinkCategory::Water => "water",
        }
    }
}

impl fmt::Display for DrinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tea" => Ok(DrinkCategory::Tea),
            "coffee" => Ok(DrinkCategory::Coffee),
            "water" => Ok(DrinkCategory::Water),
            _ => Err(CatalogError::ValidationError(format!(
                "unknown drink category: {}",
                s
            ))),
        }
    }
}

/// Icon tag attached to an ingredient; the presentation layer picks the glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientIcon {
    Leaf,
    Bean,
    Flower,
    Spice,
    Citrus,
    Root,
    Seed,
}

// =============================================================================
// Drink-related Types
// =============================================================================

/// A named component of a drink, carrying its own benefit tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub icon: IngredientIcon,
}

impl Ingredient {
    pub fn has_benefit(&self, benefit: &str) -> bool {
        self.benefits.iter().any(|b| b == benefit)
    }
}

/// One recipe entry in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: DrinkId,
    pub category: DrinkCategory,
    pub name: String,
    pub description: String,
    /// Hero image URL, if the catalog provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Ordered tasting notes, e.g. ["Spiced", "Velvety", "Earthy"]
    #[serde(default)]
    pub flavor_notes: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps
    #[serde(default)]
    pub preparation: Vec<String>,
    pub health_benefits: Vec<String>,
}

impl Drink {
    /// Ingredient names in recipe order
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    pub fn has_ingredient(&self, name: &str) -> bool {
        self.ingredients.iter().any(|i| i.name == name)
    }

    pub fn has_benefit(&self, benefit: &str) -> bool {
        self.health_benefits.iter().any(|b| b == benefit)
    }

    /// Ingredients that carry `benefit`.
    ///
    /// Used to highlight which parts of a recipe deliver a benefit the user
    /// is hovering or has pinned.
    pub fn ingredients_with_benefit<'a>(&'a self, benefit: &'a str) -> impl Iterator<Item = &'a Ingredient> + 'a {
        self.ingredients.iter().filter(move |i| i.has_benefit(benefit))
    }
}

/// A named preset grouping of benefit tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthFocus {
    pub id: FocusId,
    pub label: String,
    pub tagline: String,
    pub benefits: Vec<String>,
}

// =============================================================================
// Catalog - The In-Memory Recipe Store
// =============================================================================

/// Holds every drink and health focus plus lookup indices.
///
/// Drinks keep the order they were inserted in; that order is the
/// "catalog order" every ranked view falls back to on ties.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) drinks: Vec<Drink>,
    pub(crate) focuses: Vec<HealthFocus>,

    /// Position of each drink in `drinks`
    pub(crate) drink_index: HashMap<DrinkId, usize>,
    /// Positions of drinks per category, ascending (catalog order)
    pub(crate) category_index: HashMap<DrinkCategory, Vec<usize>>,
    /// Position of each focus in `focuses`
    pub(crate) focus_index: HashMap<FocusId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All drinks in catalog order
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// Drinks of one category, in catalog order
    pub fn drinks_in(&self, category: DrinkCategory) -> impl Iterator<Item = &Drink> {
        self.category_index
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&pos| &self.drinks[pos])
    }

    /// Get a drink by id
    pub fn get_drink(&self, id: &str) -> Option<&Drink> {
        self.drink_index.get(id).map(|&pos| &self.drinks[pos])
    }

    /// All health focus presets in catalog order
    pub fn focuses(&self) -> &[HealthFocus] {
        &self.focuses
    }

    /// Get a health focus by id
    pub fn get_focus(&self, id: &str) -> Option<&HealthFocus> {
        self.focus_index.get(id).map(|&pos| &self.focuses[pos])
    }

    /// Insert a drink, updating the id and category indices
    pub fn insert_drink(&mut self, drink: Drink) {
        let pos = self.drinks.len();
        self.drink_index.insert(drink.id.clone(), pos);
        self.category_index
            .entry(drink.category)
            .or_default()
            .push(pos);
        self.drinks.push(drink);
    }

    /// Insert a health focus preset
    pub fn insert_focus(&mut self, focus: HealthFocus) {
        let pos = self.focuses.len();
        self.focus_index.insert(focus.id.clone(), pos);
        self.focuses.push(focus);
    }

    /// Number of drinks in a category
    pub fn category_count(&self, category: DrinkCategory) -> usize {
        self.category_index.get(&category).map_or(0, |v| v.len())
    }

    /// (drinks, focuses) counts for logging
    pub fn counts(&self) -> (usize, usize) {
        (self.drinks.len(), self.focuses.len())
    }
}
