//! Caffeine estimate for a drink.
//!
//! The catalog carries no caffeine figures, so the level is guessed from
//! the category, the drink name and its ingredient names. Rules are checked
//! in order; the first one that fires wins.

use crate::types::{Drink, DrinkCategory};
use serde::Serialize;
use std::fmt;

/// Rough caffeine level, ordered from none to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CaffeineLevel {
    None,
    VeryLow,
    Low,
    Light,
    Moderate,
    High,
}

impl CaffeineLevel {
    /// Numeric level shown on compact displays (0-4)
    pub fn level(&self) -> u8 {
        match self {
            CaffeineLevel::None => 0,
            CaffeineLevel::VeryLow | CaffeineLevel::Low => 1,
            CaffeineLevel::Light => 2,
            CaffeineLevel::Moderate => 3,
            CaffeineLevel::High => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaffeineLevel::None => "Caffeine-free",
            CaffeineLevel::VeryLow => "Very low caffeine",
            CaffeineLevel::Low => "Low caffeine",
            CaffeineLevel::Light => "Light caffeine",
            CaffeineLevel::Moderate => "Moderate caffeine",
            CaffeineLevel::High => "High caffeine",
        }
    }
}

impl fmt::Display for CaffeineLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const HERBAL_MARKERS: [&str; 4] = ["rooibos", "chamomile", "lavender", "herbal"];
const BLACK_TEA_MARKERS: [&str; 2] = ["chai", "earl grey"];
const LIGHT_TEA_MARKERS: [&str; 5] = ["green", "oolong", "white", "jasmine", "sencha"];

impl Drink {
    /// Estimate how much caffeine this drink carries
    pub fn caffeine_level(&self) -> CaffeineLevel {
        let name = self.name.to_lowercase();
        let ingredients = self
            .ingredients
            .iter()
            .map(|i| i.name.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let name_has = |markers: &[&str]| markers.iter().any(|m| name.contains(m));

        if self.category == DrinkCategory::Water {
            return CaffeineLevel::None;
        }

        let tea_without_leaves = self.category == DrinkCategory::Tea
            && !ingredients.contains("tea")
            && !ingredients.contains("matcha");
        if name_has(&HERBAL_MARKERS) || tea_without_leaves {
            return CaffeineLevel::None;
        }

        if self.category == DrinkCategory::Coffee || name_has(&["espresso", "cold brew", "matcha"]) {
            if name_has(&["double", "espresso tonic"]) {
                return CaffeineLevel::High;
            }
            return CaffeineLevel::Moderate;
        }

        if name_has(&BLACK_TEA_MARKERS) || ingredients.contains("black tea") {
            return CaffeineLevel::Light;
        }

        if name_has(&LIGHT_TEA_MARKERS) {
            return CaffeineLevel::VeryLow;
        }

        CaffeineLevel::Low
    }
}
