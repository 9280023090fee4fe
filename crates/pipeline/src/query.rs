//! The filter query: one immutable snapshot of what the user asked for.

use catalog::{DrinkCategory, HealthFocus};
use std::collections::BTreeSet;

/// Everything the Recommendation Filter needs to know about user intent.
///
/// Built fresh from the session state whenever an input changes and passed
/// by reference through the pipeline. Empty sets and a blank search mean
/// "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub category: DrinkCategory,
    /// Raw search text as typed; see [`FilterQuery::normalized_search`]
    pub search: String,
    /// Ingredient names that must ALL be present in a drink
    pub ingredients: BTreeSet<String>,
    /// Health benefits that must ALL be listed by a drink
    pub benefits: BTreeSet<String>,
    pub focus: Option<HealthFocus>,
}

impl FilterQuery {
    /// A query with no constraints beyond the category
    pub fn new(category: DrinkCategory) -> Self {
        Self {
            category,
            search: String::new(),
            ingredients: BTreeSet::new(),
            benefits: BTreeSet::new(),
            focus: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_ingredient(mut self, name: impl Into<String>) -> Self {
        self.ingredients.insert(name.into());
        self
    }

    pub fn with_benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefits.insert(benefit.into());
        self
    }

    pub fn with_focus(mut self, focus: HealthFocus) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Trimmed, lower-cased search text, or `None` if it is blank
    pub fn normalized_search(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// True when no search, selection or focus narrows the category
    pub fn is_unconstrained(&self) -> bool {
        self.normalized_search().is_none()
            && self.ingredients.is_empty()
            && self.benefits.is_empty()
            && self.focus.is_none()
    }
}
