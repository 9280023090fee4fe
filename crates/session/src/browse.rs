//! # Browse Session
//!
//! One user's browsing state, kept as an explicit struct:
//! - active category tab
//! - search text, selected ingredients and benefits
//! - selected health focus
//! - the blend being assembled
//!
//! Every user intent (switch tab, toggle a filter chip, type in the search
//! box, add a drink to the blend) is one method call. Views are derived on
//! demand: `results()` re-runs the recommendation filter over the shared
//! catalog each time it is called.

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use blend::BlendAccumulator;
use catalog::{Catalog, Drink, DrinkCategory, FocusId, HealthFocus};
use pipeline::{Candidate, FilterQuery, Recommender};

/// The category tab a new session opens on
pub const DEFAULT_CATEGORY: DrinkCategory = DrinkCategory::Tea;

/// Mutable browsing state over an immutable, shared catalog
#[derive(Clone)]
pub struct BrowseSession {
    catalog: Arc<Catalog>,
    recommender: Recommender,
    category: DrinkCategory,
    search: String,
    ingredients: BTreeSet<String>,
    benefits: BTreeSet<String>,
    focus: Option<FocusId>,
    blend: BlendAccumulator,
}

impl BrowseSession {
    /// Start a session on the default category with nothing selected
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let recommender = Recommender::new(catalog.clone());
        Self {
            catalog,
            recommender,
            category: DEFAULT_CATEGORY,
            search: String::new(),
            ingredients: BTreeSet::new(),
            benefits: BTreeSet::new(),
            focus: None,
            blend: BlendAccumulator::new(),
        }
    }

    pub fn category(&self) -> DrinkCategory {
        self.category
    }

    /// Switch category tab.
    ///
    /// Ingredient and benefit selections belong to a category and are
    /// cleared. Search text and focus carry over.
    pub fn set_category(&mut self, category: DrinkCategory) {
        if category == self.category {
            return;
        }
        debug!("Switching category {} -> {}", self.category, category);
        self.category = category;
        self.ingredients.clear();
        self.benefits.clear();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Toggle an ingredient filter chip. Returns true if it is now selected.
    pub fn toggle_ingredient(&mut self, name: &str) -> bool {
        toggle(&mut self.ingredients, name)
    }

    /// Toggle a benefit filter chip. Returns true if it is now selected.
    pub fn toggle_benefit(&mut self, benefit: &str) -> bool {
        toggle(&mut self.benefits, benefit)
    }

    /// Require an ingredient. Selecting it again changes nothing.
    pub fn select_ingredient(&mut self, name: &str) {
        self.ingredients.insert(name.to_string());
    }

    /// Require a benefit. Selecting it again changes nothing.
    pub fn select_benefit(&mut self, benefit: &str) {
        self.benefits.insert(benefit.to_string());
    }

    pub fn selected_ingredients(&self) -> &BTreeSet<String> {
        &self.ingredients
    }

    pub fn selected_benefits(&self) -> &BTreeSet<String> {
        &self.benefits
    }

    /// Select a focus by id, or clear it with `None`
    pub fn select_focus(&mut self, id: Option<&str>) -> Result<()> {
        match id {
            Some(id) => {
                let focus = self
                    .catalog
                    .get_focus(id)
                    .ok_or_else(|| anyhow!("Health focus {} not found", id))?;
                debug!("Selected focus {}", focus.label);
                self.focus = Some(focus.id.clone());
            }
            None => self.focus = None,
        }
        Ok(())
    }

    /// Select a focus, or clear it if it is already the active one.
    ///
    /// Returns true if the focus is active afterwards.
    pub fn toggle_focus(&mut self, id: &str) -> Result<bool> {
        if self.focus.as_deref() == Some(id) {
            self.focus = None;
            return Ok(false);
        }
        self.select_focus(Some(id))?;
        Ok(true)
    }

    pub fn focus(&self) -> Option<&HealthFocus> {
        self.focus.as_deref().and_then(|id| self.catalog.get_focus(id))
    }

    /// Reset search, selections and focus; the blend is kept
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.ingredients.clear();
        self.benefits.clear();
        self.focus = None;
    }

    /// Snapshot of the current selections as a query
    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            category: self.category,
            search: self.search.clone(),
            ingredients: self.ingredients.clone(),
            benefits: self.benefits.clone(),
            focus: self.focus().cloned(),
        }
    }

    /// Drinks matching the current selections, best focus match first
    pub fn results(&self) -> Vec<&Drink> {
        self.recommender.recommend(&self.query())
    }

    /// Like `results`, with focus scores
    pub fn ranked(&self) -> Vec<Candidate<'_>> {
        self.recommender.candidates(&self.query())
    }

    /// Ingredient chips offered for the active category
    pub fn available_ingredients(&self) -> Vec<&str> {
        self.catalog.ingredient_names(self.category)
    }

    /// Benefit chips offered for the active category
    pub fn available_benefits(&self) -> Vec<&str> {
        self.catalog.benefit_names(self.category)
    }

    /// Pick one of the current results uniformly at random
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Drink> {
        let results = self.results();
        let picked = results.choose(rng).copied();
        if let Some(drink) = picked {
            info!("Random brew: {}", drink.name);
        }
        picked
    }

    pub fn blend(&self) -> &BlendAccumulator {
        &self.blend
    }

    /// Add every ingredient of a drink to the blend
    pub fn add_to_blend(&mut self, drink_id: &str) -> Result<&Drink> {
        let drink = self
            .catalog
            .get_drink(drink_id)
            .ok_or_else(|| anyhow!("Drink {} not found", drink_id))?;
        self.blend.add_drink(drink);
        Ok(drink)
    }

    /// Drop an ingredient from the blend. Returns false if it wasn't there.
    pub fn remove_from_blend(&mut self, ingredient: &str) -> bool {
        self.blend.remove_ingredient(ingredient)
    }

    pub fn clear_blend(&mut self) {
        self.blend.clear();
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Ingredient, IngredientIcon};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn drink(id: &str, category: DrinkCategory, ingredients: &[&str], benefits: &[&str]) -> Drink {
        Drink {
            id: id.to_string(),
            category,
            name: id.to_uppercase(),
            description: format!("The {} drink", id),
            image: None,
            flavor_notes: vec![],
            ingredients: ingredients
                .iter()
                .map(|name| Ingredient {
                    name: name.to_string(),
                    description: String::new(),
                    benefits: benefits.iter().map(|b| b.to_string()).collect(),
                    icon: IngredientIcon::Leaf,
                })
                .collect(),
            preparation: vec![],
            health_benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }

    fn test_session() -> BrowseSession {
        let catalog = Catalog::from_parts(
            vec![
                drink("a", DrinkCategory::Tea, &["Mint", "Ginger"], &["Calming", "Focus support"]),
                drink("b", DrinkCategory::Tea, &["Ginger"], &["Energy lift"]),
                drink("c", DrinkCategory::Coffee, &["Espresso"], &["Energy lift"]),
            ],
            vec![HealthFocus {
                id: "calm".to_string(),
                label: "Calm".to_string(),
                tagline: "Slow down".to_string(),
                benefits: vec!["Calming".to_string()],
            }],
        )
        .unwrap();
        BrowseSession::new(Arc::new(catalog))
    }

    fn ids(drinks: &[&Drink]) -> Vec<String> {
        drinks.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = test_session();
        assert_eq!(session.category(), DrinkCategory::Tea);
        assert!(session.query().is_unconstrained());
        assert_eq!(ids(&session.results()), vec!["a", "b"]);
        assert!(session.blend().is_empty());
    }

    #[test]
    fn test_category_switch_clears_selections() {
        let mut session = test_session();
        session.toggle_ingredient("Ginger");
        session.toggle_benefit("Energy lift");
        session.set_search("drink");
        session.select_focus(Some("calm")).unwrap();

        session.set_category(DrinkCategory::Coffee);

        assert!(session.selected_ingredients().is_empty());
        assert!(session.selected_benefits().is_empty());
        assert_eq!(session.search(), "drink");
        assert!(session.focus().is_some());
    }

    #[test]
    fn test_same_category_keeps_selections() {
        let mut session = test_session();
        session.toggle_ingredient("Ginger");
        session.set_category(DrinkCategory::Tea);
        assert_eq!(session.selected_ingredients().len(), 1);
    }

    #[test]
    fn test_toggle_ingredient() {
        let mut session = test_session();
        assert!(session.toggle_ingredient("Mint"));
        assert_eq!(ids(&session.results()), vec!["a"]);
        assert!(!session.toggle_ingredient("Mint"));
        assert_eq!(ids(&session.results()), vec!["a", "b"]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut session = test_session();
        session.select_ingredient("Mint");
        session.select_ingredient("Mint");
        session.select_benefit("Calming");
        session.select_benefit("Calming");

        assert_eq!(session.selected_ingredients().len(), 1);
        assert_eq!(session.selected_benefits().len(), 1);
        assert_eq!(ids(&session.results()), vec!["a"]);
    }

    #[test]
    fn test_focus_selection() {
        let mut session = test_session();

        assert!(session.toggle_focus("calm").unwrap());
        assert_eq!(ids(&session.results()), vec!["a"]);

        assert!(!session.toggle_focus("calm").unwrap());
        assert!(session.focus().is_none());

        assert!(session.select_focus(Some("unknown")).is_err());
        assert!(session.focus().is_none());
    }

    #[test]
    fn test_clear_filters() {
        let mut session = test_session();
        session.toggle_benefit("Calming");
        session.set_search("x");
        session.select_focus(Some("calm")).unwrap();

        session.clear_filters();
        assert!(session.query().is_unconstrained());
    }

    #[test]
    fn test_available_options_follow_category() {
        let mut session = test_session();
        assert_eq!(session.available_ingredients(), vec!["Mint", "Ginger"]);

        session.set_category(DrinkCategory::Coffee);
        assert_eq!(session.available_ingredients(), vec!["Espresso"]);
        assert_eq!(session.available_benefits(), vec!["Energy lift"]);
    }

    #[test]
    fn test_blend_operations() {
        let mut session = test_session();
        session.add_to_blend("a").unwrap();
        session.add_to_blend("b").unwrap();

        assert_eq!(session.blend().get("Ginger").unwrap().count, 2);
        assert!(session.add_to_blend("zzz").is_err());

        assert!(session.remove_from_blend("Mint"));
        assert_eq!(session.blend().len(), 1);

        session.clear_blend();
        assert!(session.blend().is_empty());
    }

    #[test]
    fn test_pick_random() {
        let mut session = test_session();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let picked = session.pick_random(&mut rng).unwrap();
            assert_eq!(picked.category, DrinkCategory::Tea);
        }

        session.toggle_ingredient("Espresso");
        assert!(session.pick_random(&mut rng).is_none());
    }
}
