//! The blend accumulator.
//!
//! Merges the ingredients of every drink the user adds into one running
//! collection. Each ingredient keeps a count (how many additions brought
//! it in), the union of its benefits and the names of the drinks it came
//! from. Entries keep the order in which their ingredient first appeared.

use catalog::Drink;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// How many benefits the blend health profile shows
pub const DEFAULT_TOP_BENEFITS: usize = 8;

/// One ingredient in the blend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlendEntry {
    pub name: String,
    pub count: u32,
    /// Union of benefits from every addition, first-seen order, no duplicates
    pub benefits: Vec<String>,
    /// Names of the drinks that contributed this ingredient, no duplicates
    pub sources: Vec<String>,
}

impl BlendEntry {
    fn new(name: &str, benefits: &[String], source: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            benefits: benefits.to_vec(),
            sources: vec![source.to_string()],
        }
    }

    fn merge_benefits(&mut self, benefits: &[String]) {
        for benefit in benefits {
            if !self.benefits.contains(benefit) {
                self.benefits.push(benefit.clone());
            }
        }
    }

    fn add_source(&mut self, source: &str) {
        if !self.sources.iter().any(|s| s == source) {
            self.sources.push(source.to_string());
        }
    }
}

/// A benefit and the summed count of the blend entries listing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenefitTotal {
    pub benefit: String,
    pub total: u32,
}

/// Running collection of ingredients drawn from the drinks a user picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlendAccumulator {
    entries: HashMap<String, BlendEntry>,
    /// Ingredient names in first-insertion order
    order: Vec<String>,
}

impl BlendAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every ingredient of `drink` into the blend.
    ///
    /// ## Algorithm
    /// For each ingredient:
    /// 1. If absent, insert it with count 0, its benefits and the drink as
    ///    its only source
    /// 2. Increment the count
    /// 3. Union in the ingredient's benefits
    /// 4. Record the drink as a source unless it already is one
    pub fn add_drink(&mut self, drink: &Drink) {
        for ingredient in &drink.ingredients {
            if !self.entries.contains_key(&ingredient.name) {
                self.order.push(ingredient.name.clone());
            }
            let entry = self
                .entries
                .entry(ingredient.name.clone())
                .or_insert_with(|| BlendEntry::new(&ingredient.name, &ingredient.benefits, &drink.name));

            entry.count += 1;
            entry.merge_benefits(&ingredient.benefits);
            entry.add_source(&drink.name);
        }
        debug!(
            "Added {} to blend ({} ingredients)",
            drink.name,
            self.order.len()
        );
    }

    /// Remove an ingredient outright, whatever its count.
    ///
    /// Returns false if the blend had no such ingredient.
    pub fn remove_ingredient(&mut self, name: &str) -> bool {
        if self.entries.remove(name).is_none() {
            return false;
        }
        self.order.retain(|n| n != name);
        debug!("Removed {} from blend", name);
        true
    }

    /// Empty the blend
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn get(&self, name: &str) -> Option<&BlendEntry> {
        self.entries.get(name)
    }

    /// Entries in first-insertion order
    pub fn entries(&self) -> impl Iterator<Item = &BlendEntry> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of counts over all entries
    pub fn total_servings(&self) -> u32 {
        self.entries.values().map(|e| e.count).sum()
    }

    /// For every benefit in the blend, the sum of `count` over the entries
    /// listing it.
    ///
    /// Benefits appear in the order they were first seen when walking the
    /// entries in insertion order.
    pub fn combined_benefit_totals(&self) -> Vec<BenefitTotal> {
        let mut totals: Vec<BenefitTotal> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for entry in self.entries() {
            for benefit in &entry.benefits {
                match positions.get(benefit.as_str()) {
                    Some(&pos) => totals[pos].total += entry.count,
                    None => {
                        positions.insert(benefit.as_str(), totals.len());
                        totals.push(BenefitTotal {
                            benefit: benefit.clone(),
                            total: entry.count,
                        });
                    }
                }
            }
        }
        totals
    }

    /// The `n` benefits with the highest totals, descending.
    ///
    /// Ties keep the order of [`BlendAccumulator::combined_benefit_totals`].
    pub fn top_benefits(&self, n: usize) -> Vec<BenefitTotal> {
        let mut totals = self.combined_benefit_totals();
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals.truncate(n);
        totals
    }

    /// Number of distinct benefits across the blend
    pub fn distinct_benefit_count(&self) -> usize {
        self.combined_benefit_totals().len()
    }
}
