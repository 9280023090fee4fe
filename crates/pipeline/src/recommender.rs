//! # Recommendation Filter
//!
//! Selects and orders the drinks relevant to the current query:
//! 1. Narrow to the active category (catalog order kept)
//! 2. Score each drink against the health focus
//! 3. Run the filter pipeline
//! 4. Stable-sort by focus score, highest first
//!
//! Step 4 must be a stable sort: drinks with equal scores stay in catalog
//! order so identical inputs always render identically.

use std::sync::Arc;

use catalog::{Catalog, Drink};
use tracing::debug;

use crate::features::{Candidate, FocusScorer};
use crate::filter_pipeline::FilterPipeline;
use crate::query::FilterQuery;

/// Rank drinks from any ordered sequence against a query.
///
/// Drinks outside `query.category` are skipped. Returns the scored
/// candidates in final order.
pub fn rank_candidates<'a>(
    drinks: impl IntoIterator<Item = &'a Drink>,
    query: &FilterQuery,
    pipeline: &FilterPipeline,
) -> Vec<Candidate<'a>> {
    let in_category: Vec<&Drink> = drinks
        .into_iter()
        .filter(|drink| drink.category == query.category)
        .collect();

    let scorer = FocusScorer::new(query.focus.as_ref());
    let candidates = scorer.score_all(&in_category);

    let mut ranked = pipeline.apply(candidates, query);
    // `sort_by` is stable
    ranked.sort_by(|a, b| b.focus_score.cmp(&a.focus_score));
    ranked
}

/// Rank drinks with the standard pipeline and drop the scores.
pub fn recommend<'a>(drinks: impl IntoIterator<Item = &'a Drink>, query: &FilterQuery) -> Vec<&'a Drink> {
    rank_candidates(drinks, query, &FilterPipeline::standard())
        .into_iter()
        .map(|candidate| candidate.drink)
        .collect()
}

/// Runs queries against a shared catalog.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    pipeline: Arc<FilterPipeline>,
}

impl Recommender {
    /// Recommender with the standard filter pipeline
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_pipeline(catalog, FilterPipeline::standard())
    }

    pub fn with_pipeline(catalog: Arc<Catalog>, pipeline: FilterPipeline) -> Self {
        Self {
            catalog,
            pipeline: Arc::new(pipeline),
        }
    }

    /// Ranked candidates with their focus scores
    pub fn candidates(&self, query: &FilterQuery) -> Vec<Candidate<'_>> {
        let ranked = rank_candidates(self.catalog.drinks_in(query.category), query, &self.pipeline);
        debug!(
            "Ranked {} of {} {} drinks",
            ranked.len(),
            self.catalog.category_count(query.category),
            query.category
        );
        ranked
    }

    /// Ranked drinks for the query
    pub fn recommend(&self, query: &FilterQuery) -> Vec<&Drink> {
        self.candidates(query)
            .into_iter()
            .map(|candidate| candidate.drink)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{drink, focus, with_benefits};
    use catalog::DrinkCategory;

    fn ids(drinks: &[&Drink]) -> Vec<String> {
        drinks.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_focus_ranks_by_score_then_catalog_order() {
        let drinks = vec![
            with_benefits(drink("one", DrinkCategory::Tea), &["Calming"]),
            with_benefits(drink("two", DrinkCategory::Tea), &["Calming", "Focus support"]),
            with_benefits(drink("three", DrinkCategory::Tea), &["Focus support"]),
            with_benefits(drink("four", DrinkCategory::Tea), &["Calming", "Focus support"]),
        ];
        let query = FilterQuery::new(DrinkCategory::Tea).with_focus(focus(&["Calming", "Focus support"]));

        let result = recommend(&drinks, &query);

        assert_eq!(ids(&result), vec!["two", "four", "one", "three"]);
    }

    #[test]
    fn test_rank_candidates_exposes_scores() {
        let drinks = vec![
            with_benefits(drink("one", DrinkCategory::Tea), &["Calming"]),
            with_benefits(drink("two", DrinkCategory::Tea), &["Calming", "Focus support"]),
        ];
        let query = FilterQuery::new(DrinkCategory::Tea).with_focus(focus(&["Calming", "Focus support"]));

        let ranked = rank_candidates(&drinks, &query, &FilterPipeline::standard());
        let scores: Vec<usize> = ranked.iter().map(|c| c.focus_score).collect();
        assert_eq!(scores, vec![2, 1]);
    }

    #[test]
    fn test_other_categories_are_skipped() {
        let drinks = vec![
            drink("tea", DrinkCategory::Tea),
            drink("coffee", DrinkCategory::Coffee),
        ];
        let result = recommend(&drinks, &FilterQuery::new(DrinkCategory::Coffee));
        assert_eq!(ids(&result), vec!["coffee"]);
    }

    #[test]
    fn test_recommender_uses_category_index() {
        let catalog = Catalog::from_parts(
            vec![
                drink("t1", DrinkCategory::Tea),
                drink("w1", DrinkCategory::Water),
                drink("t2", DrinkCategory::Tea),
            ],
            vec![],
        )
        .unwrap();
        let recommender = Recommender::new(Arc::new(catalog));

        let result = recommender.recommend(&FilterQuery::new(DrinkCategory::Tea));
        assert_eq!(ids(&result), vec!["t1", "t2"]);
    }
}
