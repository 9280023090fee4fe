//! Ordered chain of drink filters.
//!
//! Each stage receives the survivors of the previous one. Stages only
//! remove candidates, never reorder them.

use crate::features::Candidate;
use crate::filters::{BenefitFilter, FocusFilter, IngredientFilter, SearchFilter};
use crate::query::FilterQuery;
use crate::traits::Filter;
use tracing::debug;

/// Filters applied one after another to the category's candidates.
///
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter)
///     .add_filter(FocusFilter);
///
/// let survivors = pipeline.apply(candidates, &query);
/// ```
pub struct FilterPipeline {
    stages: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// A pipeline that passes everything through
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Search, ingredients, benefits, then focus.
    ///
    /// Every stage is a pure predicate, so order only changes how much
    /// work later stages do, never the result.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SearchFilter)
            .add_filter(IngredientFilter)
            .add_filter(BenefitFilter)
            .add_filter(FocusFilter)
    }

    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.stages.push(Box::new(filter));
        self
    }

    /// Names of the stages in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.stages.iter().map(|f| f.name()).collect()
    }

    /// Run the candidates through every stage, logging how many survive each.
    pub fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &FilterQuery) -> Vec<Candidate<'a>> {
        self.stages.iter().fold(candidates, |survivors, stage| {
            let before = survivors.len();
            let after = stage.apply(survivors, query);
            debug!("{}: {} -> {} drinks", stage.name(), before, after.len());
            after
        })
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
