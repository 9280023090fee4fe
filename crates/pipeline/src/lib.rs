//! Recommendation Filter for the drink catalog.
//!
//! Given a `FilterQuery` (category, search text, selected ingredients and
//! benefits, optional health focus) it returns the matching drinks, best
//! focus match first.
//!
//! ## Stages
//! 1. The catalog is narrowed to the query's category
//! 2. FocusScorer attaches a focus score to every remaining drink
//! 3. Filters remove drinks failing search, ingredient, benefit or focus
//! 4. Survivors are stable-sorted by focus score, highest first
//!
//! ## Usage
//! ```ignore
//! use pipeline::{FilterQuery, Recommender};
//!
//! let recommender = Recommender::new(catalog.clone());
//! let query = FilterQuery::new(DrinkCategory::Tea)
//!     .with_ingredient("Ginger")
//!     .with_focus(catalog.get_focus("immunity").unwrap().clone());
//!
//! for drink in recommender.recommend(&query) {
//!     println!("{}", drink.name);
//! }
//! ```

pub mod traits;
pub mod query;
pub mod filters;
pub mod filter_pipeline;
pub mod features;
pub mod recommender;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use traits::Filter;
pub use query::FilterQuery;
pub use filter_pipeline::FilterPipeline;
pub use features::{Candidate, FocusScorer};
pub use recommender::{rank_candidates, recommend, Recommender};
