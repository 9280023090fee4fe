//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod benefits;
pub mod focus;
pub mod ingredients;
pub mod search;

// Re-export for convenience
pub use benefits::BenefitFilter;
pub use focus::FocusFilter;
pub use ingredients::IngredientFilter;
pub use search::SearchFilter;
