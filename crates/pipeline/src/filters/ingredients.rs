//! Filter to keep only drinks containing every selected ingredient.

use crate::features::Candidate;
use crate::query::FilterQuery;
use crate::traits::Filter;

/// Keeps candidates that contain ALL selected ingredients.
///
/// ## Algorithm
/// 1. No selection keeps everything
/// 2. Otherwise every selected name must match one of the drink's
///    ingredient names exactly (AND, not OR)
pub struct IngredientFilter;

impl Filter for IngredientFilter {
    fn name(&self) -> &str {
        "IngredientFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &FilterQuery) -> Vec<Candidate<'a>> {
        if query.ingredients.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| {
                query
                    .ingredients
                    .iter()
                    .all(|name| candidate.drink.has_ingredient(name))
            })
            .collect()
    }
}
