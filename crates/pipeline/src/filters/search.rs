//! Free-text search over a drink's visible text.
//!
//! Only the name, description and flavor notes are searched. Ingredient
//! names are deliberately not part of the haystack: the ingredient filter
//! covers them.

use crate::features::Candidate;
use crate::query::FilterQuery;
use crate::traits::Filter;
use catalog::Drink;

/// Keeps candidates whose text contains the search string.
///
/// ## Algorithm
/// 1. Trim and lower-case the search text; blank means keep everything
/// 2. Join name, description and flavor notes with spaces, lower-cased
/// 3. Keep drinks whose joined text contains the search as a substring
pub struct SearchFilter;

impl SearchFilter {
    fn haystack(drink: &Drink) -> String {
        format!(
            "{} {} {}",
            drink.name,
            drink.description,
            drink.flavor_notes.join(" ")
        )
        .to_lowercase()
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &FilterQuery) -> Vec<Candidate<'a>> {
        let Some(needle) = query.normalized_search() else {
            return candidates;
        };

        candidates
            .into_iter()
            .filter(|candidate| Self::haystack(candidate.drink).contains(&needle))
            .collect()
    }
}
