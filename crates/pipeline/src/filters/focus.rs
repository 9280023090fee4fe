//! Filter that hides drinks irrelevant to the active health focus.
//!
//! With a focus selected, a drink sharing no benefit with it is dropped,
//! even if that empties the result. Without a focus this filter is a no-op.

use crate::features::Candidate;
use crate::query::FilterQuery;
use crate::traits::Filter;

/// Drops candidates with a zero focus score while a focus is active.
pub struct FocusFilter;

impl Filter for FocusFilter {
    fn name(&self) -> &str {
        "FocusFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &FilterQuery) -> Vec<Candidate<'a>> {
        if query.focus.is_none() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| candidate.focus_score > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{drink, focus};
    use catalog::DrinkCategory;

    #[test]
    fn test_zero_scores_dropped_with_focus() {
        let a = drink("a", DrinkCategory::Tea);
        let b = drink("b", DrinkCategory::Tea);
        let candidates = vec![Candidate::new(&a, 2), Candidate::new(&b, 0)];
        let query = FilterQuery::new(DrinkCategory::Tea).with_focus(focus(&["Calming"]));

        let filtered = FocusFilter.apply(candidates, &query);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].drink.id, "a");
    }

    #[test]
    fn test_all_zero_scores_empty_the_result() {
        let a = drink("a", DrinkCategory::Tea);
        let b = drink("b", DrinkCategory::Tea);
        let candidates = vec![Candidate::new(&a, 0), Candidate::new(&b, 0)];
        let query = FilterQuery::new(DrinkCategory::Tea).with_focus(focus(&["Calming"]));

        assert!(FocusFilter.apply(candidates, &query).is_empty());
    }

    #[test]
    fn test_no_focus_is_noop() {
        let a = drink("a", DrinkCategory::Tea);
        let candidates = vec![Candidate::new(&a, 0)];

        let filtered = FocusFilter.apply(candidates, &FilterQuery::new(DrinkCategory::Tea));
        assert_eq!(filtered.len(), 1);
    }
}
