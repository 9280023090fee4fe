//! Filter to keep only drinks listing every selected health benefit.

use crate::features::Candidate;
use crate::query::FilterQuery;
use crate::traits::Filter;

/// Keeps candidates whose health benefits include ALL selected benefits.
pub struct BenefitFilter;

impl Filter for BenefitFilter {
    fn name(&self) -> &str {
        "BenefitFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &FilterQuery) -> Vec<Candidate<'a>> {
        if query.benefits.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| {
                query
                    .benefits
                    .iter()
                    .all(|benefit| candidate.drink.has_benefit(benefit))
            })
            .collect()
    }
}
