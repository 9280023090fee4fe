//! The `Filter` trait every pipeline stage implements.

use crate::features::Candidate;
use crate::query::FilterQuery;

/// One stage of the recommendation filter.
///
/// A stage owns the incoming candidates and hands back the ones that pass.
/// It keeps survivors in their incoming order. An unsatisfiable constraint
/// yields an empty Vec, not an error. `Send + Sync` so a pipeline can sit
/// behind an `Arc`.
pub trait Filter: Send + Sync {
    /// Stage name used in logs
    fn name(&self) -> &str;

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &FilterQuery) -> Vec<Candidate<'a>>;
}
