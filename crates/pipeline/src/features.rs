//! Focus scoring for candidate drinks.
//!
//! Every drink that survives category narrowing becomes a `Candidate`
//! carrying its focus score. Filters look at the score (the focus filter
//! drops zero scores) and the recommender ranks by it.

use catalog::{Drink, HealthFocus};
use rayon::prelude::*;
use std::collections::HashSet;

/// A drink paired with its score against the active health focus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub drink: &'a Drink,
    /// Number of the drink's health benefits the focus counts; 0 without focus
    pub focus_score: usize,
}

impl<'a> Candidate<'a> {
    pub fn new(drink: &'a Drink, focus_score: usize) -> Self {
        Self { drink, focus_score }
    }
}

/// Computes focus scores for drinks.
///
/// Holds the focus benefits as a set so each benefit check is O(1).
#[derive(Debug, Clone, Default)]
pub struct FocusScorer<'f> {
    focus_benefits: Option<HashSet<&'f str>>,
}

impl<'f> FocusScorer<'f> {
    /// Create a scorer for an optional focus. Without a focus every score is 0.
    pub fn new(focus: Option<&'f HealthFocus>) -> Self {
        Self {
            focus_benefits: focus.map(|f| f.benefits.iter().map(String::as_str).collect()),
        }
    }

    /// Count of the drink's health benefits that intersect the focus benefits
    pub fn score(&self, drink: &Drink) -> usize {
        match &self.focus_benefits {
            Some(benefits) => drink
                .health_benefits
                .iter()
                .filter(|b| benefits.contains(b.as_str()))
                .count(),
            None => 0,
        }
    }

    /// Score all drinks in parallel.
    ///
    /// # Returns
    /// One Candidate per drink, in the same order
    pub fn score_all<'a>(&self, drinks: &[&'a Drink]) -> Vec<Candidate<'a>> {
        drinks
            .par_iter()
            .map(|&drink| Candidate::new(drink, self.score(drink)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::DrinkCategory;

    fn drink(id: &str, benefits: &[&str]) -> Drink {
        Drink {
            id: id.to_string(),
            category: DrinkCategory::Tea,
            name: id.to_string(),
            description: String::new(),
            image: None,
            flavor_notes: vec![],
            ingredients: vec![],
            preparation: vec![],
            health_benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }

    fn focus(benefits: &[&str]) -> HealthFocus {
        HealthFocus {
            id: "f".to_string(),
            label: "F".to_string(),
            tagline: String::new(),
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }

    #[test]
    fn test_score_counts_intersection() {
        let f = focus(&["Calming", "Focus support", "Stress relief"]);
        let scorer = FocusScorer::new(Some(&f));

        assert_eq!(scorer.score(&drink("a", &["Calming", "Focus support", "Energy lift"])), 2);
        assert_eq!(scorer.score(&drink("b", &["Energy lift"])), 0);
    }

    #[test]
    fn test_no_focus_scores_zero() {
        let scorer = FocusScorer::new(None);
        assert_eq!(scorer.score(&drink("a", &["Calming"])), 0);
    }

    #[test]
    fn test_score_all_preserves_order() {
        let f = focus(&["Calming"]);
        let scorer = FocusScorer::new(Some(&f));
        let drinks: Vec<Drink> = (0..64)
            .map(|i| {
                let benefits: &[&str] = if i % 3 == 0 { &["Calming"] } else { &[] };
                drink(&format!("d{}", i), benefits)
            })
            .collect();
        let refs: Vec<&Drink> = drinks.iter().collect();

        let candidates = scorer.score_all(&refs);

        assert_eq!(candidates.len(), 64);
        for (i, candidate) in candidates.iter().enumerate() {
            assert_eq!(candidate.drink.id, format!("d{}", i));
            assert_eq!(candidate.focus_score, usize::from(i % 3 == 0));
        }
    }
}
