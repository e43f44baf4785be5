//! Rating model trait
//!
//! This module defines the interface the tournament uses to score a single
//! synthetic match between two rated items.

use crate::types::Winner;

/// Trait for pairwise rating models
pub trait RatingModel: Send + Sync {
    /// Expected score of A against B, strictly between 0 and 1
    fn expected_win_probability(&self, rating_a: f64, rating_b: f64) -> f64;

    /// Maximum swing for a side currently rated `rating`
    fn k_factor(&self, rating: f64) -> f64;

    /// New (unrounded) ratings of A and B after a decisive match
    ///
    /// Each side's update is scaled by its own K-factor, never the opponent's.
    fn update_ratings(&self, rating_a: f64, rating_b: f64, winner: Winner) -> (f64, f64) {
        let expected_a = self.expected_win_probability(rating_a, rating_b);
        let expected_b = 1.0 - expected_a;

        let score_a = if winner == Winner::A { 1.0 } else { 0.0 };
        let score_b = 1.0 - score_a;

        (
            rating_a + self.k_factor(rating_a) * (score_a - expected_a),
            rating_b + self.k_factor(rating_b) * (score_b - expected_b),
        )
    }
}
