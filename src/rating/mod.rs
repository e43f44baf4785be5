//! Pairwise rating model
//!
//! This module provides the Elo expected-score and update rules used to
//! score every synthetic match of a round-robin pass.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::RatingModel;
pub use elo::{EloParameters, EloRatingModel};
