//! Elo rating model with a tiered K-factor
//!
//! Expected scores follow the logistic curve `1 / (1 + 10^((b - a) / S))`.
//! The K-factor is looked up from the rating of the side being updated, so
//! a match between items in different tiers moves them by different amounts.

use crate::config::rating::{KFactorTier, RatingConfig};
use crate::rating::calculator::RatingModel;
use serde::{Deserialize, Serialize};

/// Parameters of the Elo model, taken from [`RatingConfig`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EloParameters {
    pub scale_factor: f64,
    pub k_factor_tiers: Vec<KFactorTier>,
    pub k_factor_floor: f64,
}

impl From<&RatingConfig> for EloParameters {
    fn from(config: &RatingConfig) -> Self {
        Self {
            scale_factor: config.scale_factor,
            k_factor_tiers: config.k_factor_tiers.clone(),
            k_factor_floor: config.k_factor_floor,
        }
    }
}

/// Elo rating model
#[derive(Debug, Clone)]
pub struct EloRatingModel {
    params: EloParameters,
}

impl EloRatingModel {
    /// Create a new Elo model from a validated rating configuration
    pub fn new(config: &RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self {
            params: EloParameters::from(config),
        })
    }

    pub fn params(&self) -> &EloParameters {
        &self.params
    }
}

impl Default for EloRatingModel {
    fn default() -> Self {
        Self {
            params: EloParameters::from(&RatingConfig::default()),
        }
    }
}

impl RatingModel for EloRatingModel {
    fn expected_win_probability(&self, rating_a: f64, rating_b: f64) -> f64 {
        1.0 / (1.0 + 10.0_f64.powf((rating_b - rating_a) / self.params.scale_factor))
    }

    fn k_factor(&self, rating: f64) -> f64 {
        self.params
            .k_factor_tiers
            .iter()
            .find(|tier| rating <= tier.max_rating)
            .map(|tier| tier.k)
            .unwrap_or(self.params.k_factor_floor)
    }
}
