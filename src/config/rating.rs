//! Rating system configuration

use crate::error::{RankingError, Result};
use serde::{Deserialize, Serialize};

/// One step of the K-factor schedule: ratings up to and including
/// `max_rating` move by at most `k` per comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KFactorTier {
    pub max_rating: f64,
    pub k: f64,
}

/// Tunable constants of the rating model, tournament and aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Seed rating for every item the first time it is seen
    pub default_rating: f64,
    /// Logistic scale of the expected score curve
    pub scale_factor: f64,
    /// Round-robin passes per list
    pub iterations: u32,
    /// Ascending K-factor schedule
    pub k_factor_tiers: Vec<KFactorTier>,
    /// K used above the last tier
    pub k_factor_floor: f64,
    /// Aggregate averages must be strictly above this to be reported
    pub min_aggregate_rating: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_rating: 1000.0,
            scale_factor: 400.0,
            iterations: 100,
            k_factor_tiers: vec![
                KFactorTier {
                    max_rating: 2100.0,
                    k: 32.0,
                },
                KFactorTier {
                    max_rating: 2400.0,
                    k: 24.0,
                },
            ],
            k_factor_floor: 16.0,
            min_aggregate_rating: 1000.0,
        }
    }
}

impl RatingConfig {
    /// Use a single K-factor for every rating
    pub fn with_flat_k_factor(mut self, k: f64) -> Self {
        self.k_factor_tiers.clear();
        self.k_factor_floor = k;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(config_error("Scale factor must be positive"));
        }

        if !self.default_rating.is_finite() {
            return Err(config_error("Default rating must be finite"));
        }

        if !self.min_aggregate_rating.is_finite() {
            return Err(config_error("Minimum aggregate rating must be finite"));
        }

        if !self.k_factor_floor.is_finite() || self.k_factor_floor <= 0.0 {
            return Err(config_error("K-factor floor must be positive"));
        }

        let mut previous: Option<f64> = None;
        for tier in &self.k_factor_tiers {
            if !tier.k.is_finite() || tier.k <= 0.0 {
                return Err(config_error(&format!(
                    "K-factor for tier up to {} must be positive",
                    tier.max_rating
                )));
            }
            if !tier.max_rating.is_finite() {
                return Err(config_error("K-factor tier bounds must be finite"));
            }
            if let Some(prev) = previous {
                if tier.max_rating <= prev {
                    return Err(config_error("K-factor tiers must be strictly ascending"));
                }
            }
            previous = Some(tier.max_rating);
        }

        Ok(())
    }
}

fn config_error(message: &str) -> anyhow::Error {
    RankingError::ConfigurationError {
        message: message.to_string(),
    }
    .into()
}
