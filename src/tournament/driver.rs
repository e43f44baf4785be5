//! Convergence driver
//!
//! Runs a fixed number of round-robin passes over one list. There is no
//! early exit: every list gets exactly `iterations` passes.

use crate::config::rating::RatingConfig;
use crate::error::{RankingError, Result};
use crate::rating::{EloRatingModel, RatingModel};
use crate::tournament::round_robin::{pair_count, run_pass};
use crate::types::{ListResult, ListStanding, NamedList};
use std::collections::HashSet;
use tracing::debug;

/// Drives repeated round-robin passes with a shared rating model
#[derive(Debug, Clone)]
pub struct ConvergenceDriver<M = EloRatingModel> {
    model: M,
    iterations: u32,
}

impl ConvergenceDriver<EloRatingModel> {
    /// Create an Elo driver from the rating configuration
    pub fn from_config(config: &RatingConfig) -> Result<Self> {
        Ok(Self::new(EloRatingModel::new(config)?, config.iterations))
    }
}

impl<M: RatingModel> ConvergenceDriver<M> {
    pub fn new(model: M, iterations: u32) -> Self {
        Self { model, iterations }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Run every pass over `list`, mutating its ratings in place
    pub fn converge(&self, list: &mut NamedList) -> Result<()> {
        validate_ranks(list)?;

        for _ in 0..self.iterations {
            run_pass(&list.name, &mut list.entries, &self.model)?;
        }

        debug!(
            "List '{}': {} passes of {} comparisons",
            list.name,
            self.iterations,
            pair_count(list.len())
        );

        Ok(())
    }

    /// Converge `list` and return its final standings in list order
    pub fn run(&self, mut list: NamedList) -> Result<ListResult> {
        self.converge(&mut list)?;

        Ok(ListResult {
            standings: list.entries.iter().map(ListStanding::from).collect(),
            name: list.name,
        })
    }
}

/// Declared ranks must be unique within a list
fn validate_ranks(list: &NamedList) -> Result<()> {
    let mut seen = HashSet::with_capacity(list.len());
    for entry in &list.entries {
        if !seen.insert(entry.declared_rank) {
            return Err(RankingError::DuplicateDeclaredRank {
                list: list.name.clone(),
                rank: entry.declared_rank,
            }
            .into());
        }
    }
    Ok(())
}
