//! Cross-list aggregation
//!
//! Combines the converged ratings of every list into one averaged rating per
//! item. Items are tracked in first-discovery order, which is also the
//! tie-break order of the final descending sort.

use crate::types::{AggregateEntry, ItemId, ListResult};
use std::collections::HashMap;
use tracing::info;

/// Running total of one item's contributions
#[derive(Debug, Clone)]
struct Contribution {
    item: ItemId,
    sum: i64,
    count: usize,
}

impl Contribution {
    fn mean(&self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}

/// Averages item ratings across lists and filters by a minimum rating
#[derive(Debug, Clone)]
pub struct Aggregator {
    min_rating: f64,
}

impl Aggregator {
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Average every item over the lists it appears in.
    ///
    /// Only items whose mean is strictly above the minimum survive. Means are
    /// truncated toward zero and the result is sorted by rating, highest
    /// first, with ties left in first-discovery order.
    pub fn aggregate(&self, results: &[ListResult]) -> Vec<AggregateEntry> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut contributions: Vec<Contribution> = Vec::new();

        for result in results {
            for standing in &result.standings {
                let slot = *index.entry(standing.item.as_str()).or_insert_with(|| {
                    contributions.push(Contribution {
                        item: standing.item.clone(),
                        sum: 0,
                        count: 0,
                    });
                    contributions.len() - 1
                });
                contributions[slot].sum += standing.rating;
                contributions[slot].count += 1;
            }
        }

        let seen = contributions.len();
        let mut aggregate: Vec<AggregateEntry> = contributions
            .into_iter()
            .filter(|c| c.mean() > self.min_rating)
            .map(|c| AggregateEntry {
                rating: c.mean().trunc() as i64,
                appearances: c.count,
                item: c.item,
            })
            .collect();

        // Stable: equal ratings keep discovery order
        aggregate.sort_by(|a, b| b.rating.cmp(&a.rating));

        info!(
            "Aggregated {} items from {} lists, {} above {}",
            seen,
            results.len(),
            aggregate.len(),
            self.min_rating
        );

        aggregate
    }
}
