//! End-to-end rating pipeline
//!
//! Loads lists from a provider, seeds and converges each one independently,
//! then aggregates the survivors. A list that fails is reported and left out
//! of the aggregate; it never aborts the other lists.

use crate::aggregate::Aggregator;
use crate::config::rating::RatingConfig;
use crate::error::Result;
use crate::lists::{ListProvider, RawList};
use crate::rating::{EloRatingModel, RatingModel};
use crate::tournament::ConvergenceDriver;
use crate::types::{ListResult, NamedList, RankingReport, SkippedList};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the full load, converge and aggregate sequence
pub struct RankingPipeline<M = EloRatingModel> {
    provider: Arc<dyn ListProvider>,
    driver: ConvergenceDriver<M>,
    aggregator: Aggregator,
    default_rating: f64,
}

impl RankingPipeline<EloRatingModel> {
    /// Build an Elo pipeline from a rating configuration
    pub fn new(provider: Arc<dyn ListProvider>, config: &RatingConfig) -> Result<Self> {
        Ok(Self {
            provider,
            driver: ConvergenceDriver::from_config(config)?,
            aggregator: Aggregator::new(config.min_aggregate_rating),
            default_rating: config.default_rating,
        })
    }
}

impl<M: RatingModel> RankingPipeline<M> {
    /// Build a pipeline around an arbitrary driver
    pub fn with_driver(
        provider: Arc<dyn ListProvider>,
        driver: ConvergenceDriver<M>,
        aggregator: Aggregator,
        default_rating: f64,
    ) -> Self {
        Self {
            provider,
            driver,
            aggregator,
            default_rating,
        }
    }

    /// Converge a single raw list
    pub fn rank_list(&self, raw: RawList) -> Result<ListResult> {
        let list = NamedList::from_items(raw.name, raw.items, self.default_rating)?;
        self.driver.run(list)
    }

    /// Run every list and aggregate the results
    pub fn run(&self) -> Result<RankingReport> {
        info!("Loading lists from {}", self.provider.describe());
        let loaded = self.provider.load_lists()?;

        let mut lists = Vec::with_capacity(loaded.lists.len());
        let mut skipped = loaded.skipped;

        for raw in loaded.lists {
            let name = raw.name.clone();
            match self.rank_list(raw) {
                Ok(result) => {
                    info!("Ranked list '{}' ({} items)", name, result.standings.len());
                    lists.push(result);
                }
                Err(e) => {
                    warn!("Skipping list '{}': {}", name, e);
                    skipped.push(SkippedList {
                        name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let aggregate = self.aggregator.aggregate(&lists);

        Ok(RankingReport {
            generated_at: Utc::now(),
            min_aggregate_rating: self.aggregator.min_rating(),
            lists,
            aggregate,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lists::provider::MockListProvider;
    use crate::lists::{LoadedLists, StaticListProvider};

    #[test]
    fn test_duplicate_item_list_is_skipped() {
        let provider = StaticListProvider::new()
            .with_list("good", &["a", "b"])
            .with_list("bad", &["a", "a"]);
        let pipeline = RankingPipeline::new(Arc::new(provider), &RatingConfig::default()).unwrap();

        let report = pipeline.run().unwrap();
        assert_eq!(report.lists.len(), 1);
        assert_eq!(report.lists[0].name, "good");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "bad");
        assert!(report.skipped[0].reason.contains("more than once"));

        // Only the surviving list contributes
        assert_eq!(report.aggregate.len(), 1);
        assert_eq!(report.aggregate[0].item, "a");
        assert_eq!(report.aggregate[0].appearances, 1);
    }

    #[test]
    fn test_provider_failure_is_fatal() {
        let mut provider = MockListProvider::new();
        provider
            .expect_describe()
            .returning(|| "mock".to_string());
        provider
            .expect_load_lists()
            .times(1)
            .returning(|| Err(anyhow::anyhow!("disk on fire")));

        let pipeline = RankingPipeline::new(Arc::new(provider), &RatingConfig::default()).unwrap();
        assert!(pipeline.run().is_err());
    }

    #[test]
    fn test_mock_provider_lists_are_ranked() {
        let mut provider = MockListProvider::new();
        provider
            .expect_describe()
            .returning(|| "mock".to_string());
        provider.expect_load_lists().returning(|| {
            Ok(vec![RawList::new(
                "pair",
                vec!["first".to_string(), "second".to_string()],
            )]
            .into())
        });

        let mut config = RatingConfig::default();
        config.iterations = 1;
        let pipeline = RankingPipeline::new(Arc::new(provider), &config).unwrap();

        let report = pipeline.run().unwrap();
        assert_eq!(report.lists[0].standings[0].rating, 1016);
        assert_eq!(report.lists[0].standings[1].rating, 984);
        assert_eq!(report.aggregate.len(), 1);
        assert_eq!(report.aggregate[0].rating, 1016);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_single_item_list_passes_through_seed() {
        let provider = StaticListProvider::new().with_list("solo", &["lonely"]);
        let mut config = RatingConfig::default();
        config.min_aggregate_rating = 999.0;
        let pipeline = RankingPipeline::new(Arc::new(provider), &config).unwrap();

        let report = pipeline.run().unwrap();
        assert_eq!(report.aggregate.len(), 1);
        assert_eq!(report.aggregate[0].rating, 1000);
    }

    #[test]
    fn test_unreadable_lists_are_reported_as_skipped() {
        let mut provider = MockListProvider::new();
        provider
            .expect_describe()
            .returning(|| "mock".to_string());
        provider.expect_load_lists().returning(|| {
            Ok(LoadedLists {
                lists: vec![RawList::new("ok", vec!["a".to_string(), "b".to_string()])],
                skipped: vec![SkippedList {
                    name: "garbled".to_string(),
                    reason: "stream did not contain valid UTF-8".to_string(),
                }],
            })
        });

        let pipeline = RankingPipeline::new(Arc::new(provider), &RatingConfig::default()).unwrap();
        let report = pipeline.run().unwrap();

        assert_eq!(report.lists.len(), 1);
        assert_eq!(report.lists[0].name, "ok");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "garbled");
        assert_eq!(report.aggregate[0].item, "a");
    }
}
