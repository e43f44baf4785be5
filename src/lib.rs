//! elo-lists - Elo ratings from independently ordered ranking lists
//!
//! Every list is turned into a round-robin tournament in which the item
//! listed higher always wins. Repeating the tournament a fixed number of
//! times converges each item's Elo rating, and ratings of items that appear
//! in several lists are averaged into one aggregate ranking.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod lists;
pub mod output;
pub mod pipeline;
pub mod rating;
pub mod tournament;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RankingError, Result};
pub use types::*;

// Re-export key components
pub use aggregate::Aggregator;
pub use lists::{DirectoryListProvider, ListProvider, StaticListProvider};
pub use pipeline::RankingPipeline;
pub use rating::{EloRatingModel, RatingModel};
pub use tournament::ConvergenceDriver;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
