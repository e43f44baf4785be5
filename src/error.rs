//! Error types for the rating pipeline
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

use crate::types::{DeclaredRank, ItemId};

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific ranking scenarios
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("Two entries in list '{list}' share declared rank {rank}")]
    DuplicateDeclaredRank { list: String, rank: DeclaredRank },

    #[error("Item '{item}' appears more than once in list '{list}'")]
    DuplicateItem { list: String, item: ItemId },

    #[error("Rating for '{item}' in list '{list}' is not finite")]
    NonFiniteRating { list: String, item: ItemId },

    #[error("Failed to load ranking lists from {path}: {reason}")]
    ListLoadFailed { path: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
