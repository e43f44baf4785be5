//! Common types used throughout the rating pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Opaque identifier of a ranked item (e.g. a store name)
pub type ItemId = String;

/// Position of an item in its source list, 0 = best
pub type DeclaredRank = usize;

/// Which side of a synthetic match won. Draws are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    A,
    B,
}

impl Winner {
    /// The entry with the numerically smaller declared rank wins
    pub fn from_ranks(rank_a: DeclaredRank, rank_b: DeclaredRank) -> Option<Self> {
        match rank_a.cmp(&rank_b) {
            std::cmp::Ordering::Less => Some(Winner::A),
            std::cmp::Ordering::Greater => Some(Winner::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::A => write!(f, "A"),
            Winner::B => write!(f, "B"),
        }
    }
}

/// One item of a list together with its declared rank and current rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub item: ItemId,
    pub declared_rank: DeclaredRank,
    pub rating: f64,
}

impl ListEntry {
    pub fn new(item: impl Into<ItemId>, declared_rank: DeclaredRank, rating: f64) -> Self {
        Self {
            item: item.into(),
            declared_rank,
            rating,
        }
    }
}

/// A named, ordered list of entries processed independently of other lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedList {
    pub name: String,
    pub entries: Vec<ListEntry>,
}

impl NamedList {
    /// Seed a list from its items in best-to-worst order.
    ///
    /// Every item gets `default_rating` and its position as declared rank.
    /// Repeated items are rejected.
    pub fn from_items(
        name: impl Into<String>,
        items: Vec<ItemId>,
        default_rating: f64,
    ) -> crate::error::Result<Self> {
        let name = name.into();
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.as_str()) {
                return Err(crate::error::RankingError::DuplicateItem {
                    list: name,
                    item: item.clone(),
                }
                .into());
            }
        }

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(rank, item)| ListEntry::new(item, rank, default_rating))
            .collect();

        Ok(Self { name, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Final standing of one entry in a converged list, ratings as integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStanding {
    pub item: ItemId,
    pub declared_rank: DeclaredRank,
    pub rating: i64,
}

impl From<&ListEntry> for ListStanding {
    fn from(entry: &ListEntry) -> Self {
        Self {
            item: entry.item.clone(),
            declared_rank: entry.declared_rank,
            // Entries are floored after every comparison, so this is exact
            rating: entry.rating.floor() as i64,
        }
    }
}

/// Converged result of one named list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResult {
    pub name: String,
    pub standings: Vec<ListStanding>,
}

/// Averaged rating of an item across all lists it appears in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateEntry {
    pub item: ItemId,
    pub rating: i64,
    /// Number of lists that contributed a rating
    pub appearances: usize,
}

/// A list that could not be processed and was excluded from aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedList {
    pub name: String,
    pub reason: String,
}

/// Everything produced by one pipeline run, handed to presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub generated_at: DateTime<Utc>,
    pub min_aggregate_rating: f64,
    pub lists: Vec<ListResult>,
    pub aggregate: Vec<AggregateEntry>,
    pub skipped: Vec<SkippedList>,
}
