//! Test fixtures shared by the integration tests

use elo_lists::error::Result;
use elo_lists::lists::{ListProvider, LoadedLists, RawList};
use elo_lists::rating::{EloRatingModel, RatingModel};
use elo_lists::types::Winner;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Elo model that counts how often each operation is called
#[derive(Debug, Default)]
pub struct CountingRatingModel {
    inner: EloRatingModel,
    updates: AtomicUsize,
}

impl CountingRatingModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl RatingModel for CountingRatingModel {
    fn expected_win_probability(&self, rating_a: f64, rating_b: f64) -> f64 {
        self.inner.expected_win_probability(rating_a, rating_b)
    }

    fn k_factor(&self, rating: f64) -> f64 {
        self.inner.k_factor(rating)
    }

    fn update_ratings(&self, rating_a: f64, rating_b: f64, winner: Winner) -> (f64, f64) {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update_ratings(rating_a, rating_b, winner)
    }
}

/// Provider that records how many times it was asked for lists
#[derive(Debug, Default)]
pub struct RecordingListProvider {
    lists: Vec<RawList>,
    loads: Mutex<usize>,
}

impl RecordingListProvider {
    pub fn new(lists: Vec<RawList>) -> Self {
        Self {
            lists,
            loads: Mutex::new(0),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.lock().map(|n| *n).unwrap_or(0)
    }
}

impl ListProvider for RecordingListProvider {
    fn load_lists(&self) -> Result<LoadedLists> {
        if let Ok(mut loads) = self.loads.lock() {
            *loads += 1;
        }
        Ok(self.lists.clone().into())
    }

    fn describe(&self) -> String {
        "recording provider".to_string()
    }
}

/// Build a raw list from string slices
pub fn raw(name: &str, items: &[&str]) -> RawList {
    RawList::new(name, items.iter().map(|s| s.to_string()).collect())
}

/// Write one list file per (file name, contents) pair
pub fn write_lists(dir: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}
