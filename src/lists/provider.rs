//! Ranking list providers
//!
//! This module defines the interface for loading named ranking lists, along
//! with a directory-backed implementation and a static in-memory one.

use crate::error::{RankingError, Result};
use crate::types::{ItemId, SkippedList};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A named list of items, best first, as read from its source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawList {
    pub name: String,
    pub items: Vec<ItemId>,
}

impl RawList {
    pub fn new(name: impl Into<String>, items: Vec<ItemId>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Lists read from a source, plus the ones that could not be read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedLists {
    pub lists: Vec<RawList>,
    pub skipped: Vec<SkippedList>,
}

impl From<Vec<RawList>> for LoadedLists {
    fn from(lists: Vec<RawList>) -> Self {
        Self {
            lists,
            skipped: Vec::new(),
        }
    }
}

/// Trait for sources of ranking lists
#[cfg_attr(test, mockall::automock)]
pub trait ListProvider: Send + Sync {
    /// Load every list, in the order they should be processed
    ///
    /// An error means the source as a whole is unusable. A single list that
    /// cannot be read is reported in [`LoadedLists::skipped`] instead.
    fn load_lists(&self) -> Result<LoadedLists>;

    /// Human readable description of where lists come from
    fn describe(&self) -> String;
}

/// Reads one list per file from a directory
///
/// The list name is the file name up to its last `.`. Lines are trimmed and
/// blank lines skipped. Lists are returned sorted by name. Files that cannot
/// be read as UTF-8 text are skipped.
#[derive(Debug, Clone)]
pub struct DirectoryListProvider {
    dir: PathBuf,
}

impl DirectoryListProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load_failed(&self, reason: impl ToString) -> anyhow::Error {
        RankingError::ListLoadFailed {
            path: self.dir.display().to_string(),
            reason: reason.to_string(),
        }
        .into()
    }
}

/// File name without its final extension
pub fn list_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    }
}

/// Non-empty trimmed lines, in order
pub fn parse_items(contents: &str) -> Vec<ItemId> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl ListProvider for DirectoryListProvider {
    fn load_lists(&self) -> Result<LoadedLists> {
        let entries = fs::read_dir(&self.dir).map_err(|e| self.load_failed(e))?;

        let mut lists = Vec::new();
        let mut skipped = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.load_failed(e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!("Skipping file with non UTF-8 name: {}", path.display());
                continue;
            };

            let name = list_name(file_name);
            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) => {
                    let error = RankingError::ListLoadFailed {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    };
                    warn!("Skipping list '{}': {}", name, error);
                    skipped.push(SkippedList {
                        name: name.to_string(),
                        reason: error.to_string(),
                    });
                    continue;
                }
            };

            let list = RawList::new(name, parse_items(&contents));
            debug!("Loaded list '{}' with {} items", list.name, list.items.len());
            lists.push(list);
        }

        lists.sort_by(|a, b| a.name.cmp(&b.name));
        skipped.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(LoadedLists { lists, skipped })
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}

/// In-memory list provider, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticListProvider {
    lists: Vec<RawList>,
}

impl StaticListProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a list; processing follows insertion order
    pub fn with_list(mut self, name: impl Into<String>, items: &[&str]) -> Self {
        self.lists.push(RawList::new(
            name,
            items.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }
}

impl ListProvider for StaticListProvider {
    fn load_lists(&self) -> Result<LoadedLists> {
        Ok(self.lists.clone().into())
    }

    fn describe(&self) -> String {
        format!("{} static lists", self.lists.len())
    }
}
