//! Ranking list loading

pub mod provider;

pub use provider::{
    DirectoryListProvider, ListProvider, LoadedLists, RawList, StaticListProvider,
};
