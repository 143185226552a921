//! Blaseball Entity Store
//!
//! Keyed in-memory index of reference data (teams, sub-leagues, divisions,
//! leagues). League data updates are merged replace-by-key; the store never
//! drops records it has already seen.
//!
//! One writer (the update loop) and any number of readers share the store
//! through an `Arc`. All access goes through a single lock that is held only
//! for the length of a merge or a read copy.

mod entity_store;

pub use entity_store::{EntityStore, KindCounts, MergeReport, StoreStats};
