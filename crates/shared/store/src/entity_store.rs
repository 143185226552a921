use blaseball_core::{Division, League, LeagueData, SubLeague, Team};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// The four keyed collections, always mutated together under one lock
#[derive(Debug, Default)]
struct Collections {
    teams: BTreeMap<String, Team>,
    sub_leagues: BTreeMap<String, SubLeague>,
    divisions: BTreeMap<String, Division>,
    leagues: BTreeMap<String, League>,
}

/// Inserted vs replaced record counts for one entity kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub inserted: usize,
    pub replaced: usize,
}

/// Result of merging one league data update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub teams: KindCounts,
    pub sub_leagues: KindCounts,
    pub divisions: KindCounts,
    pub leagues: KindCounts,
}

impl MergeReport {
    /// Records that were not in the store before this merge
    pub fn inserted(&self) -> usize {
        self.teams.inserted
            + self.sub_leagues.inserted
            + self.divisions.inserted
            + self.leagues.inserted
    }

    /// Records that overwrote an existing key
    pub fn replaced(&self) -> usize {
        self.teams.replaced
            + self.sub_leagues.replaced
            + self.divisions.replaced
            + self.leagues.replaced
    }
}

/// Number of records held per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub teams: usize,
    pub sub_leagues: usize,
    pub divisions: usize,
    pub leagues: usize,
}

/// In-memory entity store
///
/// Readers get owned copies; nothing handed out borrows the lock.
/// Listings are ordered by identity key.
#[derive(Debug, Default)]
pub struct EntityStore {
    inner: RwLock<Collections>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a league data update, replacing every record by key.
    ///
    /// A record whose key already exists replaces the stored one entirely.
    /// Kinds absent from the update are left untouched.
    pub fn merge(&self, data: LeagueData) -> MergeReport {
        let LeagueData {
            teams,
            subleagues,
            divisions,
            leagues,
        } = data;

        let mut inner = self.inner.write();
        MergeReport {
            teams: upsert(&mut inner.teams, teams, |t| &t.id),
            sub_leagues: upsert(&mut inner.sub_leagues, subleagues, |s| &s.id),
            divisions: upsert(&mut inner.divisions, divisions, |d| &d.id),
            leagues: upsert(&mut inner.leagues, leagues, |l| &l.id),
        }
    }

    pub fn team(&self, id: &str) -> Option<Team> {
        self.inner.read().teams.get(id).cloned()
    }

    pub fn sub_league(&self, id: &str) -> Option<SubLeague> {
        self.inner.read().sub_leagues.get(id).cloned()
    }

    pub fn division(&self, id: &str) -> Option<Division> {
        self.inner.read().divisions.get(id).cloned()
    }

    pub fn league(&self, id: &str) -> Option<League> {
        self.inner.read().leagues.get(id).cloned()
    }

    pub fn teams(&self) -> Vec<Team> {
        self.inner.read().teams.values().cloned().collect()
    }

    pub fn sub_leagues(&self) -> Vec<SubLeague> {
        self.inner.read().sub_leagues.values().cloned().collect()
    }

    pub fn divisions(&self) -> Vec<Division> {
        self.inner.read().divisions.values().cloned().collect()
    }

    pub fn leagues(&self) -> Vec<League> {
        self.inner.read().leagues.values().cloned().collect()
    }

    /// Record counts per kind, read under one lock acquisition
    pub fn stats(&self) -> StoreStats {
        let inner = self.inner.read();
        StoreStats {
            teams: inner.teams.len(),
            sub_leagues: inner.sub_leagues.len(),
            divisions: inner.divisions.len(),
            leagues: inner.leagues.len(),
        }
    }
}

fn upsert<T>(
    map: &mut BTreeMap<String, T>,
    records: Vec<T>,
    key: impl Fn(&T) -> &String,
) -> KindCounts {
    let mut counts = KindCounts::default();
    for record in records {
        let id = key(&record).clone();
        if map.insert(id, record).is_some() {
            counts.replaced += 1;
        } else {
            counts.inserted += 1;
        }
    }
    counts
}
