mod index;
mod ranking;
mod store;

use parking_lot::RwLock;
use serde::Serialize;

pub use ranking::Suggestion;

use index::PrefixIndex;
use store::TermStore;

pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),
}

/// Engine settings.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Suggestions returned when the caller doesn't ask for a limit.
    pub limit: usize,
    /// Upper bound for a caller-requested limit.
    pub max_limit: usize,
    /// Maximum term length in chars. 0 disables the check.
    pub max_term_len: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            max_limit: 50,
            max_term_len: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registered {
    pub term: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deleted {
    pub deleted: bool,
    pub remaining: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub terms: usize,
    pub nodes: usize,
}

/// Term store, prefix index and the registration sequence, mutated together.
#[derive(Default)]
struct State {
    store: TermStore,
    index: PrefixIndex,
    seq: u64,
}

/// In-memory prefix autocomplete with frequency and recency ranking.
///
/// The store and the index live behind one lock. Writers hold it across both
/// mutations for a key so readers never see a key in one and not the other.
/// Everything returned is an owned snapshot.
pub struct Autocomplete {
    state: RwLock<State>,
    settings: Settings,
}

/// Case-fold a string one char at a time. Unlike `str::to_lowercase` this has
/// no context rules (final sigma), so fold(a + b) == fold(a) + fold(b) and
/// prefixes of folded keys are folded prefixes.
pub fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

impl Autocomplete {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: RwLock::new(State::default()),
            settings,
        }
    }

    /// Register one occurrence of a term.
    pub fn register(&self, term: &str) -> Result<Registered, Error> {
        self.register_weighted(term, 1)
    }

    /// Register `n` occurrences of a term in one step.
    pub fn register_weighted(&self, term: &str, n: u64) -> Result<Registered, Error> {
        if n == 0 {
            return Err(Error::InvalidInput("count should be at least 1".to_string()));
        }

        let display = term.trim();
        if display.is_empty() {
            return Err(Error::InvalidInput("term is required".to_string()));
        }
        let max = self.settings.max_term_len;
        if max > 0 && display.chars().count() > max {
            return Err(Error::InvalidInput("term too long".to_string()));
        }

        let key = fold(display);

        let mut st = self.state.write();
        st.seq += 1;
        let now = st.seq;

        let State { store, index, .. } = &mut *st;
        let rec = store.upsert(&key, display, n, now);
        let out = Registered {
            term: rec.display.clone(),
            count: rec.count,
        };

        if index.insert(&key) {
            log::debug!("new term: {}", out.term);
        }
        debug_assert_eq!(store.len(), index.len());

        Ok(out)
    }

    /// Ranked suggestions for a prefix. Matching is case-insensitive and an
    /// empty prefix matches every term. `limit` defaults to the configured
    /// limit and is clamped to `[1, max_limit]`.
    pub fn autocomplete(
        &self,
        prefix: &str,
        boost: Option<&str>,
        limit: Option<usize>,
    ) -> Vec<Suggestion> {
        let limit = self.clamp_limit(limit);
        let prefix = fold(prefix);
        let boost = boost.map(fold);

        let st = self.state.read();
        if st.index.is_empty() {
            return Vec::new();
        }
        let candidates = st
            .index
            .keys_with_prefix(&prefix)
            .into_iter()
            .filter_map(|k| st.store.get(k))
            .collect();

        ranking::rank(candidates, boost.as_deref(), limit)
    }

    /// Remove one occurrence of a term. The term is dropped from both the
    /// store and the index when its count reaches zero. Unknown terms are not
    /// an error.
    pub fn delete(&self, term: &str) -> Deleted {
        let key = fold(term.trim());
        if key.is_empty() {
            return Deleted {
                deleted: false,
                remaining: 0,
            };
        }

        let mut st = self.state.write();
        let res = st.store.decrement(&key);
        if !res.existed {
            log::debug!("delete of unknown term: {}", key);
        } else if res.removed {
            let unindexed = st.index.remove(&key);
            debug_assert!(unindexed, "removed term {key} was not indexed");
            log::debug!("removed term: {}", key);
        }
        debug_assert_eq!(st.store.len(), st.index.len());

        Deleted {
            deleted: res.removed,
            remaining: res.remaining,
        }
    }

    /// Exact, case-insensitive lookup.
    pub fn get(&self, term: &str) -> Option<Suggestion> {
        let key = fold(term.trim());
        self.state.read().store.get(&key).map(Suggestion::from)
    }

    pub fn stats(&self) -> Stats {
        let st = self.state.read();
        Stats {
            terms: st.store.len(),
            nodes: st.index.node_count(),
        }
    }

    fn clamp_limit(&self, limit: Option<usize>) -> usize {
        let max = self.settings.max_limit.max(1);
        match limit {
            Some(n) => n.clamp(1, max),
            None => self.settings.limit.clamp(1, max),
        }
    }

    /// Every indexed key has a record and the two hold the same number of
    /// keys, so store and index hold exactly the same keys.
    #[cfg(test)]
    fn assert_consistent(&self) {
        let st = self.state.read();
        assert_eq!(st.store.len(), st.index.len());
        for k in st.index.keys_with_prefix("") {
            assert!(st.store.get(k).is_some(), "index key {k} missing from store");
        }
    }
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
