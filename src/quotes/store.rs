//! # Quote Store
//!
//! In-memory storage for quotes keyed by a store-assigned identifier.
//!
//! Identifiers come from a counter that starts at 0 and only moves forward;
//! deleting a quote never frees its identifier. The map, the counter and the
//! sampling RNG share one lock, so an `add` (assign + increment) and a
//! `delete` never interleave.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::model::{Quote, QuoteId};

#[derive(Debug)]
struct StoreState {
    quotes: BTreeMap<QuoteId, Quote>,
    next_id: QuoteId,
    rng: StdRng,
}

impl StoreState {
    fn new(rng: StdRng) -> Self {
        Self {
            quotes: BTreeMap::new(),
            next_id: 0,
            rng,
        }
    }
}

/// Quote storage shared by all request handlers
#[derive(Debug)]
pub struct QuoteStore {
    state: RwLock<StoreState>,
}

impl QuoteStore {
    /// Empty store with an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::new(StdRng::from_entropy())),
        }
    }

    /// Empty store whose random sampling is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: RwLock::new(StoreState::new(StdRng::seed_from_u64(seed))),
        }
    }

    // Operations are total, so a panic in another holder does not make the
    // data unusable.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drop every quote and restart identifiers at 0
    pub fn reset(&self) {
        let mut state = self.write();
        state.quotes.clear();
        state.next_id = 0;
    }

    /// Store a quote under the next identifier, ignoring `quote.id`
    pub fn add(&self, mut quote: Quote) -> QuoteId {
        let mut state = self.write();
        let id = state.next_id;
        quote.id = id;
        state.quotes.insert(id, quote);
        state.next_id += 1;
        id
    }

    /// All quotes, ordered by identifier
    pub fn list_all(&self) -> Vec<Quote> {
        self.read().quotes.values().cloned().collect()
    }

    /// Quotes whose author matches exactly (case-sensitive)
    pub fn list_by_author(&self, author: &str) -> Vec<Quote> {
        self.read()
            .quotes
            .values()
            .filter(|q| q.author == author)
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.read().quotes.len()
    }

    pub fn exists(&self, id: QuoteId) -> bool {
        self.read().quotes.contains_key(&id)
    }

    /// Identifiers currently stored, ascending
    pub fn ids(&self) -> Vec<QuoteId> {
        self.read().quotes.keys().copied().collect()
    }

    /// Identifier the next `add` will assign
    pub fn next_id(&self) -> QuoteId {
        self.read().next_id
    }

    /// Pick one of `candidates` uniformly at random and return its quote
    ///
    /// Returns `None` when `candidates` is empty or the drawn identifier is
    /// no longer stored.
    pub fn sample_random(&self, candidates: &[QuoteId]) -> Option<Quote> {
        let mut state = self.write();
        let id = *candidates.choose(&mut state.rng)?;
        state.quotes.get(&id).cloned()
    }

    /// Remove a quote; absent identifiers are ignored
    pub fn delete(&self, id: QuoteId) {
        self.write().quotes.remove(&id);
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}
