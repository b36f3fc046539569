use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};

use crate::core::{ContentKind, classify};
use crate::utils::hash::Fingerprint;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub kind: ContentKind,
    pub len: usize,
    /// Index of the payload that first produced this fingerprint
    pub first_index: usize,
    /// Number of later payloads with the same fingerprint
    pub hits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    New(Fingerprint),
    Seen(Fingerprint, CacheEntry),
}

/// In-memory dedup map keyed by payload fingerprint.
#[derive(Debug, Default)]
pub struct FingerprintCache {
    entries: DashMap<Fingerprint, CacheEntry>,
}

impl FingerprintCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes and classifies `content`, recording it under `index` if unseen.
    pub fn observe(&self, index: usize, content: &[u8]) -> Observation {
        let fingerprint = Fingerprint::of(content);
        self.observe_with(index, fingerprint, classify(content), content.len())
    }

    /// Records an already computed fingerprint.
    pub fn observe_with(
        &self,
        index: usize,
        fingerprint: Fingerprint,
        kind: ContentKind,
        len: usize,
    ) -> Observation {
        match self.entries.entry(fingerprint) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.hits += 1;
                Observation::Seen(fingerprint, entry.clone())
            }
            Entry::Vacant(vacant) => {
                log::trace!("new fingerprint {} at index {}", fingerprint, index);
                vacant.insert(CacheEntry {
                    kind,
                    len,
                    first_index: index,
                    hits: 0,
                });
                Observation::New(fingerprint)
            }
        }
    }

    /// Returns a clone of the cache entry if it exists.
    /// Cloning avoids holding the shard lock for too long.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<CacheEntry> {
        self.entries.get(fingerprint).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
