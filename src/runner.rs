use crossbeam_channel::Sender;
use log::Level;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::SniffConfig;
use crate::core::{ContentKind, classify};
use crate::error::Result;
use crate::utils::cache::{FingerprintCache, Observation};
use crate::utils::hash::{Fingerprint, HexCase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    Started(usize),
    Classified { index: usize, kind: ContentKind },
    Duplicate { index: usize, original: usize },
    Complete(String), // Returns summary line
}

/// Result for one payload of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadRecord {
    pub index: usize,
    pub len: usize,
    pub kind: ContentKind,
    pub fingerprint: Fingerprint,
    /// Index of the earlier payload with identical bytes
    pub duplicate_of: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub records: Vec<PayloadRecord>,
    pub kind_counts: BTreeMap<ContentKind, usize>,
    pub total_bytes: usize,
    pub duplicate_count: usize,
    pub hex_case: HexCase,
}

impl BatchReport {
    pub fn count(&self, kind: ContentKind) -> usize {
        self.kind_counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn summary(&self) -> String {
        let kinds = ContentKind::ALL
            .iter()
            .map(|k| format!("{}={}", k, self.count(*k)))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{} payloads, {} bytes, {} duplicates ({})",
            self.records.len(),
            self.total_bytes,
            self.duplicate_count,
            kinds
        )
    }
}

/// Classifies and fingerprints every payload.
pub fn run_batch(payloads: &[&[u8]], config: &SniffConfig) -> Result<BatchReport> {
    run_batch_with_events(payloads, config, None)
}

/// Same as [`run_batch`], streaming progress events to `notify`.
///
/// Records come back in input order. When dedupe is on, the lowest index of a
/// repeated payload is the original, regardless of which thread hashed it first.
pub fn run_batch_with_events(
    payloads: &[&[u8]],
    config: &SniffConfig,
    notify: Option<Sender<BatchEvent>>,
) -> Result<BatchReport> {
    config.validate()?;

    let level = if config.verbose {
        Level::Info
    } else {
        Level::Debug
    };
    let send = |event: BatchEvent| {
        if let Some(tx) = &notify {
            let _ = tx.send(event);
        }
    };

    log::log!(level, "Sniffing {} payloads", payloads.len());
    send(BatchEvent::Started(payloads.len()));

    let probe = |(index, bytes): (usize, &&[u8])| {
        (index, bytes.len(), classify(bytes), Fingerprint::of(bytes))
    };
    let probed: Vec<(usize, usize, ContentKind, Fingerprint)> =
        if payloads.len() >= config.parallel_threshold {
            payloads.par_iter().enumerate().map(probe).collect()
        } else {
            payloads.iter().enumerate().map(probe).collect()
        };

    // Dedup runs in index order so the first occurrence is always the original
    let cache = FingerprintCache::new();
    let mut records = Vec::with_capacity(probed.len());
    let mut kind_counts: BTreeMap<ContentKind, usize> =
        ContentKind::ALL.into_iter().map(|kind| (kind, 0)).collect();
    let mut total_bytes = 0;
    let mut duplicate_count = 0;

    for (index, len, kind, fingerprint) in probed {
        send(BatchEvent::Classified { index, kind });

        let duplicate_of = if config.dedupe {
            match cache.observe_with(index, fingerprint, kind, len) {
                Observation::New(_) => None,
                Observation::Seen(_, entry) => {
                    log::debug!(
                        "Payload {} duplicates payload {} ({})",
                        index,
                        entry.first_index,
                        fingerprint
                    );
                    send(BatchEvent::Duplicate {
                        index,
                        original: entry.first_index,
                    });
                    duplicate_count += 1;
                    Some(entry.first_index)
                }
            }
        } else {
            None
        };

        *kind_counts.entry(kind).or_default() += 1;
        total_bytes += len;
        records.push(PayloadRecord {
            index,
            len,
            kind,
            fingerprint,
            duplicate_of,
        });
    }

    let report = BatchReport {
        records,
        kind_counts,
        total_bytes,
        duplicate_count,
        hex_case: config.hex_case,
    };

    let summary = report.summary();
    log::log!(level, "{}", summary);
    send(BatchEvent::Complete(summary));

    Ok(report)
}
