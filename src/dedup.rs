// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-process transaction deduplication.
//!
//! The pipeline asks [`admit`] before parsing and calls [`commit`] only after
//! the report for that hash has been built and a delivery attempt made, so a
//! parse failure still marks the hash as handled and is never retried.
//!
//! The default set grows for the process lifetime. Long-lived deployments can
//! bound it with a recency window that evicts the oldest committed hashes,
//! trading a sliver of at-most-once coverage for bounded memory.
//!
//! [`admit`]: Deduplicator::admit
//! [`commit`]: Deduplicator::commit

use std::collections::{HashSet, VecDeque};
use std::num::NonZeroUsize;

use tracing::trace;

/// Tracks transaction hashes already handled this process lifetime.
#[derive(Debug)]
pub struct Deduplicator {
    seen: HashSet<String>,
    /// Commit order, kept only when a recency window bounds the set.
    window: Option<(VecDeque<String>, NonZeroUsize)>,
}

impl Deduplicator {
    /// A set that grows for the process lifetime.
    pub fn unbounded() -> Self {
        Self {
            seen: HashSet::new(),
            window: None,
        }
    }

    /// A set bounded to the `capacity` most recently committed hashes.
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            seen: HashSet::new(),
            window: Some((VecDeque::with_capacity(capacity.get()), capacity)),
        }
    }

    /// Whether `hash` should enter the pipeline.
    ///
    /// Returns `true` if the hash has not been committed; the hash is not
    /// recorded here. Call [`commit`](Self::commit) after the delivery
    /// attempt.
    pub fn admit(&self, hash: &str) -> bool {
        !self.seen.contains(hash)
    }

    /// Record `hash` as handled, evicting the oldest committed hash if the
    /// recency window is full.
    pub fn commit(&mut self, hash: String) {
        if !self.seen.insert(hash.clone()) {
            return;
        }

        if let Some((order, capacity)) = &mut self.window {
            order.push_back(hash);
            if order.len() > capacity.get() {
                if let Some(evicted) = order.pop_front() {
                    trace!(hash = %evicted, "Evicting hash from dedup window");
                    self.seen.remove(&evicted);
                }
            }
        }
    }

    /// Number of committed hashes currently tracked.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no hash has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_true_until_committed() {
        let mut dedup = Deduplicator::unbounded();

        assert!(dedup.admit("AA"));
        assert!(dedup.admit("AA"), "admit must not record");

        dedup.commit("AA".to_string());
        assert!(!dedup.admit("AA"));
    }

    #[test]
    fn test_hashes_are_independent() {
        let mut dedup = Deduplicator::unbounded();

        dedup.commit("AA".to_string());
        assert!(!dedup.admit("AA"));
        assert!(dedup.admit("BB"));

        dedup.commit("BB".to_string());
        assert!(!dedup.admit("AA"));
        assert!(!dedup.admit("BB"));
        assert!(dedup.admit("CC"));
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut dedup = Deduplicator::unbounded();
        dedup.commit("AA".to_string());
        dedup.commit("AA".to_string());
        assert_eq!(dedup.len(), 1);
    }

    #[test]
    fn test_bounded_window_evicts_oldest() {
        let mut dedup = Deduplicator::bounded(NonZeroUsize::new(2).unwrap());

        dedup.commit("AA".to_string());
        dedup.commit("BB".to_string());
        assert!(!dedup.admit("AA"));
        assert!(!dedup.admit("BB"));

        dedup.commit("CC".to_string());
        assert!(dedup.admit("AA"), "oldest hash evicted");
        assert!(!dedup.admit("BB"));
        assert!(!dedup.admit("CC"));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn test_bounded_window_idempotent_commit_does_not_evict() {
        let mut dedup = Deduplicator::bounded(NonZeroUsize::new(2).unwrap());

        dedup.commit("AA".to_string());
        dedup.commit("BB".to_string());
        dedup.commit("BB".to_string());

        assert!(!dedup.admit("AA"));
        assert!(!dedup.admit("BB"));
    }
}
