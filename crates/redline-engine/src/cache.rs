//! Read-through memo of finished comparisons.
//!
//! Entries are immutable and keyed by content digests, so a changed input
//! simply misses. The cache is bounded; the oldest entry is evicted first.

use crate::commands::compare::{compare, Comparison};
use crate::digest::{compute_comparison_key, compute_content_digest, compute_options_digest};
use redline_core::config::{CompareOptions, DEFAULT_CACHE_ENTRIES};
use redline_core::errors::Result;
use redline_core_types::RequestContext;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone)]
pub struct ComparisonCache {
    capacity: usize,
    entries: HashMap<String, Comparison>,
    /// Keys in insertion order
    order: VecDeque<String>,
    hits: u64,
    misses: u64,
}

impl Default for ComparisonCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_ENTRIES)
    }
}

impl ComparisonCache {
    /// A cache holding at most `capacity` comparisons (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn with_options(options: &CompareOptions) -> Self {
        Self::new(options.cache_entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Return the memoized comparison or compute and store it.
    ///
    /// A hit is re-stamped with the caller's request id.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`compare`]; failures are never cached.
    pub fn get_or_compare(
        &mut self,
        ctx: &RequestContext,
        original: &str,
        modified: &str,
        options: &CompareOptions,
    ) -> Result<Comparison> {
        let key = compute_comparison_key(
            &compute_content_digest(original),
            &compute_content_digest(modified),
            &compute_options_digest(options)?,
        );

        if let Some(cached) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!(
                request_id = ctx.request_id.as_str(),
                cache_hit = true,
                "comparison served from cache"
            );
            let mut comparison = cached.clone();
            comparison.request_id = ctx.request_id.clone();
            return Ok(comparison);
        }

        self.misses += 1;
        tracing::debug!(
            request_id = ctx.request_id.as_str(),
            cache_hit = false,
            "comparison cache miss"
        );
        let comparison = compare(ctx, original, modified, options)?;
        self.insert(key, comparison.clone());
        Ok(comparison)
    }

    fn insert(&mut self, key: String, comparison: Comparison) {
        while self.entries.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, comparison);
    }
}
