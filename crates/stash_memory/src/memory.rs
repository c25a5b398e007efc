// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The strong-reference in-memory cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use hourglass::Clock;
use parking_lot::RwLock;
use stash_core::{Cache, CacheEntry};

use crate::builder::InMemoryCacheBuilder;

/// A thread-safe in-memory cache with time-bounded entries.
///
/// The backing store is a hash map guarded by one reader/writer lock: `get`
/// takes the shared mode, `put` and `delete` the exclusive mode, so reads
/// never block each other. Each operation holds the lock for a single map
/// access and nothing else, and never performs I/O, so no call can stall
/// another beyond that bound.
///
/// Expired entries are detected when read; they are not swept in the
/// background and may occupy memory until replaced or deleted.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use hourglass::Clock;
/// use stash_core::Cache;
/// use stash_memory::InMemoryCache;
///
/// # futures::executor::block_on(async {
/// let clock = Clock::new();
/// let cache = InMemoryCache::new(clock.clone());
///
/// cache.put("id", 42, clock.now() + Duration::from_secs(60)).await;
/// assert_eq!(cache.get("id", Duration::ZERO).await, Some(42));
///
/// cache.delete("id").await;
/// assert_eq!(cache.get("id", Duration::ZERO).await, None);
/// # });
/// ```
pub struct InMemoryCache<V> {
    inner: Arc<Shared<V>>,
}

struct Shared<V> {
    clock: Clock,
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V> std::fmt::Debug for InMemoryCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCache")
            .field("clock", &self.inner.clock)
            .finish_non_exhaustive()
    }
}

impl<V> Clone for InMemoryCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> InMemoryCache<V> {
    /// Creates a new empty cache reading time from the given clock.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self::builder(clock).build()
    }

    /// Creates a new builder for configuring an in-memory cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use hourglass::Clock;
    /// use stash_memory::InMemoryCache;
    ///
    /// let cache = InMemoryCache::<i32>::builder(Clock::new())
    ///     .initial_capacity(100)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder(clock: Clock) -> InMemoryCacheBuilder<V> {
        InMemoryCacheBuilder::new(clock)
    }

    pub(crate) fn from_builder(builder: InMemoryCacheBuilder<V>) -> Self {
        let entries = match builder.initial_capacity {
            Some(capacity) => HashMap::with_capacity(capacity),
            None => HashMap::new(),
        };

        Self {
            inner: Arc::new(Shared {
                clock: builder.clock,
                entries: RwLock::new(entries),
            }),
        }
    }

    /// Returns the number of stored entries, including entries that have
    /// expired but have not been replaced or deleted yet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    /// Returns `true` if the cache contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.read().is_empty()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.entries.write().clear();
    }
}

impl<V> Cache<V> for InMemoryCache<V>
where
    V: Clone + Send + Sync,
{
    async fn get(&self, id: &str, minimum_lifetime: Duration) -> Option<V> {
        // Read the clock before taking the lock; the lock covers exactly one
        // map access.
        let now = self.inner.clock.now();
        let entries = self.inner.entries.read();
        entries
            .get(id)
            .filter(|entry| entry.has_lifetime(now, minimum_lifetime))
            .map(|entry| entry.value().clone())
    }

    async fn put(&self, id: &str, value: V, expires_at: Instant) {
        // Build the entry before taking the lock; the lock covers exactly
        // one map access.
        let id = id.to_owned();
        let entry = CacheEntry::new(value, expires_at);
        self.inner.entries.write().insert(id, entry);
    }

    async fn delete(&self, id: &str) {
        self.inner.entries.write().remove(id);
    }
}
