// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Mock cache implementations for testing.
//!
//! This module provides [`MockCache`] and [`MockSharedCache`], map-backed
//! caches that record every operation together with its arguments. They are
//! intended for verifying that decorators and adapters forward calls
//! unchanged.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::{Cache, CacheEntry, SharedCache};

/// Recorded cache operation with full context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOp<V> {
    /// A get operation was performed.
    Get {
        /// The id that was looked up.
        id: String,
        /// The minimum lifetime the caller required.
        minimum_lifetime: Duration,
    },
    /// A put operation was performed.
    Put {
        /// The id that was stored.
        id: String,
        /// The value that was stored.
        value: V,
        /// The expiration the value was stored with.
        expires_at: Instant,
    },
    /// A delete operation was performed.
    Delete {
        /// The id that was removed.
        id: String,
    },
}

/// A value-oriented mock cache that records all operations.
///
/// The mock stores entries in a plain map and honors the minimum-lifetime
/// read contract against real time, so tests exercising decorators get
/// contract-faithful behavior underneath.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use stash_core::Cache;
/// use stash_core::testing::{CacheOp, MockCache};
///
/// # futures::executor::block_on(async {
/// let cache = MockCache::new();
/// let expires_at = Instant::now() + Duration::from_secs(60);
///
/// cache.put("id", 42, expires_at).await;
/// assert_eq!(cache.get("id", Duration::ZERO).await, Some(42));
///
/// assert_eq!(
///     cache.operations(),
///     vec![
///         CacheOp::Put { id: "id".to_owned(), value: 42, expires_at },
///         CacheOp::Get { id: "id".to_owned(), minimum_lifetime: Duration::ZERO },
///     ],
/// );
/// # });
/// ```
pub struct MockCache<V> {
    data: Arc<Mutex<HashMap<String, CacheEntry<V>>>>,
    operations: Arc<Mutex<Vec<CacheOp<V>>>>,
}

impl<V> std::fmt::Debug for MockCache<V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockCache")
            .field("data", &self.data)
            .field("operations", &self.operations)
            .finish()
    }
}

impl<V> Clone for MockCache<V> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            operations: Arc::clone(&self.operations),
        }
    }
}

impl<V> Default for MockCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MockCache<V> {
    /// Creates a new empty mock cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(HashMap::new())),
            operations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data.lock().len()
    }

    /// Returns `true` if the cache contains the given id, expired or not.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.data.lock().contains_key(id)
    }
}

impl<V> MockCache<V>
where
    V: Clone,
{
    /// Returns a clone of all recorded operations.
    #[must_use]
    pub fn operations(&self) -> Vec<CacheOp<V>> {
        self.operations.lock().clone()
    }

    /// Clears all recorded operations.
    pub fn clear_operations(&self) {
        self.operations.lock().clear();
    }

    fn record(&self, op: CacheOp<V>) {
        self.operations.lock().push(op);
    }
}

impl<V> Cache<V> for MockCache<V>
where
    V: Clone + Send + Sync,
{
    async fn get(&self, id: &str, minimum_lifetime: Duration) -> Option<V> {
        self.record(CacheOp::Get {
            id: id.to_owned(),
            minimum_lifetime,
        });
        let now = Instant::now();
        let data = self.data.lock();
        data.get(id)
            .filter(|entry| entry.has_lifetime(now, minimum_lifetime))
            .map(|entry| entry.value().clone())
    }

    async fn put(&self, id: &str, value: V, expires_at: Instant) {
        self.record(CacheOp::Put {
            id: id.to_owned(),
            value: value.clone(),
            expires_at,
        });
        self.data.lock().insert(id.to_owned(), CacheEntry::new(value, expires_at));
    }

    async fn delete(&self, id: &str) {
        self.record(CacheOp::Delete { id: id.to_owned() });
        self.data.lock().remove(id);
    }
}

/// A reference-oriented mock cache that records all operations.
///
/// Unlike a weak-reference cache, the mock holds strong references, so
/// stored values stay alive until deleted or replaced. This makes it the
/// right backing store for adapter and decorator tests that need
/// deterministic hits.
pub struct MockSharedCache<V> {
    data: Arc<Mutex<HashMap<String, CacheEntry<Arc<V>>>>>,
    operations: Arc<Mutex<Vec<CacheOp<Arc<V>>>>>,
}

impl<V> std::fmt::Debug for MockSharedCache<V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSharedCache")
            .field("data", &self.data)
            .field("operations", &self.operations)
            .finish()
    }
}

impl<V> Clone for MockSharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            operations: Arc::clone(&self.operations),
        }
    }
}

impl<V> Default for MockSharedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MockSharedCache<V> {
    /// Creates a new empty mock cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(HashMap::new())),
            operations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data.lock().len()
    }

    /// Returns `true` if the cache contains the given id, expired or not.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.data.lock().contains_key(id)
    }

    /// Returns a clone of all recorded operations.
    #[must_use]
    pub fn operations(&self) -> Vec<CacheOp<Arc<V>>> {
        self.operations.lock().clone()
    }

    /// Clears all recorded operations.
    pub fn clear_operations(&self) {
        self.operations.lock().clear();
    }

    fn record(&self, op: CacheOp<Arc<V>>) {
        self.operations.lock().push(op);
    }
}

impl<V> SharedCache<V> for MockSharedCache<V>
where
    V: Send + Sync,
{
    async fn get(&self, id: &str, minimum_lifetime: Duration) -> Option<Arc<V>> {
        self.record(CacheOp::Get {
            id: id.to_owned(),
            minimum_lifetime,
        });
        let now = Instant::now();
        let data = self.data.lock();
        data.get(id)
            .filter(|entry| entry.has_lifetime(now, minimum_lifetime))
            .map(|entry| Arc::clone(entry.value()))
    }

    async fn put(&self, id: &str, value: Arc<V>, expires_at: Instant) {
        self.record(CacheOp::Put {
            id: id.to_owned(),
            value: Arc::clone(&value),
            expires_at,
        });
        self.data.lock().insert(id.to_owned(), CacheEntry::new(value, expires_at));
    }

    async fn delete(&self, id: &str) {
        self.record(CacheOp::Delete { id: id.to_owned() });
        self.data.lock().remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: Future>(f: F) -> F::Output {
        futures::executor::block_on(f)
    }

    #[test]
    fn mock_records_operations_in_order() {
        block_on(async {
            let cache = MockCache::new();
            let expires_at = Instant::now() + Duration::from_secs(60);

            cache.put("a", 1, expires_at).await;
            let _ = cache.get("a", Duration::from_secs(1)).await;
            cache.delete("a").await;

            assert_eq!(
                cache.operations(),
                vec![
                    CacheOp::Put {
                        id: "a".to_owned(),
                        value: 1,
                        expires_at,
                    },
                    CacheOp::Get {
                        id: "a".to_owned(),
                        minimum_lifetime: Duration::from_secs(1),
                    },
                    CacheOp::Delete { id: "a".to_owned() },
                ],
            );
        });
    }

    #[test]
    fn mock_honors_minimum_lifetime() {
        block_on(async {
            let cache = MockCache::new();
            cache.put("a", 1, Instant::now() + Duration::from_secs(60)).await;

            assert_eq!(cache.get("a", Duration::from_secs(30)).await, Some(1));
            assert_eq!(cache.get("a", Duration::from_secs(3600)).await, None);
        });
    }

    #[test]
    fn shared_mock_returns_the_stored_allocation() {
        block_on(async {
            let cache = MockSharedCache::new();
            let value = Arc::new("payload".to_owned());

            cache
                .put("a", Arc::clone(&value), Instant::now() + Duration::from_secs(60))
                .await;

            let fetched = cache.get("a", Duration::ZERO).await.expect("entry should exist");
            assert!(Arc::ptr_eq(&fetched, &value));
        });
    }

    #[test]
    fn clone_shares_recorded_operations() {
        block_on(async {
            let cache = MockCache::new();
            let clone = cache.clone();

            cache.put("a", 1, Instant::now() + Duration::from_secs(60)).await;

            assert_eq!(clone.operations().len(), 1);
            assert_eq!(clone.entry_count(), 1);
            assert!(clone.contains_id("a"));
        });
    }
}
