// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The weak-reference in-memory cache.

use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use hourglass::Clock;
use stash_core::{Cache, SharedCache};

use crate::memory::InMemoryCache;

/// An in-memory cache that does not keep its values alive.
///
/// `WeakMemoryCache` stores [`Weak`] handles inside an [`InMemoryCache`],
/// so a value is freed as soon as the last caller-held [`Arc`] is dropped,
/// even before its expiry. This bounds memory for large, regenerable values:
/// the cache serves them while somebody is using them and lets them go the
/// moment nobody is.
///
/// Time-based expiry and reference-count reclamation are independent causes
/// of a miss and are indistinguishable to the caller. When a lookup finds an
/// entry whose value is already gone, the dead entry is deleted as a
/// best-effort cleanup.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use hourglass::Clock;
/// use stash_core::SharedCache;
/// use stash_memory::WeakMemoryCache;
///
/// # futures::executor::block_on(async {
/// let clock = Clock::new();
/// let cache = WeakMemoryCache::new(clock.clone());
///
/// let value = Arc::new("large payload".to_owned());
/// cache.put("id", Arc::clone(&value), clock.now() + Duration::from_secs(3600)).await;
///
/// // Hits while a strong reference exists.
/// assert!(cache.get("id", Duration::ZERO).await.is_some());
///
/// // Once the last strong reference is gone, the entry is a miss long
/// // before its expiry.
/// drop(value);
/// assert!(cache.get("id", Duration::ZERO).await.is_none());
/// # });
/// ```
pub struct WeakMemoryCache<V> {
    entries: InMemoryCache<Weak<V>>,
}

impl<V> std::fmt::Debug for WeakMemoryCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakMemoryCache")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<V> Clone for WeakMemoryCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V> WeakMemoryCache<V> {
    /// Creates a new empty cache reading time from the given clock.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            entries: InMemoryCache::new(clock),
        }
    }

    /// Returns the number of stored entries.
    ///
    /// Entries whose value has already been freed still count until a lookup
    /// purges them or they are replaced or deleted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<V> SharedCache<V> for WeakMemoryCache<V>
where
    V: Send + Sync,
{
    async fn get(&self, id: &str, minimum_lifetime: Duration) -> Option<Arc<V>> {
        let weak = self.entries.get(id, minimum_lifetime).await?;
        match weak.upgrade() {
            Some(value) => Some(value),
            None => {
                // The value is already gone; drop the dead entry so later
                // lookups skip straight to the miss.
                self.entries.delete(id).await;
                None
            }
        }
    }

    async fn put(&self, id: &str, value: Arc<V>, expires_at: Instant) {
        self.entries.put(id, Arc::downgrade(&value), expires_at).await;
    }

    async fn delete(&self, id: &str) {
        self.entries.delete(id).await;
    }
}
