// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Extension traits for fluent cache composition.

use stash_core::{Cache, SharedCache};

use crate::adapter::SharedValueAdapter;
use crate::traced::{CacheName, TracedCache};

/// Composition helpers for value-oriented caches.
pub trait CacheExt<V>: Cache<V> + Sized {
    /// Wraps this cache with tracing instrumentation.
    ///
    /// # Examples
    ///
    /// ```
    /// use hourglass::Clock;
    /// use stash::{CacheExt, InMemoryCache};
    ///
    /// let cache = InMemoryCache::<i32>::new(Clock::new()).traced("sessions");
    /// assert_eq!(cache.name(), "sessions");
    /// ```
    fn traced(self, name: CacheName) -> TracedCache<Self> {
        TracedCache::new(self, name)
    }
}

impl<V, C> CacheExt<V> for C where C: Cache<V> {}

/// Composition helpers for reference-oriented caches.
pub trait SharedCacheExt<V>: SharedCache<V> + Sized {
    /// Wraps this cache with tracing instrumentation.
    fn traced(self, name: CacheName) -> TracedCache<Self> {
        TracedCache::new(self, name)
    }

    /// Presents this cache through the value-oriented [`Cache`] contract,
    /// trading a copy per operation for interface compatibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use hourglass::Clock;
    /// use stash::{SharedCacheExt, WeakMemoryCache};
    ///
    /// let cache = WeakMemoryCache::<i32>::new(Clock::new()).by_value();
    /// # let _ = cache;
    /// ```
    fn by_value(self) -> SharedValueAdapter<Self> {
        SharedValueAdapter::new(self)
    }
}

impl<V, C> SharedCacheExt<V> for C where C: SharedCache<V> {}
