// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builder for configuring in-memory caches.

use std::marker::PhantomData;

use hourglass::Clock;

use crate::memory::InMemoryCache;

/// Builder for configuring an [`InMemoryCache`].
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
pub struct InMemoryCacheBuilder<V> {
    pub(crate) clock: Clock,
    pub(crate) initial_capacity: Option<usize>,
    _phantom: PhantomData<fn() -> V>,
}

impl<V> std::fmt::Debug for InMemoryCacheBuilder<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCacheBuilder")
            .field("clock", &self.clock)
            .field("initial_capacity", &self.initial_capacity)
            .finish_non_exhaustive()
    }
}

impl<V> InMemoryCacheBuilder<V> {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            initial_capacity: None,
            _phantom: PhantomData,
        }
    }

    /// Sets the initial capacity (pre-allocation hint) for the cache.
    ///
    /// This can avoid rehashing during initial population. The cache may
    /// still grow beyond this size.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Builds the configured [`InMemoryCache`].
    #[must_use]
    pub fn build(self) -> InMemoryCache<V> {
        InMemoryCache::from_builder(self)
    }
}
