// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::{Duration, Instant};

/// A cached value together with its expiration instant.
///
/// `CacheEntry` is the unit of storage for every cache implementation. The
/// expiration is an absolute instant rather than a duration so that an entry
/// re-read at different times yields a consistent answer to "how much
/// lifetime is left".
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use stash_core::CacheEntry;
///
/// let now = Instant::now();
/// let entry = CacheEntry::new(42, now + Duration::from_secs(60));
///
/// assert_eq!(*entry.value(), 42);
/// assert!(entry.has_lifetime(now, Duration::from_secs(30)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Creates a new entry expiring at the given instant.
    pub fn new(value: V, expires_at: Instant) -> Self {
        Self { value, expires_at }
    }

    /// Returns a reference to the cached value.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the instant at which this entry expires.
    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Consumes the entry and returns the inner value.
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Returns `true` if the entry still has at least `minimum_lifetime`
    /// remaining at `now`.
    ///
    /// The comparison is inclusive: an entry whose remaining lifetime equals
    /// `minimum_lifetime` is still acceptable. An entry that expired before
    /// `now` has no lifetime left and fails even a zero bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, Instant};
    ///
    /// use stash_core::CacheEntry;
    ///
    /// let now = Instant::now();
    /// let entry = CacheEntry::new("value", now + Duration::from_secs(60));
    ///
    /// assert!(entry.has_lifetime(now, Duration::from_secs(60)));
    /// assert!(!entry.has_lifetime(now, Duration::from_secs(61)));
    /// ```
    #[must_use]
    pub fn has_lifetime(&self, now: Instant, minimum_lifetime: Duration) -> bool {
        self.expires_at
            .checked_duration_since(now)
            .is_some_and(|remaining| remaining >= minimum_lifetime)
    }
}
