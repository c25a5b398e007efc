// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The value-oriented cache capability.

use std::time::{Duration, Instant};

/// Holds values in a cache with a time-to-live.
///
/// This is the contract every storage strategy and decorator satisfies.
/// Implementations must be safe to share across threads; the methods take
/// `&self` and may be called concurrently.
///
/// The operations are infallible: `get` reports presence through `Option`
/// and `put`/`delete` always apply. Inputs are not validated; an empty id
/// is an ordinary key.
///
/// The methods are async so callers can scope, time, and instrument
/// operations uniformly regardless of the backing store. In-memory
/// implementations complete without suspending.
pub trait Cache<V>: Send + Sync {
    /// Gets the value with `id`, provided it has at least `minimum_lifetime`
    /// remaining before it expires.
    ///
    /// Returns `None` when the id is unknown or the remaining lifetime is
    /// below the bound. A remaining lifetime exactly equal to
    /// `minimum_lifetime` is a hit.
    fn get(&self, id: &str, minimum_lifetime: Duration) -> impl Future<Output = Option<V>> + Send;

    /// Adds a value to the cache with the given expiration time.
    ///
    /// Any prior entry for `id` is replaced wholesale, value and expiry
    /// together.
    fn put(&self, id: &str, value: V, expires_at: Instant) -> impl Future<Output = ()> + Send;

    /// Removes the value with `id` from the cache. This is typically used to
    /// clean up expired values. It will no-op if the id is not found.
    fn delete(&self, id: &str) -> impl Future<Output = ()> + Send;
}
