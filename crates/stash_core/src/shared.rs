// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The reference-oriented cache capability.

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Holds shared references in a cache with a time-to-live.
///
/// `SharedCache` mirrors [`Cache`][crate::Cache] but exchanges `Arc<V>`
/// instead of owned copies, avoiding a redundant clone per operation. It is
/// the natural contract for storage that is inherently reference-based, such
/// as a weak-reference cache, and can be bridged back to the value-oriented
/// contract with an adapter.
///
/// The same rules apply as for [`Cache`][crate::Cache]: infallible
/// operations, unconditional overwrite on `put`, idempotent `delete`, and an
/// inclusive minimum-lifetime bound on `get`.
pub trait SharedCache<V>: Send + Sync {
    /// Gets the value with `id`, provided it has at least `minimum_lifetime`
    /// remaining before it expires.
    ///
    /// The returned `Arc` is a fresh strong reference; the value stays alive
    /// for as long as the caller holds it, independent of the cache.
    fn get(&self, id: &str, minimum_lifetime: Duration) -> impl Future<Output = Option<Arc<V>>> + Send;

    /// Adds a value to the cache with the given expiration time.
    ///
    /// Any prior entry for `id` is replaced wholesale, value and expiry
    /// together.
    fn put(&self, id: &str, value: Arc<V>, expires_at: Instant) -> impl Future<Output = ()> + Send;

    /// Removes the value with `id` from the cache. This is typically used to
    /// clean up expired values. It will no-op if the id is not found.
    fn delete(&self, id: &str) -> impl Future<Output = ()> + Send;
}
