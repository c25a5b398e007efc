// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Core capability contracts for time-bounded caches.
//!
//! This crate defines the [`Cache`] trait that all storage strategies
//! satisfy, the parallel [`SharedCache`] trait for reference-typed values,
//! and [`CacheEntry`] for storing a value together with its expiration.
//!
//! # Overview
//!
//! A time-bounded cache maps string ids to values that expire at an absolute
//! instant. Readers pass a *minimum lifetime*: the lower bound on remaining
//! time-to-live they are willing to accept. An entry whose remaining lifetime
//! is below that bound is a miss, exactly as if it had never been stored.
//!
//! The contracts are deliberately infallible: operations report presence
//! through `Option`, never through an error channel, so decorators can
//! forward calls without a propagation policy.
//!
//! # Implementing a cache
//!
//! Implement all three methods of [`Cache`]:
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::RwLock;
//! use std::time::{Duration, Instant};
//!
//! use stash_core::{Cache, CacheEntry};
//!
//! struct SimpleCache<V>(RwLock<HashMap<String, CacheEntry<V>>>);
//!
//! impl<V> Cache<V> for SimpleCache<V>
//! where
//!     V: Clone + Send + Sync,
//! {
//!     async fn get(&self, id: &str, minimum_lifetime: Duration) -> Option<V> {
//!         let now = Instant::now();
//!         let entries = self.0.read().unwrap();
//!         entries
//!             .get(id)
//!             .filter(|entry| entry.has_lifetime(now, minimum_lifetime))
//!             .map(|entry| entry.value().clone())
//!     }
//!
//!     async fn put(&self, id: &str, value: V, expires_at: Instant) {
//!         self.0
//!             .write()
//!             .unwrap()
//!             .insert(id.to_owned(), CacheEntry::new(value, expires_at));
//!     }
//!
//!     async fn delete(&self, id: &str) {
//!         self.0.write().unwrap().remove(id);
//!     }
//! }
//! ```
//!
//! # Testing
//!
//! Enable the `test-util` feature for the [`testing`] module, which provides
//! mock caches that record every operation with its arguments.

mod cache;
mod entry;
mod shared;
#[cfg(any(feature = "test-util", test))]
pub mod testing;

#[doc(inline)]
pub use cache::Cache;
#[doc(inline)]
pub use entry::CacheEntry;
#[doc(inline)]
pub use shared::SharedCache;
