// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A composable time-bounded cache with weak-reference storage and tracing
//! instrumentation.
//!
//! This crate is the front door to the `stash` family:
//!
//! - [`Cache`] and [`SharedCache`] are the storage contracts, exchanging
//!   owned values and `Arc`s respectively.
//! - [`InMemoryCache`] and [`WeakMemoryCache`] are the in-process
//!   implementations (behind the default `memory` feature).
//! - [`TracedCache`] decorates any cache with one `tracing` span per call,
//!   without changing its behavior.
//! - [`SharedValueAdapter`] presents a reference-oriented cache through the
//!   value-oriented contract, at the cost of a copy.
//!
//! Decorators and adapters implement the same contracts they wrap, so they
//! stack in any order.
//!
//! # Examples
//!
//! ## Basic in-memory cache
//!
//! ```
//! use std::time::Duration;
//!
//! use hourglass::Clock;
//! use stash::{Cache, InMemoryCache};
//!
//! # futures::executor::block_on(async {
//! let clock = Clock::new();
//! let cache = InMemoryCache::new(clock.clone());
//!
//! cache.put("token", "abc".to_owned(), clock.now() + Duration::from_secs(300)).await;
//!
//! // Only accept the token if it is still valid for at least a minute.
//! assert_eq!(cache.get("token", Duration::from_secs(60)).await.as_deref(), Some("abc"));
//! # });
//! ```
//!
//! ## Traced weak cache behind the value-oriented contract
//!
//! ```
//! use std::time::Duration;
//!
//! use hourglass::Clock;
//! use stash::{Cache, SharedCacheExt, WeakMemoryCache};
//!
//! # futures::executor::block_on(async {
//! let clock = Clock::new();
//! let cache = WeakMemoryCache::<Vec<u8>>::new(clock.clone()).traced("artifacts").by_value();
//!
//! // Nothing holds a strong reference after put, so the value is freed
//! // immediately; the adapter over weak storage is for interoperability,
//! // not retention.
//! cache.put("blob", vec![0_u8; 1024], clock.now() + Duration::from_secs(3600)).await;
//! assert_eq!(cache.get("blob", Duration::ZERO).await, None);
//! # });
//! ```

mod adapter;
mod ext;
mod traced;

#[doc(inline)]
pub use adapter::SharedValueAdapter;
#[doc(inline)]
pub use ext::{CacheExt, SharedCacheExt};
#[doc(inline)]
pub use stash_core::{Cache, CacheEntry, SharedCache};
#[cfg(feature = "memory")]
#[doc(inline)]
pub use stash_memory::{InMemoryCache, InMemoryCacheBuilder, WeakMemoryCache};
#[doc(inline)]
pub use traced::{CacheName, TracedCache};

#[cfg(any(feature = "test-util", test))]
#[doc(inline)]
pub use stash_core::testing;
