// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Concurrent in-memory storage for time-bounded caches.
//!
//! This crate provides two implementations of the `stash_core` contracts:
//!
//! - [`InMemoryCache`]: a map behind a reader/writer lock, holding strong
//!   (owned) values until they expire or are deleted.
//! - [`WeakMemoryCache`]: the same storage holding [`Weak`][std::sync::Weak]
//!   handles, so a large value can be freed as soon as no caller holds it,
//!   even before its expiry.
//!
//! Expiry is checked lazily when an entry is read; there is no background
//! sweeper. Both caches are handles: cloning is cheap and clones share the
//! underlying store.
//!
//! # Quick start
//!
//! ```
//! use std::time::Duration;
//!
//! use hourglass::Clock;
//! use stash_core::Cache;
//! use stash_memory::InMemoryCache;
//!
//! # futures::executor::block_on(async {
//! let clock = Clock::new();
//! let cache = InMemoryCache::new(clock.clone());
//!
//! cache.put("id", 42, clock.now() + Duration::from_secs(60)).await;
//! assert_eq!(cache.get("id", Duration::from_secs(30)).await, Some(42));
//! # });
//! ```

pub mod builder;
mod memory;
mod weak;

#[doc(inline)]
pub use builder::InMemoryCacheBuilder;
#[doc(inline)]
pub use memory::InMemoryCache;
#[doc(inline)]
pub use weak::WeakMemoryCache;
