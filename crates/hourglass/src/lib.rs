// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A small clock abstraction with controllable time for tests.
//!
//! Working with time is notoriously difficult to test. This crate provides
//! [`Clock`], a cheaply cloneable handle that reads the system's monotonic
//! time in production and, with the `test-util` feature enabled, can be
//! driven manually through `ClockControl` so tests never sleep.
//!
//! # Examples
//!
//! ```
//! use hourglass::Clock;
//!
//! let clock = Clock::new();
//! let earlier = clock.now();
//! assert!(clock.now() >= earlier);
//! ```
//!
//! # Testing
//!
//! By default the clock reads real time. Enable the `test-util` feature in
//! `dev-dependencies` to construct clocks whose time only moves when the
//! test says so:
//!
//! ```toml
//! hourglass = { version = "*", features = ["test-util"] }
//! ```
//!
//! Never enable `test-util` in production code; the controlled clock exists
//! purely for tests.

mod clock;
#[cfg(any(feature = "test-util", test))]
mod control;

#[doc(inline)]
pub use clock::Clock;
#[cfg(any(feature = "test-util", test))]
#[doc(inline)]
pub use control::ClockControl;
