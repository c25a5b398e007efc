// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::Clock;
use crate::clock::ClockState;

/// Controls the flow of time in tests.
///
/// A `ClockControl` owns a manually driven time source. Clocks created with
/// [`to_clock`][Self::to_clock] read that source and only move forward when
/// [`advance`][Self::advance] is called, so time-sensitive code can be tested
/// without waiting for real time to pass.
///
/// `ClockControl` is available when the `test-util` feature is enabled and
/// is intended for `dev-dependencies` only.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use hourglass::ClockControl;
///
/// let control = ClockControl::new();
/// let clock = control.to_clock();
///
/// let start = clock.now();
/// control.advance(Duration::from_secs(1));
///
/// assert_eq!(clock.now() - start, Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClockControl {
    state: Arc<ControlState>,
}

#[derive(Debug)]
pub(crate) struct ControlState {
    base: Instant,
    /// Time adjustments must be consistent across threads, so the offset
    /// lives behind a mutex rather than an atomic pair.
    offset: Mutex<Duration>,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }
}

impl ControlState {
    pub(crate) fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

impl ClockControl {
    /// Creates a new `ClockControl` frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`Clock`] that reads this control's time.
    ///
    /// Every clock created from the same control (and every clone of such a
    /// clock) observes the same time.
    #[must_use]
    pub fn to_clock(&self) -> Clock {
        Clock(ClockState::Controlled(Arc::clone(&self.state)))
    }

    /// Advances the controlled time by the given duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use hourglass::ClockControl;
    ///
    /// let control = ClockControl::new();
    /// let clock = control.to_clock();
    ///
    /// let start = clock.now();
    /// control.advance(Duration::from_millis(250));
    /// assert_eq!(clock.now() - start, Duration::from_millis(250));
    /// ```
    pub fn advance(&self, duration: Duration) {
        *self.state.offset.lock() += duration;
    }
}
