// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::Instant;

#[cfg(any(feature = "test-util", test))]
use std::sync::Arc;

#[cfg(any(feature = "test-util", test))]
use crate::control::ControlState;

/// Provides the current monotonic time.
///
/// In production a `Clock` is a zero-state handle over [`Instant::now`].
/// In tests, a clock created from [`ClockControl`][crate::ClockControl]
/// (behind the `test-util` feature) returns a manually driven time, which
/// makes expiry logic deterministic and keeps tests from sleeping.
///
/// # Cloning and shared state
///
/// Cloning a clock is inexpensive and every clone observes the same time
/// source. For a controlled clock, advancing time through the control is
/// visible to all clones.
///
/// # Examples
///
/// ```
/// use hourglass::Clock;
///
/// let clock = Clock::new();
/// let earlier = clock.now();
/// assert!(clock.now() >= earlier);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Clock(pub(crate) ClockState);

#[derive(Debug, Clone, Default)]
pub(crate) enum ClockState {
    #[default]
    System,
    #[cfg(any(feature = "test-util", test))]
    Controlled(Arc<ControlState>),
}

impl Clock {
    /// Creates a clock that reads the system's monotonic time.
    #[must_use]
    pub fn new() -> Self {
        Self(ClockState::System)
    }

    /// Creates a new frozen clock.
    ///
    /// This is a convenience method equivalent to calling
    /// `ClockControl::new().to_clock()`. The returned clock does not advance
    /// on its own; keep the [`ClockControl`][crate::ClockControl] if the test
    /// needs to move time forward.
    ///
    /// # Examples
    ///
    /// ```
    /// use hourglass::Clock;
    ///
    /// let clock = Clock::new_frozen();
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[cfg(any(feature = "test-util", test))]
    #[must_use]
    pub fn new_frozen() -> Self {
        crate::ClockControl::new().to_clock()
    }

    /// Retrieves the current monotonic time.
    ///
    /// The returned [`Instant`] is guaranteed to never decrease across calls
    /// on the same clock or any of its clones.
    #[must_use]
    pub fn now(&self) -> Instant {
        match &self.0 {
            ClockState::System => Instant::now(),
            #[cfg(any(feature = "test-util", test))]
            ClockState::Controlled(state) => state.now(),
        }
    }
}
