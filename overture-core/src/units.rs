// Overture
// Copyright (c) 2026 The Project Overture Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `units` module provides definitions for common units.

use std::fmt;

/// A `Timespan` represents a signed span of time, or an instant on the playback timeline
/// relative to the start of the stream. One `Timespan` tick is 100 nanoseconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timespan(i64);

impl Timespan {
    const TICKS_PER_MICROSECOND: i64 = 10;
    const TICKS_PER_MILLISECOND: i64 = 10_000;
    const TICKS_PER_SECOND: i64 = 10_000_000;

    /// A `Timespan` of zero length.
    pub const ZERO: Timespan = Timespan(0);

    /// The maximum representable `Timespan`.
    ///
    /// Samples that stay valid until superseded carry this duration.
    pub const INFINITE: Timespan = Timespan(i64::MAX);

    /// Instantiate a `Timespan` from a raw tick count.
    pub const fn from_ticks(ticks: i64) -> Timespan {
        Timespan(ticks)
    }

    /// Instantiate a `Timespan` from a number of seconds.
    pub fn from_seconds(seconds: f64) -> Timespan {
        Timespan((seconds * Timespan::TICKS_PER_SECOND as f64) as i64)
    }

    /// Instantiate a `Timespan` from a number of milliseconds.
    pub const fn from_millis(millis: i64) -> Timespan {
        Timespan(millis * Timespan::TICKS_PER_MILLISECOND)
    }

    /// Instantiate a `Timespan` from a number of microseconds.
    pub const fn from_micros(micros: i64) -> Timespan {
        Timespan(micros * Timespan::TICKS_PER_MICROSECOND)
    }

    /// Get the raw tick count.
    pub const fn ticks(&self) -> i64 {
        self.0
    }

    /// Get the length of the `Timespan` in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0 as f64 / Timespan::TICKS_PER_SECOND as f64
    }

    /// Returns `true` if the `Timespan` is the indefinite sentinel.
    pub const fn is_infinite(&self) -> bool {
        self.0 == i64::MAX
    }
}

impl From<std::time::Duration> for Timespan {
    fn from(duration: std::time::Duration) -> Self {
        // One tick is 100ns. Saturate rather than wrap for durations beyond the tick range.
        let ticks = duration.as_nanos() / 100;
        Timespan(if ticks > i64::MAX as u128 { i64::MAX } else { ticks as i64 })
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "inf")
        }
        else {
            write!(f, "{}s", self.to_seconds())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Timespan;
    use std::time::Duration;

    #[test]
    fn verify_timespan_conversions() {
        assert_eq!(Timespan::from_seconds(1.5).ticks(), 15_000_000);
        assert_eq!(Timespan::from_millis(250).ticks(), 2_500_000);
        assert_eq!(Timespan::from_micros(40_000).ticks(), 400_000);
        assert_eq!(Timespan::from_ticks(10_000_000).to_seconds(), 1.0);

        // Negative spans are representable.
        assert_eq!(Timespan::from_seconds(-1.0).ticks(), -10_000_000);
        assert!(Timespan::from_millis(-1) < Timespan::ZERO);
    }

    #[test]
    fn verify_timespan_infinite() {
        assert!(Timespan::INFINITE.is_infinite());
        assert!(!Timespan::ZERO.is_infinite());
        assert!(!Timespan::from_seconds(1.0).is_infinite());

        // The sentinel orders after every finite span.
        assert!(Timespan::INFINITE > Timespan::from_seconds(1_000_000_000.0));
        assert!(Timespan::INFINITE > Timespan::ZERO);
    }

    #[test]
    fn verify_timespan_from_duration() {
        assert_eq!(Timespan::from(Duration::from_millis(40)).ticks(), 400_000);
        assert_eq!(Timespan::from(Duration::from_secs(u64::MAX)), Timespan::INFINITE);
    }
}
