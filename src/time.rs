//! Time abstraction traits for platform-agnostic timing.
//!
//! Hosts usually expose a free-running 32-bit millisecond counter. [`Millis`]
//! models that counter directly and measures elapsed time with wrapping
//! subtraction, so a single counter wraparound between two samples still yields
//! the correct duration.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping counter must use wrapping
    /// subtraction here.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Elapsed milliseconds between two [`Millis`] samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    const ZERO: Self = MillisDuration(0);

    fn as_millis(&self) -> u64 {
        u64::from(self.0)
    }

    fn from_millis(millis: u64) -> Self {
        MillisDuration(u32::try_from(millis).unwrap_or(u32::MAX))
    }
}

/// A sample of a wrapping 32-bit millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}

impl From<u32> for Millis {
    fn from(millis: u32) -> Self {
        Millis(millis)
    }
}

/// Returns true once at least `threshold_ms` have passed between `since` and `now`.
#[inline]
pub(crate) fn elapsed_at_least<I: TimeInstant>(now: I, since: I, threshold_ms: u32) -> bool {
    now.duration_since(since).as_millis() >= u64::from(threshold_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_survives_counter_wraparound() {
        let before = Millis(u32::MAX - 4);
        let after = Millis(5);
        assert_eq!(after.duration_since(before), MillisDuration(10));
    }

    #[test]
    fn elapsed_threshold_is_inclusive() {
        assert!(elapsed_at_least(Millis(130), Millis(100), 30));
        assert!(!elapsed_at_least(Millis(129), Millis(100), 30));
        assert!(elapsed_at_least(Millis(100), Millis(100), 0));
    }

    #[test]
    fn from_millis_saturates() {
        assert_eq!(MillisDuration::from_millis(u64::MAX), MillisDuration(u32::MAX));
    }
}
