//! Logo band layout.
//!
//! A [`LogoBand`] is a small set of fixed, contiguous LED ranges, each painted a
//! constant color. The ranges are validated once at construction and never
//! change afterwards.

use crate::colors::{Rgb8, SANDER_BLUE, SANDER_GREEN, SANDER_ORANGE};
use heapless::Vec;

/// Default number of segments a band can hold.
pub const DEFAULT_BAND_CAPACITY: usize = 3;

/// A half-open LED range `start..end` painted a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSegment {
    /// First LED index (inclusive).
    pub start: u16,

    /// Last LED index (exclusive).
    pub end: u16,

    /// Constant color of the range.
    pub color: Rgb8,
}

impl BandSegment {
    /// Creates a new band segment.
    #[inline]
    pub const fn new(start: u16, end: u16, color: Rgb8) -> Self {
        Self { start, end, color }
    }

    /// Returns true if `index` falls inside this segment.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= usize::from(self.start) && index < usize::from(self.end)
    }

    /// Returns the segment range clamped to `led_count`.
    #[inline]
    pub fn clamped(&self, led_count: usize) -> core::ops::Range<usize> {
        let end = usize::from(self.end).min(led_count);
        let start = usize::from(self.start).min(end);
        start..end
    }
}

/// Band validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandError {
    /// A segment covers no LEDs (`start >= end`).
    EmptySegment,

    /// Segments must be added in ascending index order.
    SegmentOutOfOrder,

    /// A segment overlaps the previous one.
    Overlapping,

    /// Band capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for BandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BandError::EmptySegment => write!(f, "band segment must cover at least one LED"),
            BandError::SegmentOutOfOrder => {
                write!(f, "band segments must be added in ascending order")
            }
            BandError::Overlapping => write!(f, "band segments must not overlap"),
            BandError::CapacityExceeded => write!(f, "band capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BandError {}

/// Fixed logo layout: up to `N` ascending, non-overlapping colored segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoBand<const N: usize = DEFAULT_BAND_CAPACITY> {
    segments: Vec<BandSegment, N>,
}

impl<const N: usize> LogoBand<N> {
    /// Creates a new band builder.
    pub fn builder() -> LogoBandBuilder<N> {
        LogoBandBuilder::new()
    }

    /// Returns a band with no segments. Every LED belongs to the wipe body.
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns the segments in ascending index order.
    #[inline]
    pub fn segments(&self) -> &[BandSegment] {
        &self.segments
    }

    /// Returns the segment covering `index`, if any.
    pub fn segment_at(&self, index: usize) -> Option<&BandSegment> {
        self.segments.iter().find(|segment| segment.contains(index))
    }

    /// Returns true if `index` belongs to any segment.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.segment_at(index).is_some()
    }
}

impl LogoBand<DEFAULT_BAND_CAPACITY> {
    /// The stock logo: orange 84..89, green 89..94, blue 94..99.
    pub fn sander() -> Self {
        Self {
            segments: Vec::from_array([
                BandSegment::new(84, 89, SANDER_ORANGE),
                BandSegment::new(89, 94, SANDER_GREEN),
                BandSegment::new(94, 99, SANDER_BLUE),
            ]),
        }
    }
}

impl Default for LogoBand<DEFAULT_BAND_CAPACITY> {
    fn default() -> Self {
        Self::sander()
    }
}

/// Builder for constructing validated logo bands.
#[derive(Debug)]
pub struct LogoBandBuilder<const N: usize> {
    segments: Vec<BandSegment, N>,
}

impl<const N: usize> LogoBandBuilder<N> {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Appends a segment covering `start..end`.
    ///
    /// # Errors
    /// * `EmptySegment` - `start >= end`
    /// * `SegmentOutOfOrder` - `start` is below the previous segment's start
    /// * `Overlapping` - `start` is below the previous segment's end
    /// * `CapacityExceeded` - the band already holds `N` segments
    pub fn segment(mut self, start: u16, end: u16, color: Rgb8) -> Result<Self, BandError> {
        if start >= end {
            return Err(BandError::EmptySegment);
        }

        if let Some(previous) = self.segments.last() {
            if start < previous.start {
                return Err(BandError::SegmentOutOfOrder);
            }
            if start < previous.end {
                return Err(BandError::Overlapping);
            }
        }

        self.segments
            .push(BandSegment::new(start, end, color))
            .map_err(|_| BandError::CapacityExceeded)?;
        Ok(self)
    }

    /// Finishes the band.
    pub fn build(self) -> LogoBand<N> {
        LogoBand {
            segments: self.segments,
        }
    }
}

impl<const N: usize> Default for LogoBandBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;

    #[test]
    fn sander_band_has_three_adjacent_segments() {
        let band = LogoBand::sander();
        assert_eq!(band.segments().len(), 3);
        assert_eq!(band.segment_at(84).map(|s| s.color), Some(SANDER_ORANGE));
        assert_eq!(band.segment_at(88).map(|s| s.color), Some(SANDER_ORANGE));
        assert_eq!(band.segment_at(89).map(|s| s.color), Some(SANDER_GREEN));
        assert_eq!(band.segment_at(98).map(|s| s.color), Some(SANDER_BLUE));
        assert!(!band.contains(83));
        assert!(!band.contains(99));
    }

    #[test]
    fn builder_rejects_invalid_segments() {
        let empty = LogoBand::<3>::builder().segment(5, 5, WHITE);
        assert!(matches!(empty, Err(BandError::EmptySegment)));

        let overlap = LogoBand::<3>::builder()
            .segment(0, 5, WHITE)
            .and_then(|b| b.segment(4, 8, WHITE));
        assert!(matches!(overlap, Err(BandError::Overlapping)));

        let order = LogoBand::<3>::builder()
            .segment(10, 12, WHITE)
            .and_then(|b| b.segment(2, 4, WHITE));
        assert!(matches!(order, Err(BandError::SegmentOutOfOrder)));

        let full = LogoBand::<1>::builder()
            .segment(0, 1, WHITE)
            .and_then(|b| b.segment(1, 2, WHITE));
        assert!(matches!(full, Err(BandError::CapacityExceeded)));
    }

    #[test]
    fn clamped_range_stays_inside_strip() {
        let segment = BandSegment::new(8, 14, WHITE);
        assert_eq!(segment.clamped(10), 8..10);
        assert_eq!(segment.clamped(4), 4..4);
        assert_eq!(segment.clamped(122), 8..14);
    }
}
