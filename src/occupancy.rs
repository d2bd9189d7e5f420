//! Pixel ownership queries against the host's segment model.
//!
//! The overlay never overwrites an LED that another animated layer owns. The
//! host answers that question through [`OccupancyOracle`]; [`SegmentOccupancy`]
//! is the adapter for hosts that describe their layers as a list of segments.

/// Answers whether another rendering layer owns an LED in the current frame.
///
/// Answers must reflect the host state of the current frame; the overlay asks
/// again every frame and never caches them.
pub trait OccupancyOracle {
    /// Returns true if `index` belongs to another active layer.
    fn is_occupied(&self, index: usize) -> bool;
}

impl<F: Fn(usize) -> bool> OccupancyOracle for F {
    #[inline]
    fn is_occupied(&self, index: usize) -> bool {
        self(index)
    }
}

/// Oracle for hosts without other layers: nothing is ever occupied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOccupancy;

impl OccupancyOracle for NoOccupancy {
    #[inline]
    fn is_occupied(&self, _index: usize) -> bool {
        false
    }
}

/// Identifier of the effect a host segment is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EffectMode(pub u8);

impl EffectMode {
    /// The trivial solid-color effect. Segments running it never claim LEDs.
    pub const STATIC: Self = EffectMode(0);

    /// Returns true for the static effect.
    #[inline]
    pub const fn is_static(self) -> bool {
        self.0 == Self::STATIC.0
    }
}

/// A host rendering region covering LEDs `start..stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    pub start: u16,
    pub stop: u16,
    pub active: bool,
    pub selected: bool,
    pub mode: EffectMode,
}

impl Segment {
    /// Creates an active, selected segment.
    pub const fn new(start: u16, stop: u16, mode: EffectMode) -> Self {
        Self {
            start,
            stop,
            active: true,
            selected: true,
            mode,
        }
    }

    /// Returns true if `index` is inside `start..stop`.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= usize::from(self.start) && index < usize::from(self.stop)
    }

    /// Returns true if this segment takes ownership of `index`.
    ///
    /// Requires an active, selected segment running a non-static effect.
    #[inline]
    pub fn claims(&self, index: usize) -> bool {
        self.active && self.selected && !self.mode.is_static() && self.contains(index)
    }
}

/// Oracle over a snapshot of the host's segment list.
#[derive(Debug, Clone, Copy)]
pub struct SegmentOccupancy<'a> {
    segments: &'a [Segment],
}

impl<'a> SegmentOccupancy<'a> {
    /// Wraps the segment list of the current frame.
    pub fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }
}

impl OccupancyOracle for SegmentOccupancy<'_> {
    fn is_occupied(&self, index: usize) -> bool {
        self.segments.iter().any(|segment| segment.claims(index))
    }
}
