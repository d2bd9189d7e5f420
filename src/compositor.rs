//! Overlay compositing onto the shared LED buffer.
//!
//! Every frame the compositor paints the logo band and the wipe body, skipping
//! each LED another layer owns. Band LEDs and body LEDs are disjoint by index,
//! so no pixel is ever written twice in one frame.

use crate::band::LogoBand;
use crate::clock::AnimationClock;
use crate::colors::Rgb8;
use crate::config::ChaseConfig;
use crate::occupancy::OccupancyOracle;
use crate::time::TimeInstant;

/// Trait for abstracting the host's frame buffer.
///
/// Implement this for your strip driver's pixel storage. Writes are direct and
/// never read back.
pub trait PixelBuffer {
    /// Sets the LED at `index`. Out-of-range indices must be ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb8);

    /// Returns the number of LEDs the buffer holds.
    fn len(&self) -> usize;
}

impl PixelBuffer for [Rgb8] {
    #[inline]
    fn set_pixel(&mut self, index: usize, color: Rgb8) {
        if let Some(pixel) = self.get_mut(index) {
            *pixel = color;
        }
    }

    #[inline]
    fn len(&self) -> usize {
        <[Rgb8]>::len(self)
    }
}

impl<const N: usize> PixelBuffer for heapless::Vec<Rgb8, N> {
    #[inline]
    fn set_pixel(&mut self, index: usize, color: Rgb8) {
        self.as_mut_slice().set_pixel(index, color);
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

/// Draws one overlay frame.
///
/// Band segments get their fixed color, all other LEDs below both
/// `config.led_count` and the buffer length get the phase color from
/// [`AnimationPhase::body_color`].
/// Occupied LEDs are left untouched. Nothing is drawn while disabled.
///
/// # Returns
/// The number of pixels written.
///
/// [`AnimationPhase::body_color`]: crate::clock::AnimationPhase::body_color
pub fn draw<B, O, I, const N: usize>(
    frame: &mut B,
    occupancy: &O,
    clock: &AnimationClock<I>,
    band: &LogoBand<N>,
    config: &ChaseConfig,
) -> usize
where
    B: PixelBuffer + ?Sized,
    O: OccupancyOracle + ?Sized,
    I: TimeInstant,
{
    if !config.enabled {
        return 0;
    }

    let led_count = config.led_count().min(frame.len());
    let mut written = 0;

    for segment in band.segments() {
        for index in segment.clamped(led_count) {
            if !occupancy.is_occupied(index) {
                frame.set_pixel(index, segment.color);
                written += 1;
            }
        }
    }

    let phase = clock.phase();
    for index in 0..led_count {
        if band.contains(index) || occupancy.is_occupied(index) {
            continue;
        }
        frame.set_pixel(index, phase.body_color(index));
        written += 1;
    }

    written
}
