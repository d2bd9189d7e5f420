//! Three-phase animation clock.
//!
//! The clock cycles `Hold -> WipeBlue -> WipeWhite -> Hold` forever. It is
//! driven purely by time samples handed to [`AnimationClock::advance`]; drawing
//! only reads it.

use crate::colors::{Rgb8, WHITE, WIPE_BLUE};
use crate::config::ChaseConfig;
use crate::time::{TimeInstant, elapsed_at_least};

/// The current phase of the animation cycle.
///
/// Wipe phases carry the position of the wipe front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationPhase {
    /// Static logo display. The body is all white.
    Hold,

    /// Blue front grows from index 0 over the white body.
    WipeBlue {
        /// Highest index covered by the front.
        cursor: u16,
    },

    /// White front grows from index 0 over the blue body.
    WipeWhite {
        /// Highest index covered by the front.
        cursor: u16,
    },
}

impl AnimationPhase {
    /// Returns the phase that follows this one, with the cursor reset.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            AnimationPhase::Hold => AnimationPhase::WipeBlue { cursor: 0 },
            AnimationPhase::WipeBlue { .. } => AnimationPhase::WipeWhite { cursor: 0 },
            AnimationPhase::WipeWhite { .. } => AnimationPhase::Hold,
        }
    }

    /// Returns the wipe cursor, or 0 while holding.
    #[inline]
    pub const fn wipe_cursor(self) -> u16 {
        match self {
            AnimationPhase::Hold => 0,
            AnimationPhase::WipeBlue { cursor } | AnimationPhase::WipeWhite { cursor } => cursor,
        }
    }

    /// Returns true during either wipe phase.
    #[inline]
    pub const fn is_wipe(self) -> bool {
        !matches!(self, AnimationPhase::Hold)
    }

    /// Color of a non-band LED at `index` in this phase.
    pub fn body_color(self, index: usize) -> Rgb8 {
        match self {
            AnimationPhase::Hold => WHITE,
            AnimationPhase::WipeBlue { cursor } => {
                if index <= usize::from(cursor) {
                    WIPE_BLUE
                } else {
                    WHITE
                }
            }
            AnimationPhase::WipeWhite { cursor } => {
                if index <= usize::from(cursor) {
                    WHITE
                } else {
                    WIPE_BLUE
                }
            }
        }
    }
}

/// Time-driven state of the animation.
///
/// `phase_start` is refreshed on every phase entry; `last_step` is the time of
/// the latest cursor step and is only consulted during wipes.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock<I: TimeInstant> {
    phase: AnimationPhase,
    phase_start: I,
    last_step: I,
}

impl<I: TimeInstant> AnimationClock<I> {
    /// Creates a clock holding the static logo from `now`.
    pub fn new(now: I) -> Self {
        Self {
            phase: AnimationPhase::Hold,
            phase_start: now,
            last_step: now,
        }
    }

    /// Puts the clock back into `Hold` starting at `now`.
    pub fn restart(&mut self, now: I) {
        self.enter(AnimationPhase::Hold, now);
    }

    /// Advances the clock to `now`.
    ///
    /// At most one cursor step and at most one transition happen per call, no
    /// matter how much time passed since the previous call. Calls arriving
    /// faster than the wipe delay leave the cursor unchanged.
    ///
    /// # Returns
    /// * `Some(phase)` - A transition fired; `phase` is the newly entered phase
    /// * `None` - Still in the same phase
    pub fn advance(&mut self, now: I, config: &ChaseConfig) -> Option<AnimationPhase> {
        match self.phase {
            AnimationPhase::Hold => {
                if elapsed_at_least(now, self.phase_start, config.hold_duration_ms) {
                    return Some(self.enter(self.phase.next(), now));
                }
                None
            }
            AnimationPhase::WipeBlue { cursor } | AnimationPhase::WipeWhite { cursor } => {
                if !elapsed_at_least(now, self.last_step, config.wipe_delay_ms) {
                    return None;
                }

                self.last_step = now;
                let cursor = cursor.saturating_add(1);
                if cursor >= config.led_count {
                    return Some(self.enter(self.phase.next(), now));
                }

                self.phase = match self.phase {
                    AnimationPhase::WipeBlue { .. } => AnimationPhase::WipeBlue { cursor },
                    _ => AnimationPhase::WipeWhite { cursor },
                };
                None
            }
        }
    }

    fn enter(&mut self, phase: AnimationPhase, now: I) -> AnimationPhase {
        self.phase = phase;
        self.phase_start = now;
        self.last_step = now;

        #[cfg(feature = "defmt")]
        {
            match phase {
                AnimationPhase::Hold => defmt::info!("logo chase: back to hold"),
                AnimationPhase::WipeBlue { .. } => defmt::info!("logo chase: starting blue wipe"),
                AnimationPhase::WipeWhite { .. } => {
                    defmt::info!("logo chase: starting white wipe")
                }
            }
        }

        phase
    }

    /// Returns the current phase.
    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Returns the wipe cursor, or 0 while holding.
    #[inline]
    pub fn wipe_cursor(&self) -> u16 {
        self.phase.wipe_cursor()
    }

    /// Returns the time the current phase was entered.
    #[inline]
    pub fn phase_start(&self) -> I {
        self.phase_start
    }

    /// Returns the time of the latest cursor step or phase entry.
    #[inline]
    pub fn last_step(&self) -> I {
        self.last_step
    }
}
