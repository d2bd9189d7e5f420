//! The logo chase overlay and its host-facing lifecycle.
//!
//! Provides [`LogoChase`], which bundles configuration, the logo band and the
//! animation clock, and the [`Overlay`] trait a host scheduler uses to drive
//! it. Also defines [`StripHost`] for hosts that want a single per-frame entry
//! point via [`LogoChase::tick`].

use crate::band::{DEFAULT_BAND_CAPACITY, LogoBand};
use crate::clock::{AnimationClock, AnimationPhase};
use crate::colors::Rgb8;
use crate::compositor::{self, PixelBuffer};
use crate::config::ChaseConfig;
use crate::occupancy::OccupancyOracle;
use crate::time::TimeInstant;

/// Lifecycle callbacks a host invokes on a registered overlay.
///
/// The trait is object safe so hosts can keep heterogeneous overlays in one
/// registry.
pub trait Overlay<I: TimeInstant> {
    /// Short human-readable name.
    fn name(&self) -> &'static str;

    /// Called once when the host starts.
    fn setup(&mut self, now: I);

    /// Advances time-driven state. Called at most once per host tick.
    fn advance_tick(&mut self, now: I);

    /// Draws onto the frame, leaving occupied LEDs untouched.
    ///
    /// Returns the number of pixels written.
    fn draw_overlay(&self, frame: &mut dyn PixelBuffer, occupancy: &dyn OccupancyOracle) -> usize;

    /// Returns true if the overlay currently draws anything.
    fn is_enabled(&self) -> bool;

    /// Loads the overlay section of the host configuration.
    ///
    /// Returns false if any key was absent; present keys are applied anyway.
    #[cfg(feature = "std")]
    fn read_config(&mut self, root: &serde_json::Value) -> bool;

    /// Stores the overlay section into the host configuration.
    #[cfg(feature = "std")]
    fn add_to_config(&self, root: &mut serde_json::Map<String, serde_json::Value>);
}

/// Host capabilities needed for one complete tick.
pub trait StripHost {
    /// Pixel storage of the strip.
    type Buffer: PixelBuffer + ?Sized;

    /// Segment model of the strip.
    type Occupancy: OccupancyOracle + ?Sized;

    /// Returns true while the strip is being pushed to the hardware.
    fn is_updating(&self) -> bool;

    /// Returns the frame buffer together with the occupancy oracle.
    fn frame(&mut self) -> (&mut Self::Buffer, &Self::Occupancy);
}

/// Result of a single [`LogoChase::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The strip was busy; neither the clock nor the frame was touched.
    Skipped,

    /// The overlay is disabled; nothing was advanced or drawn.
    Disabled,

    /// The clock advanced and the frame was drawn.
    Drawn {
        /// Number of pixels written this frame.
        pixels: usize,
    },
}

/// Background overlay painting the logo band plus a cyclic blue/white wipe.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `N` - Maximum number of logo band segments
#[derive(Debug, Clone)]
pub struct LogoChase<I: TimeInstant, const N: usize = DEFAULT_BAND_CAPACITY> {
    config: ChaseConfig,
    band: LogoBand<N>,
    clock: AnimationClock<I>,
}

impl<I: TimeInstant> LogoChase<I, DEFAULT_BAND_CAPACITY> {
    /// Creates the overlay with the stock logo band.
    pub fn sander(config: ChaseConfig, now: I) -> Self {
        Self::new(config, LogoBand::sander(), now)
    }
}

impl<I: TimeInstant, const N: usize> LogoChase<I, N> {
    /// Creates the overlay holding the static logo from `now`.
    pub fn new(config: ChaseConfig, band: LogoBand<N>, now: I) -> Self {
        Self {
            config,
            band,
            clock: AnimationClock::new(now),
        }
    }

    /// Runs one host tick: advance, then draw.
    ///
    /// Skips the whole tick while the strip is updating so the buffer is
    /// never written mid-transmission.
    pub fn tick<H: StripHost + ?Sized>(&mut self, now: I, host: &mut H) -> TickOutcome {
        if host.is_updating() {
            return TickOutcome::Skipped;
        }
        if !self.config.enabled {
            return TickOutcome::Disabled;
        }

        self.advance(now);
        let (frame, occupancy) = host.frame();
        let pixels = self.draw(frame, occupancy);
        TickOutcome::Drawn { pixels }
    }

    /// Advances the animation clock. Does nothing while disabled.
    ///
    /// Returns the newly entered phase if a transition fired.
    pub fn advance(&mut self, now: I) -> Option<AnimationPhase> {
        if !self.config.enabled {
            return None;
        }
        self.clock.advance(now, &self.config)
    }

    /// Draws the current frame. See [`compositor::draw`].
    pub fn draw<B, O>(&self, frame: &mut B, occupancy: &O) -> usize
    where
        B: PixelBuffer + ?Sized,
        O: OccupancyOracle + ?Sized,
    {
        compositor::draw(frame, occupancy, &self.clock, &self.band, &self.config)
    }

    /// Replaces the configuration without resetting the animation.
    pub fn set_config(&mut self, config: ChaseConfig) {
        self.config = config;
    }

    /// Restarts the cycle from `Hold` at `now`.
    pub fn restart(&mut self, now: I) {
        self.clock.restart(now);
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    /// Returns the logo band.
    pub fn band(&self) -> &LogoBand<N> {
        &self.band
    }

    /// Returns the animation clock.
    pub fn clock(&self) -> &AnimationClock<I> {
        &self.clock
    }

    /// Returns the current phase.
    pub fn phase(&self) -> AnimationPhase {
        self.clock.phase()
    }

    /// Returns the color `index` would get this frame, ignoring occupancy.
    ///
    /// `None` when disabled or outside the configured strip.
    pub fn color_at(&self, index: usize) -> Option<Rgb8> {
        if !self.config.enabled || index >= self.config.led_count() {
            return None;
        }
        Some(match self.band.segment_at(index) {
            Some(segment) => segment.color,
            None => self.clock.phase().body_color(index),
        })
    }
}

impl<I: TimeInstant, const N: usize> Overlay<I> for LogoChase<I, N> {
    fn name(&self) -> &'static str {
        "Logo Chase"
    }

    fn setup(&mut self, now: I) {
        self.clock.restart(now);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "logo chase: initialized, led count {=u16}, hold {=u32}ms",
            self.config.led_count,
            self.config.hold_duration_ms
        );
    }

    fn advance_tick(&mut self, now: I) {
        self.advance(now);
    }

    fn draw_overlay(&self, frame: &mut dyn PixelBuffer, occupancy: &dyn OccupancyOracle) -> usize {
        self.draw(frame, occupancy)
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    #[cfg(feature = "std")]
    fn read_config(&mut self, root: &serde_json::Value) -> bool {
        let complete = self.config.read_from_config(root);

        #[cfg(feature = "defmt")]
        {
            if !complete {
                defmt::warn!("logo chase: configuration incomplete, keeping previous values");
            }
        }

        complete
    }

    #[cfg(feature = "std")]
    fn add_to_config(&self, root: &mut serde_json::Map<String, serde_json::Value>) {
        self.config.add_to_config(root);
    }
}
