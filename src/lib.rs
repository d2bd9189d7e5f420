#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AnimationPhase`**: `Hold`, `WipeBlue` or `WipeWhite`; wipe phases carry the cursor
//! - **`AnimationClock`**: Time-driven state machine cycling through the phases
//! - **`LogoBand`**: Fixed colored LED ranges that are never animated
//! - **`ChaseConfig`**: Enable flag, hold duration, wipe delay and LED count
//! - **`PixelBuffer`**: Trait to implement for your strip's frame buffer
//! - **`OccupancyOracle`**: Trait answering whether another layer owns an LED
//! - **`LogoChase`**: The overlay combining all of the above
//! - **`Overlay`**: Lifecycle callbacks a host scheduler drives each frame
//! - **`StripHost`**: Host capabilities for a complete tick (busy flag, buffer, oracle)
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are `Srgb<u8>` ([`Rgb8`]), the native format of WS2812-style strips.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod band;
pub mod clock;
pub mod colors;
pub mod compositor;
pub mod config;
pub mod occupancy;
pub mod overlay;
pub mod registry;
pub mod time;

pub use band::{BandError, BandSegment, DEFAULT_BAND_CAPACITY, LogoBand, LogoBandBuilder};
pub use clock::{AnimationClock, AnimationPhase};
pub use colors::{
    OFF, Rgb8, SANDER_BLUE, SANDER_GREEN, SANDER_ORANGE, WHITE, WIPE_BLUE, rgb_from_u32,
    rgb_to_u32,
};
pub use compositor::{PixelBuffer, draw};
pub use config::{CONFIG_SECTION, ChaseConfig};
pub use occupancy::{EffectMode, NoOccupancy, OccupancyOracle, Segment, SegmentOccupancy};
pub use overlay::{LogoChase, Overlay, StripHost, TickOutcome};
pub use registry::{OverlayRegistry, RegistryError};
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
