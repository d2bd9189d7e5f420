//! Shared test infrastructure for logo-chase integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use logo_chase::{
    ChaseConfig, OccupancyOracle, PixelBuffer, Rgb8, Segment, SegmentOccupancy, StripHost,
};
use logo_chase::{Millis, TimeSource};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock millisecond counter with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<Millis>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: core::cell::Cell::new(Millis(millis)),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping like hardware
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(Millis(current.0.wrapping_add(millis)));
    }

    pub fn set_time(&self, millis: u32) {
        self.current_time.set(Millis(millis));
    }
}

impl TimeSource<Millis> for MockTimeSource {
    fn now(&self) -> Millis {
        self.current_time.get()
    }
}

// ============================================================================
// Recording Pixel Buffer
// ============================================================================

/// Frame buffer that remembers every write
pub struct RecordingBuffer {
    pixels: Vec<Option<Rgb8>>,
    writes: Vec<usize>,
}

impl RecordingBuffer {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![None; len],
            writes: Vec::new(),
        }
    }

    /// Pre-fills a pixel as if another layer had drawn it
    pub fn preset(&mut self, index: usize, color: Rgb8) {
        self.pixels[index] = Some(color);
    }

    pub fn pixel(&self, index: usize) -> Option<Rgb8> {
        self.pixels[index]
    }

    /// Indices in write order
    pub fn writes(&self) -> &[usize] {
        &self.writes
    }

    pub fn write_count(&self, index: usize) -> usize {
        self.writes.iter().filter(|&&i| i == index).count()
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl PixelBuffer for RecordingBuffer {
    fn set_pixel(&mut self, index: usize, color: Rgb8) {
        self.writes.push(index);
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = Some(color);
        }
    }

    fn len(&self) -> usize {
        self.pixels.len()
    }
}

// ============================================================================
// Mock Strip Host
// ============================================================================

/// Oracle owning its segment list, so the host can hand out a reference
pub struct OwnedSegments(pub Vec<Segment>);

impl OccupancyOracle for OwnedSegments {
    fn is_occupied(&self, index: usize) -> bool {
        SegmentOccupancy::new(&self.0).is_occupied(index)
    }
}

/// Strip host with a busy flag, recording buffer and segment list
pub struct MockStrip {
    pub updating: bool,
    pub buffer: RecordingBuffer,
    pub segments: OwnedSegments,
}

impl MockStrip {
    pub fn new(len: usize) -> Self {
        Self {
            updating: false,
            buffer: RecordingBuffer::new(len),
            segments: OwnedSegments(Vec::new()),
        }
    }
}

impl StripHost for MockStrip {
    type Buffer = RecordingBuffer;
    type Occupancy = OwnedSegments;

    fn is_updating(&self) -> bool {
        self.updating
    }

    fn frame(&mut self) -> (&mut RecordingBuffer, &OwnedSegments) {
        (&mut self.buffer, &self.segments)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Small strip used by the scenario tests
pub fn small_config() -> ChaseConfig {
    ChaseConfig {
        enabled: true,
        hold_duration_ms: 100,
        wipe_delay_ms: 10,
        led_count: 10,
    }
}
