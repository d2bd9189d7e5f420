use crate::compositor::PixelBuffer;
use crate::occupancy::OccupancyOracle;
use crate::overlay::Overlay;
use crate::time::TimeInstant;
use heapless::Vec;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// The registry is full and cannot accept more overlays.
    RegistryFull,
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegistryError::RegistryFull => {
                write!(f, "registry is full, cannot add more overlays")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

/// Fixed-capacity list of overlays driven together by a host scheduler.
///
/// Overlays are ticked and drawn in registration order, so later overlays
/// paint over earlier ones where both draw.
///
/// # Type Parameters
/// * `'a` - Lifetime of the borrowed overlays
/// * `I` - Time instant type
/// * `MAX_OVERLAYS` - Maximum number of overlays this registry can hold
pub struct OverlayRegistry<'a, I: TimeInstant, const MAX_OVERLAYS: usize> {
    overlays: Vec<&'a mut dyn Overlay<I>, MAX_OVERLAYS>,
}

impl<'a, I: TimeInstant, const MAX_OVERLAYS: usize> OverlayRegistry<'a, I, MAX_OVERLAYS> {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            overlays: Vec::new(),
        }
    }

    /// Adds an overlay to the registry.
    ///
    /// # Errors
    /// * `RegistryFull` - The registry already holds `MAX_OVERLAYS` overlays
    pub fn register(&mut self, overlay: &'a mut dyn Overlay<I>) -> Result<(), RegistryError> {
        self.overlays
            .push(overlay)
            .map_err(|_| RegistryError::RegistryFull)
    }

    /// Calls [`Overlay::setup`] on every overlay.
    pub fn setup_all(&mut self, now: I) {
        for overlay in self.overlays.iter_mut() {
            overlay.setup(now);
        }
    }

    /// Calls [`Overlay::advance_tick`] on every overlay.
    pub fn advance_all(&mut self, now: I) {
        for overlay in self.overlays.iter_mut() {
            overlay.advance_tick(now);
        }
    }

    /// Draws every enabled overlay. Returns the total number of pixels written.
    pub fn draw_all(&self, frame: &mut dyn PixelBuffer, occupancy: &dyn OccupancyOracle) -> usize {
        let mut written = 0;
        for overlay in self.overlays.iter().filter(|overlay| overlay.is_enabled()) {
            written += overlay.draw_overlay(&mut *frame, occupancy);
        }
        written
    }

    /// Returns the number of registered overlays.
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Returns true if no overlay is registered.
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

impl<I: TimeInstant, const MAX_OVERLAYS: usize> Default for OverlayRegistry<'_, I, MAX_OVERLAYS> {
    fn default() -> Self {
        Self::new()
    }
}
