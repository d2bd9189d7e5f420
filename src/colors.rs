//! Fixed colors used by the logo overlay.
//!
//! All colors are 8-bit sRGB, the native format of WS2812-style strips.

use palette::Srgb;

/// 8-bit sRGB color as written to the strip.
pub type Rgb8 = Srgb<u8>;

/// Logo orange.
pub const SANDER_ORANGE: Rgb8 = Srgb::new(255, 218, 51);

/// Logo green.
pub const SANDER_GREEN: Rgb8 = Srgb::new(56, 255, 215);

/// Logo blue.
pub const SANDER_BLUE: Rgb8 = Srgb::new(128, 170, 255);

/// Background color outside the wipe front.
pub const WHITE: Rgb8 = Srgb::new(255, 255, 255);

/// Wipe front color. Matches the logo blue.
pub const WIPE_BLUE: Rgb8 = SANDER_BLUE;

/// All channels off.
pub const OFF: Rgb8 = Srgb::new(0, 0, 0);

/// Unpacks a `0xRRGGBB` value. The top byte is ignored.
#[inline]
pub const fn rgb_from_u32(packed: u32) -> Rgb8 {
    Srgb::new(
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}

/// Packs a color into `0xRRGGBB`.
#[inline]
pub const fn rgb_to_u32(color: Rgb8) -> u32 {
    ((color.red as u32) << 16) | ((color.green as u32) << 8) | color.blue as u32
}
