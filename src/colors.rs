//! Color constants for the fortune teller pages.
//!
//! The palette was specified as 24-bit hex values; [`rgb888`] packs them into
//! RGB565 at compile time by dropping the low bits of each channel.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Convert a `0xRRGGBB` value to RGB565.
pub const fn rgb888(hex: u32) -> Rgb565 {
    let r = ((hex >> 16) & 0xFF) as u8;
    let g = ((hex >> 8) & 0xFF) as u8;
    let b = (hex & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Polygon outlines.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Card background and text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Page Chrome
// =============================================================================

/// Page background (forest green).
pub const PAGE_GREEN: Rgb565 = rgb888(0x1D_45_23);

/// Buttons and input border (slightly lighter green).
pub const BUTTON_GREEN: Rgb565 = rgb888(0x2D_55_33);

/// Answer panel background (parchment).
pub const PARCHMENT: Rgb565 = rgb888(0xFD_F7_E4);

/// Image fallback panel background.
pub const FALLBACK_BG: Rgb565 = rgb888(0xF3_F4_F6);

/// Image fallback icon.
pub const FALLBACK_ICON: Rgb565 = rgb888(0x9C_A3_AF);

/// Image fallback message.
pub const FALLBACK_TEXT: Rgb565 = rgb888(0x4B_55_63);

/// Input placeholder text.
pub const GRAY_TEXT: Rgb565 = rgb888(0x9C_A3_AF);

// =============================================================================
// Interactive Fortune Teller (outer flaps)
// =============================================================================

/// Warm yellow (NE flap).
pub const YELLOW: Rgb565 = rgb888(0xFA_D0_2E);

/// Peach (SE flap).
pub const PEACH: Rgb565 = rgb888(0xFF_9A_76);

/// Teal (NW flap).
pub const TEAL: Rgb565 = rgb888(0x79_A8_A9);

/// Amethyst purple (SW flap).
pub const PURPLE: Rgb565 = rgb888(0x9B_59_B6);

// =============================================================================
// Interactive Fortune Teller (inner triangles)
// =============================================================================

/// Soft blue (NE inside).
pub const SOFT_BLUE: Rgb565 = rgb888(0xA8_D8_EA);

/// Sage green (SE inside).
pub const SAGE: Rgb565 = rgb888(0xAA_CD_BE);

/// Dusty rose (NW inside).
pub const DUSTY_ROSE: Rgb565 = rgb888(0xE6_B0_AA);

/// Soft lavender (SW inside).
pub const LAVENDER: Rgb565 = rgb888(0xD7_BD_E2);

// =============================================================================
// Static Fortune Teller
// =============================================================================

/// Top-left square.
pub const BLUSH: Rgb565 = rgb888(0xE6_A4_B4);

/// Top-right square.
pub const STEEL_BLUE: Rgb565 = rgb888(0x98_C1_D9);

/// Bottom-right square.
pub const MINT: Rgb565 = rgb888(0xB8_E0_D2);

/// Corner triangle on the top-left square.
pub const SKY: Rgb565 = rgb888(0x45_B7_D1);

/// Corner triangle on the top-right square.
pub const CORAL: Rgb565 = rgb888(0xFF_6B_6B);

/// Corner triangle on the bottom-left square.
pub const SEAFOAM: Rgb565 = rgb888(0x96_CE_B4);

/// Corner triangle on the bottom-right square.
pub const TURQUOISE: Rgb565 = rgb888(0x4E_CD_C4);

// =============================================================================
// Debug Page
// =============================================================================

/// Title and log prompt.
pub const TERMINAL_GREEN: Rgb565 = Rgb565::new(0, 63, 0);

/// Log text.
pub const TERMINAL_AMBER: Rgb565 = Rgb565::new(31, 40, 0);

/// Min/max/avg highlights.
pub const HIGHLIGHT_YELLOW: Rgb565 = Rgb565::new(31, 63, 0);

/// Section headers and dividers.
pub const DIM_GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Log terminal background.
pub const TERMINAL_BG: Rgb565 = Rgb565::new(1, 2, 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb888_extremes() {
        assert_eq!(rgb888(0x00_00_00), BLACK);
        assert_eq!(rgb888(0xFF_FF_FF), WHITE);
    }

    #[test]
    fn test_rgb888_channels() {
        assert_eq!(rgb888(0xFF_00_00), Rgb565::RED);
        assert_eq!(rgb888(0x00_FF_00), Rgb565::GREEN);
        assert_eq!(rgb888(0x00_00_FF), Rgb565::BLUE);
    }

    #[test]
    fn test_rgb888_truncates_low_bits() {
        // 0x1D = 0b0001_1101 -> 5 bits = 3; 0x45 -> 6 bits = 17; 0x23 -> 5 bits = 4
        assert_eq!(PAGE_GREEN, Rgb565::new(3, 17, 4));
    }
}
