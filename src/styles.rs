//! Pre-computed static text styles.
//!
//! `MonoTextStyle::new` and `TextStyleBuilder` are const fn in embedded-graphics
//! 0.8, so every style the pages use is built at compile time.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13, FONT_9X15_BOLD, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{BUTTON_GREEN, FALLBACK_TEXT, GRAY_TEXT, PAGE_GREEN, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered on the alphabetic baseline. Headings and captions.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Centered both ways around the anchor point. Button labels.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left aligned, vertically centered. Text input contents.
pub const LEFT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Right aligned on the baseline. FPS counter on the debug page.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Character Cell Widths (for wrapping and centering math)
// =============================================================================

/// Width of one `FONT_7X13` glyph.
pub const BODY_CHAR_WIDTH: u32 = 7;

/// Width of one `FONT_10X20` glyph.
pub const HEADING_CHAR_WIDTH: u32 = 10;

/// Width of one `ProFont` 18pt glyph.
pub const ANSWER_CHAR_WIDTH: u32 = 12;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Landing page title.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Question heading above the card.
pub const HEADING_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Prompts and captions inside the card.
pub const BODY_STYLE_GREEN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, PAGE_GREEN);

/// Text typed into the question field.
pub const INPUT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, BUTTON_GREEN);

/// Placeholder shown in the empty question field.
pub const PLACEHOLDER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, GRAY_TEXT);

/// Button labels.
pub const BUTTON_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15_BOLD, WHITE);

/// The fortune itself.
pub const ANSWER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, PAGE_GREEN);

/// Image fallback message.
pub const FALLBACK_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, FALLBACK_TEXT);

/// Small text on the splash and debug screens.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);
