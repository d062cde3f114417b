//! Application configuration constants.
//!
//! Layout values that only one screen cares about live next to that screen.
//! Everything here is shared by the frame loop, the pages and the renderers.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Window width in pixels.
pub const SCREEN_WIDTH: u32 = 340;

/// Window height in pixels.
pub const SCREEN_HEIGHT: u32 = 540;

/// Simulator pixel scale (1 = one window pixel per display pixel).
pub const WINDOW_SCALE: u32 = 1;

/// Window title.
pub const WINDOW_TITLE: &str = "Judy se Kwakkie";

/// Horizontal screen center. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Side length of the square fortune teller surface.
pub const CANVAS_SIZE: u32 = 300;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The main loop sleeps if the frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// Delay between a wizard action and the stage change it triggers.
pub const TRANSITION_PAUSE: Duration = Duration::from_millis(500);

/// Length of a card fade (in or out).
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// How long the boot splash stays up unless skipped.
pub const SPLASH_DURATION: Duration = Duration::from_secs(3);

// =============================================================================
// Input / Assets
// =============================================================================

/// Maximum number of bytes in the question text.
pub const QUESTION_CAPACITY: usize = 64;

/// Landing page illustration. Missing or undecodable files show the fallback panel.
pub const JUDY_IMAGE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/judy_image.png");
