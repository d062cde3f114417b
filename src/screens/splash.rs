//! Boot splash with the decorative fortune teller.
//!
//! # Visual Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │       JUDY SE KWAKKIE        │  ProFont 24, white
//! │                              │
//! │   ┌──────────────────────┐   │
//! │   │  static teller       │   │  300x300, corners fold with a slow sine
//! │   └──────────────────────┘   │
//! │                              │
//! │    press any key to begin    │  6x10, white
//! └──────────────────────────────┘
//! ```
//!
//! Shown for [`SPLASH_DURATION`] before the landing page. Any key or click
//! skips it.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};

use crate::colors::PAGE_GREEN;
use crate::config::{CENTER_X, FRAME_TIME, SPLASH_DURATION};
use crate::renderers::{CANVAS_AREA, StaticFortuneRenderer};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, TITLE_STYLE};

// =============================================================================
// Layout Constants
// =============================================================================

const TITLE_Y: i32 = 60;

/// Top-left of the teller canvas.
const CANVAS_OFFSET: Point = Point::new(20, 100);

const HINT_Y: i32 = 450;

// =============================================================================
// Splash Screen
// =============================================================================

/// Draw one splash frame with the teller at its current phase.
pub fn draw_splash<D>(
    target: &mut D,
    teller: &StaticFortuneRenderer,
) where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(PAGE_GREEN).ok();

    Text::with_text_style("JUDY SE KWAKKIE", Point::new(CENTER_X, TITLE_Y), TITLE_STYLE, CENTERED)
        .draw(target)
        .ok();

    teller.draw(&mut target.translated(CANVAS_OFFSET).clipped(&CANVAS_AREA));

    Text::with_text_style(
        "press any key to begin",
        Point::new(CENTER_X, HINT_Y),
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(target)
    .ok();
}

/// Run the splash screen.
///
/// Returns `false` if the window is closed, `true` when the splash ends or is
/// skipped.
pub fn run_splash_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
) -> bool {
    let start = Instant::now();
    let mut teller = StaticFortuneRenderer::default();

    while start.elapsed() < SPLASH_DURATION {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return false,
                SimulatorEvent::KeyDown { .. } | SimulatorEvent::MouseButtonUp { .. } => return true,
                _ => {}
            }
        }

        teller.update(start.elapsed().as_secs_f64() * 1000.0);
        draw_splash(display, &teller);

        window.update(display);
        thread::sleep(FRAME_TIME);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUSH, MINT};
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn test_splash_places_teller_on_canvas() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_splash(&mut display, &StaticFortuneRenderer::new(0.0));

        assert_eq!(display.get_pixel(Point::new(5, 5)), PAGE_GREEN, "Page background");
        // Squares are 100px at canvas (50..150, 50..150) etc; sample well inside.
        assert_eq!(display.get_pixel(CANVAS_OFFSET + Point::new(120, 120)), BLUSH);
        assert_eq!(display.get_pixel(CANVAS_OFFSET + Point::new(230, 230)), MINT);
    }
}
