//! Landing page (`/`).
//!
//! ```text
//! ┌──────────────────────────────┐
//! │       JUDY SE KWAKKIE        │
//! │ ┌──────────────────────────┐ │
//! │ │   illustration, or the   │ │  300x240 slot
//! │ │   fallback panel         │ │
//! │ └──────────────────────────┘ │
//! │   [ Learn your fortune > ]   │
//! └──────────────────────────────┘
//! ```

use std::path::Path;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{CornerRadii, Line, Polyline, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::assets::ImageAsset;
use crate::colors::{BUTTON_GREEN, FALLBACK_BG, FALLBACK_ICON, PAGE_GREEN};
use crate::config::CENTER_X;
use crate::input::InputEvent;
use crate::log_line;
use crate::pages::Route;
use crate::profiling::DebugLog;
use crate::styles::{CENTERED, FALLBACK_STYLE, TITLE_STYLE};
use crate::widgets::Button;

// =============================================================================
// Layout Constants
// =============================================================================

const TITLE_Y: i32 = 56;

/// Illustration slot.
pub const IMAGE_SLOT: Rectangle = Rectangle::new(Point::new(20, 84), Size::new(300, 240));

const FORTUNE_BUTTON: Button = Button::new(
    Rectangle::new(Point::new(60, 356), Size::new(220, 44)),
    "Learn your fortune >",
    BUTTON_GREEN,
);

/// Crossed-out picture icon size.
const ICON_SIZE: Size = Size::new(48, 40);

// =============================================================================
// Home Page
// =============================================================================

/// The landing page.
pub struct HomePage {
    image: Option<ImageAsset>,
}

impl HomePage {
    /// Load the illustration from `path`. Failures are logged and fall back.
    pub fn load(
        path: impl AsRef<Path>,
        log: &mut DebugLog,
    ) -> Self {
        let image = match ImageAsset::load(path, IMAGE_SLOT.size) {
            Ok(image) => {
                log_line!(log, "image: {}x{}", image.size().width, image.size().height);
                Some(image)
            }
            Err(err) => {
                log_line!(log, "image: {err}");
                None
            }
        };
        Self { image }
    }

    /// Page without an illustration (always shows the fallback).
    pub const fn without_image() -> Self {
        Self { image: None }
    }

    #[inline]
    pub const fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Handle an input event. Returns the route to navigate to.
    pub fn handle(
        &self,
        event: InputEvent,
    ) -> Option<Route> {
        match event {
            InputEvent::Submit => Some(Route::Fortune),
            InputEvent::Click(point) if FORTUNE_BUTTON.contains(point) => Some(Route::Fortune),
            _ => None,
        }
    }

    pub fn draw<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(PAGE_GREEN).ok();

        Text::with_text_style("JUDY SE KWAKKIE", Point::new(CENTER_X, TITLE_Y), TITLE_STYLE, CENTERED)
            .draw(target)
            .ok();

        match &self.image {
            Some(image) => image.draw(target, IMAGE_SLOT),
            None => draw_fallback(target, IMAGE_SLOT),
        }

        FORTUNE_BUTTON.draw(target);
    }
}

/// Gray panel with a crossed-out picture and a message.
fn draw_fallback<D>(
    target: &mut D,
    slot: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::new(slot, CornerRadii::new(Size::new(8, 8)))
        .into_styled(PrimitiveStyle::with_fill(FALLBACK_BG))
        .draw(target)
        .ok();

    let stroke = PrimitiveStyle::with_stroke(FALLBACK_ICON, 3);
    let icon = Rectangle::with_center(slot.center() - Point::new(0, 16), ICON_SIZE);
    let Some(bottom_right) = icon.bottom_right() else {
        return;
    };
    let top_left = icon.top_left;

    RoundedRectangle::new(icon, CornerRadii::new(Size::new(4, 4)))
        .into_styled(stroke)
        .draw(target)
        .ok();
    // Mountains.
    let mountains = [
        Point::new(top_left.x + 4, bottom_right.y - 6),
        Point::new(top_left.x + 18, top_left.y + 18),
        Point::new(top_left.x + 28, top_left.y + 28),
        Point::new(top_left.x + 36, top_left.y + 20),
        Point::new(bottom_right.x - 4, bottom_right.y - 6),
    ];
    Polyline::new(&mountains).into_styled(stroke).draw(target).ok();
    // Strike-through.
    Line::new(top_left - Point::new(4, 4), bottom_right + Point::new(4, 4))
        .into_styled(stroke)
        .draw(target)
        .ok();

    Text::with_text_style(
        "Image could not be loaded",
        Point::new(slot.center().x, bottom_right.y + 28),
        FALLBACK_STYLE,
        CENTERED,
    )
    .draw(target)
    .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn screen() -> SimulatorDisplay<Rgb565> {
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn test_missing_image_falls_back() {
        let mut log = DebugLog::quiet();
        let page = HomePage::load("/nonexistent/judy_image.png", &mut log);
        assert!(!page.has_image());
        assert!(log.iter().any(|line| line.starts_with("image: failed to load")), "Failure is logged");
    }

    #[test]
    fn test_bundled_image_loads() {
        let mut log = DebugLog::quiet();
        let page = HomePage::load(crate::config::JUDY_IMAGE_PATH, &mut log);
        assert!(page.has_image());
        assert!(log.iter().any(|line| line == "image: 300x240"), "Image fills its slot");

        let mut display = screen();
        page.draw(&mut display);
        assert_ne!(display.get_pixel(IMAGE_SLOT.top_left + Point::new(20, 20)), FALLBACK_BG);
    }

    #[test]
    fn test_fallback_panel_drawn() {
        let page = HomePage::without_image();
        let mut display = screen();
        page.draw(&mut display);

        assert_eq!(display.get_pixel(IMAGE_SLOT.top_left + Point::new(20, 20)), FALLBACK_BG);
        assert_eq!(display.get_pixel(Point::new(2, 2)), PAGE_GREEN);

        let center = IMAGE_SLOT.center() - Point::new(0, 16);
        assert_eq!(display.get_pixel(center), FALLBACK_ICON, "Strike-through crosses the icon center");
    }

    #[test]
    fn test_button_navigates() {
        let page = HomePage::without_image();
        let inside = FORTUNE_BUTTON.area().center();
        assert_eq!(page.handle(InputEvent::Click(inside)), Some(Route::Fortune));
        assert_eq!(page.handle(InputEvent::Submit), Some(Route::Fortune));
        assert_eq!(page.handle(InputEvent::Click(Point::new(5, 5))), None);
        assert_eq!(page.handle(InputEvent::Char('x')), None);
    }

    #[test]
    fn test_button_drawn() {
        let page = HomePage::without_image();
        let mut display = screen();
        page.draw(&mut display);
        let area = FORTUNE_BUTTON.area();
        assert_eq!(display.get_pixel(area.top_left + Point::new(4, 22)), BUTTON_GREEN);
    }
}
