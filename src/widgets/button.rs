//! Clickable buttons.
//!
//! A button is a rounded rectangle with a centered label. Hit-testing uses the
//! full bounding rectangle (the rounded corners are not excluded).

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{CornerRadii, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::styles::{BUTTON_STYLE, CENTERED_MIDDLE};

/// Corner radius of every button.
const CORNER_RADIUS: u32 = 8;

/// A labelled, clickable rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Button {
    area: Rectangle,
    label: &'static str,
    fill: Rgb565,
    style: MonoTextStyle<'static, Rgb565>,
}

impl Button {
    /// Button at `area` with a white bold label.
    pub const fn new(
        area: Rectangle,
        label: &'static str,
        fill: Rgb565,
    ) -> Self {
        Self {
            area,
            label,
            fill,
            style: BUTTON_STYLE,
        }
    }

    /// Same button with a different label style.
    pub const fn with_style(
        mut self,
        style: MonoTextStyle<'static, Rgb565>,
    ) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub const fn area(&self) -> Rectangle {
        self.area
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Whether `point` is on the button.
    #[inline]
    pub fn contains(
        &self,
        point: Point,
    ) -> bool {
        self.area.contains(point)
    }

    pub fn draw<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        RoundedRectangle::new(self.area, CornerRadii::new(Size::new(CORNER_RADIUS, CORNER_RADIUS)))
            .into_styled(PrimitiveStyle::with_fill(self.fill))
            .draw(target)
            .ok();
        Text::with_text_style(self.label, self.area.center(), self.style, CENTERED_MIDDLE)
            .draw(target)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::{BLACK, BUTTON_GREEN};

    fn sample() -> Button {
        Button::new(Rectangle::new(Point::new(10, 20), Size::new(100, 40)), "Go", BUTTON_GREEN)
    }

    #[test]
    fn test_contains_edges() {
        let button = sample();
        assert!(button.contains(Point::new(10, 20)), "Top-left is inside");
        assert!(button.contains(Point::new(109, 59)), "Bottom-right is inside");
        assert!(!button.contains(Point::new(110, 40)), "One past the right edge is outside");
        assert!(!button.contains(Point::new(50, 19)));
    }

    #[test]
    fn test_draw_fills_body_and_rounds_corners() {
        let button = sample();
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(120, 70));
        display.clear(BLACK).ok();
        button.draw(&mut display);

        assert_eq!(display.get_pixel(Point::new(15, 40)), BUTTON_GREEN, "Body is filled");
        assert_eq!(display.get_pixel(Point::new(10, 20)), BLACK, "Corner pixel is rounded off");
    }
}
