//! Single-line text field.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Will it rain tomor|          │  2px BUTTON_GREEN border, white fill
//! └──────────────────────────────┘
//! ```
//!
//! Text that does not fit is scrolled so the end (where typing happens) stays
//! visible. An empty field shows the placeholder in gray.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{CornerRadii, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::colors::{BUTTON_GREEN, WHITE};
use crate::styles::{BODY_CHAR_WIDTH, INPUT_STYLE, LEFT_MIDDLE, PLACEHOLDER_STYLE};

/// Inner horizontal padding.
const PADDING_X: i32 = 10;

/// Height of the text cursor.
const CURSOR_HEIGHT: i32 = 15;

/// Tail of `text` that fits in `max_chars` characters.
fn visible_tail(
    text: &str,
    max_chars: usize,
) -> &str {
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    let skip = count - max_chars;
    text.char_indices().nth(skip).map_or("", |(i, _)| &text[i..])
}

/// Draw the field at `area` containing `text`.
///
/// The cursor is drawn after the text when `cursor_visible` is set (the
/// caller blinks it).
pub fn draw_text_input<D>(
    target: &mut D,
    area: Rectangle,
    text: &str,
    placeholder: &str,
    cursor_visible: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let frame = PrimitiveStyleBuilder::new()
        .fill_color(WHITE)
        .stroke_color(BUTTON_GREEN)
        .stroke_width(2)
        .build();
    RoundedRectangle::new(area, CornerRadii::new(Size::new(6, 6)))
        .into_styled(frame)
        .draw(target)
        .ok();

    let max_chars = (area.size.width.saturating_sub(2 * PADDING_X as u32 + 2) / BODY_CHAR_WIDTH) as usize;
    let origin = Point::new(area.top_left.x + PADDING_X, area.center().y);

    let end_x = if text.is_empty() {
        Text::with_text_style(placeholder, origin, PLACEHOLDER_STYLE, LEFT_MIDDLE)
            .draw(target)
            .ok();
        origin.x
    } else {
        let shown = visible_tail(text, max_chars);
        Text::with_text_style(shown, origin, INPUT_STYLE, LEFT_MIDDLE)
            .draw(target)
            .map_or(origin.x, |next| next.x)
    };

    if cursor_visible {
        let top = Point::new(end_x + 1, origin.y - CURSOR_HEIGHT / 2);
        Line::new(top, top + Point::new(0, CURSOR_HEIGHT))
            .into_styled(PrimitiveStyle::with_stroke(BUTTON_GREEN, 1))
            .draw(target)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("short", 10), "short");
        assert_eq!(visible_tail("abcdefgh", 3), "fgh");
        assert_eq!(visible_tail("ééé", 2), "éé");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn test_input_frame_and_fill() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(200, 50));
        let area = Rectangle::new(Point::new(0, 0), Size::new(200, 40));
        draw_text_input(&mut display, area, "", "Enter your question...", false);

        assert_eq!(display.get_pixel(Point::new(100, 0)), BUTTON_GREEN, "Top border");
        assert_eq!(display.get_pixel(Point::new(190, 20)), WHITE, "Interior fill");
    }

    #[test]
    fn test_cursor_drawn_when_visible() {
        let area = Rectangle::new(Point::new(0, 0), Size::new(200, 40));

        let mut shown: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(200, 50));
        draw_text_input(&mut shown, area, "", "", true);
        assert_eq!(shown.get_pixel(Point::new(PADDING_X + 1, 20)), BUTTON_GREEN);

        let mut hidden: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(200, 50));
        draw_text_input(&mut hidden, area, "", "", false);
        assert_eq!(hidden.get_pixel(Point::new(PADDING_X + 1, 20)), WHITE);
    }
}
