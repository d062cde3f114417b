//! Decorative fortune teller for the boot splash.
//!
//! Four flat squares around the canvas center, each with a small corner
//! triangle that grows and shrinks with a slow sine wave. It has no playback
//! state and signals nothing; it simply follows the clock.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};

use crate::colors::{BLACK, BLUSH, CORAL, MINT, SEAFOAM, SKY, SOFT_BLUE, STEEL_BLUE, TURQUOISE};
use crate::geometry::{CANVAS_CENTER, Corner, FOLD_WIDTH, fold_amount, fold_triangle_size};
use crate::renderers::{clear_canvas, draw_closed_triangle, surface_available};

/// Time scale of the static teller, in milliseconds per radian.
pub const STATIC_TIME_SCALE_MS: f64 = 1000.0;

/// Square fill and fold color per corner.
const fn corner_colors(corner: Corner) -> (Rgb565, Rgb565) {
    match corner {
        Corner::TopLeft => (BLUSH, SKY),
        Corner::TopRight => (STEEL_BLUE, CORAL),
        Corner::BottomLeft => (SOFT_BLUE, SEAFOAM),
        Corner::BottomRight => (MINT, TURQUOISE),
    }
}

/// Filled and outlined square style.
fn square_style(fill: Rgb565) -> PrimitiveStyle<Rgb565> {
    PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(BLACK)
        .stroke_width(2)
        .build()
}

/// The decorative fortune teller.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticFortuneRenderer {
    fold: f32,
}

impl StaticFortuneRenderer {
    /// Create a renderer showing the phase at `time_ms`.
    pub fn new(time_ms: f64) -> Self {
        let mut renderer = Self::default();
        renderer.update(time_ms);
        renderer
    }

    /// Advance to `time_ms`.
    pub fn update(
        &mut self,
        time_ms: f64,
    ) {
        let sine = (time_ms / STATIC_TIME_SCALE_MS).sin() as f32;
        self.fold = fold_amount(sine);
    }

    /// Current fold amount in `[0, 1]`.
    #[inline]
    pub const fn fold(&self) -> f32 {
        self.fold
    }

    /// Draw the current frame in canvas coordinates.
    pub fn draw<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if !surface_available(target) {
            return;
        }

        clear_canvas(target);

        let side = FOLD_WIDTH as u32;
        for corner in Corner::ALL {
            let (fill, _) = corner_colors(corner);
            Rectangle::new(corner.origin(CANVAS_CENTER), Size::new(side, side))
                .into_styled(square_style(fill))
                .draw(target)
                .ok();
        }

        let size = fold_triangle_size(self.fold);
        for corner in Corner::ALL {
            let (_, fold_color) = corner_colors(corner);
            draw_closed_triangle(target, corner.fold_triangle(CANVAS_CENTER, size), fold_color);
        }
    }
}
