//! Fortune teller renderers.
//!
//! Both renderers draw onto a fixed [`CANVAS_SIZE`](crate::config::CANVAS_SIZE)
//! square surface. Callers position the surface with `translated()` and keep it
//! in bounds with `clipped()`; the renderers always draw in canvas coordinates.
//!
//! - [`interactive`]: eight facets and four flaps, counts cycles, reports completion
//! - [`static_teller`]: decorative squares with folding corners (boot splash)
//!
//! # Frame Protocol
//!
//! Each frame the owner calls `update()` with the elapsed time, then `draw()`.
//! A renderer that is not playing ignores `update()` and keeps drawing its last
//! phase.

pub mod interactive;
pub mod static_teller;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Polyline, PrimitiveStyle, Rectangle, Triangle};

use crate::colors::{BLACK, WHITE};
use crate::config::CANVAS_SIZE;

pub use interactive::{InteractiveFortuneRenderer, RendererProps};
pub use static_teller::StaticFortuneRenderer;

/// Outline style shared by every polygon (black, 2px).
pub const OUTLINE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 2);

/// Canvas background (the card is white).
const CANVAS_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// The canvas in its own coordinates.
pub const CANVAS_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(CANVAS_SIZE, CANVAS_SIZE));

/// Whether there is anything to draw on.
///
/// A zero-sized target (surface not mounted yet, or clipped away entirely) is
/// treated as absent and the renderers return early.
#[inline]
pub(crate) fn surface_available<D>(target: &D) -> bool
where
    D: DrawTarget<Color = Rgb565>,
{
    !target.bounding_box().is_zero_sized()
}

/// Clear the canvas area to the card background.
pub(crate) fn clear_canvas<D>(target: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    CANVAS_AREA.into_styled(CANVAS_FILL).draw(target).ok();
}

/// Fill a triangle and stroke only its first two edges (`a -> b -> c`).
pub(crate) fn draw_open_triangle<D>(
    target: &mut D,
    points: [Point; 3],
    fill: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Triangle::new(points[0], points[1], points[2])
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(target)
        .ok();
    Polyline::new(&points).into_styled(OUTLINE).draw(target).ok();
}

/// Fill a triangle and stroke its closed outline.
pub(crate) fn draw_closed_triangle<D>(
    target: &mut D,
    points: [Point; 3],
    fill: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Triangle::new(points[0], points[1], points[2])
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(target)
        .ok();
    let outline = [points[0], points[1], points[2], points[0]];
    Polyline::new(&outline).into_styled(OUTLINE).draw(target).ok();
}

/// Fill a convex quadrilateral (as two triangles) and stroke its closed outline.
pub(crate) fn draw_quad<D>(
    target: &mut D,
    points: [Point; 4],
    fill: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_fill(fill);
    let [a, b, c, d] = points;
    Triangle::new(a, b, c).into_styled(style).draw(target).ok();
    Triangle::new(a, c, d).into_styled(style).draw(target).ok();
    let outline = [a, b, c, d, a];
    Polyline::new(&outline).into_styled(OUTLINE).draw(target).ok();
}
