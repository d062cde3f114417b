//! Fortune teller geometry.
//!
//! Pure vertex math for both renderers. Nothing here draws; the renderers turn
//! these vertex lists into styled primitives.
//!
//! # Interactive Layout
//!
//! The paper is a 2w × 2w square around the canvas center, split into four
//! quadrants. Each quadrant has two inner triangles and one outer flap:
//!
//! ```text
//!            V (center + sy*w)
//!            |\
//!            | \  far corner
//!            |  F
//!            | / \
//!            T----H (center + sx*w)
//!           /
//!     center
//! ```
//!
//! `T` (the tip) is the center pushed out by `(sx * x, sy * y)`. `x` grows while
//! the wave is positive and `y` while it is negative, so the teller opens in one
//! direction and then the other.

use embedded_graphics::prelude::Point;

use crate::config::CANVAS_SIZE;

/// Half the side of the paper square (one quadrant edge), in pixels.
pub const FOLD_WIDTH: f32 = 100.0;

/// Largest displacement of a tip.
pub const HALF_FOLD: f32 = FOLD_WIDTH / 2.0;

/// Center of the drawing surface.
pub const CANVAS_CENTER: Point = Point::new((CANVAS_SIZE / 2) as i32, (CANVAS_SIZE / 2) as i32);

/// Integer quadrant edge used for vertex offsets.
const W: i32 = FOLD_WIDTH as i32;

// =============================================================================
// Displacement
// =============================================================================

/// Tip displacement for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displacement {
    /// Horizontal opening, in `[0, HALF_FOLD]`.
    pub x: f32,
    /// Vertical opening, in `[0, HALF_FOLD]`.
    pub y: f32,
}

impl Displacement {
    /// Displacement for a sine value in `[-1, 1]`.
    ///
    /// `x` follows the wave and `y` follows the wave shifted by π. Each is mapped
    /// to `[0, w]` and then clamped from below at `w/2`, which leaves `[0, w/2]`.
    pub fn from_sine(sine: f32) -> Self {
        Self {
            x: clamp_half(sine),
            y: clamp_half(-sine),
        }
    }
}

fn clamp_half(wave: f32) -> f32 {
    let scaled = (wave + 1.0) / 2.0 * FOLD_WIDTH;
    (scaled.max(HALF_FOLD) - HALF_FOLD).min(HALF_FOLD)
}

// =============================================================================
// Quadrants
// =============================================================================

/// One quarter of the paper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    NorthEast,
    SouthEast,
    NorthWest,
    SouthWest,
}

impl Quadrant {
    /// Paint order (matches the layering of the paper toy).
    pub const ALL: [Self; 4] = [Self::NorthEast, Self::SouthEast, Self::NorthWest, Self::SouthWest];

    /// Screen-space signs `(sx, sy)`. Y grows downwards, so north is negative.
    #[inline]
    pub const fn signs(self) -> (i32, i32) {
        match self {
            Self::NorthEast => (1, -1),
            Self::SouthEast => (1, 1),
            Self::NorthWest => (-1, -1),
            Self::SouthWest => (-1, 1),
        }
    }
}

/// Vertices of one quadrant for a given displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadrantVertices {
    /// Displaced tip.
    pub tip: Point,
    /// Point on the horizontal axis, one quadrant edge from the center.
    pub horizontal: Point,
    /// Point on the vertical axis, one quadrant edge from the center.
    pub vertical: Point,
    /// Outer corner of the flap, pulled in by the displacement.
    pub far: Point,
}

impl QuadrantVertices {
    /// Compute the vertices of `quadrant` around `center`.
    pub fn new(
        quadrant: Quadrant,
        center: Point,
        displacement: Displacement,
    ) -> Self {
        let (sx, sy) = quadrant.signs();
        let dx = displacement.x.round() as i32;
        let dy = displacement.y.round() as i32;
        Self {
            tip: center + Point::new(sx * dx, sy * dy),
            horizontal: center + Point::new(sx * W, 0),
            vertical: center + Point::new(0, sy * W),
            far: center + Point::new(sx * (W - dx), sy * (W - dy)),
        }
    }

    /// The two inner triangles, each as `tip -> center -> edge`.
    pub const fn inner_triangles(
        &self,
        center: Point,
    ) -> [[Point; 3]; 2] {
        [[self.tip, center, self.horizontal], [self.tip, center, self.vertical]]
    }

    /// The outer flap as `tip -> horizontal -> far -> vertical`.
    pub const fn flap(&self) -> [Point; 4] {
        [self.tip, self.horizontal, self.far, self.vertical]
    }
}

// =============================================================================
// Static Layout
// =============================================================================

/// Folding amount of the static teller for a sine value, in `[0, 1]`.
#[inline]
pub fn fold_amount(sine: f32) -> f32 {
    ((sine + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// One square of the static teller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Paint order.
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BottomLeft, Self::BottomRight];

    /// Top-left corner of this square.
    pub const fn origin(
        self,
        center: Point,
    ) -> Point {
        match self {
            Self::TopLeft => Point::new(center.x - W, center.y - W),
            Self::TopRight => Point::new(center.x, center.y - W),
            Self::BottomLeft => Point::new(center.x - W, center.y),
            Self::BottomRight => Point::new(center.x, center.y),
        }
    }

    /// Folded corner triangle of this square, `size` pixels on its legs,
    /// anchored at the square's origin.
    pub const fn fold_triangle(
        self,
        center: Point,
        size: i32,
    ) -> [Point; 3] {
        let o = self.origin(center);
        let (x, y, s) = (o.x, o.y, size);
        match self {
            Self::TopLeft => [Point::new(x + s, y), Point::new(x + s, y + s), Point::new(x, y)],
            Self::TopRight => [Point::new(x, y), Point::new(x + s, y), Point::new(x, y + s)],
            Self::BottomLeft => [Point::new(x + s, y + s), Point::new(x, y + s), Point::new(x + s, y)],
            Self::BottomRight => [Point::new(x, y + s), Point::new(x + s, y + s), Point::new(x, y)],
        }
    }
}

/// Leg length of the static teller's corner triangles for a fold amount.
#[inline]
pub fn fold_triangle_size(fold: f32) -> i32 {
    (FOLD_WIDTH / 3.0 * fold).round() as i32
}

// =============================================================================
// Unit Tests
// =============================================================================
