//! Card fade transitions.
//!
//! Every wizard step fades the card out, swaps the stage, and fades it back in.
//! The frame buffer has no alpha channel, so "opacity" is applied by blending
//! each pixel drawn on the card toward the page background:
//!
//! ```text
//! shown = lerp(drawn, background, 1 - opacity)
//! ```
//!
//! [`Faded`] wraps any RGB565 draw target and does that blend on the fly, so the
//! card widgets draw exactly as they would without a fade.
//!
//! # Performance Considerations
//!
//! - Blending uses 8-bit fixed-point integer math per channel
//! - Opacity 1.0 is a pass-through (no per-pixel work)

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::FADE_DURATION;

// =============================================================================
// Fade State
// =============================================================================

/// Linear opacity animation between two levels.
#[derive(Clone, Copy, Debug)]
pub struct Fade {
    from: f32,
    to: f32,
    started: Option<Instant>,
    duration: Duration,
}

impl Fade {
    /// Fully visible, not animating.
    pub const fn visible() -> Self {
        Self {
            from: 1.0,
            to: 1.0,
            started: None,
            duration: FADE_DURATION,
        }
    }

    /// Opacity at `now`, in `[0, 1]`.
    pub fn opacity(
        &self,
        now: Instant,
    ) -> f32 {
        let Some(started) = self.started else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.to - self.from).mul_add(progress, self.from)
    }

    /// Begin fading out from the current opacity.
    pub fn fade_out(
        &mut self,
        now: Instant,
    ) {
        self.retarget(now, 0.0);
    }

    /// Begin fading in from the current opacity.
    pub fn fade_in(
        &mut self,
        now: Instant,
    ) {
        self.retarget(now, 1.0);
    }

    fn retarget(
        &mut self,
        now: Instant,
        to: f32,
    ) {
        self.from = self.opacity(now);
        self.to = to;
        self.started = Some(now);
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::visible()
    }
}

// =============================================================================
// Faded Draw Target
// =============================================================================

/// Draw target adapter that blends every pixel toward a background color.
pub struct Faded<'a, D> {
    parent: &'a mut D,
    background: Rgb565,
    opacity: f32,
}

impl<'a, D> Faded<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap `parent`. `opacity` is clamped to `[0, 1]`.
    pub fn new(
        parent: &'a mut D,
        background: Rgb565,
        opacity: f32,
    ) -> Self {
        Self {
            parent,
            background,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

impl<D> Dimensions for Faded<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn bounding_box(&self) -> Rectangle {
        self.parent.bounding_box()
    }
}

impl<D> DrawTarget for Faded<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        if self.opacity >= 1.0 {
            return self.parent.draw_iter(pixels);
        }
        let background = self.background;
        let t = 1.0 - self.opacity;
        self.parent.draw_iter(
            pixels
                .into_iter()
                .map(|Pixel(point, color)| Pixel(point, lerp_rgb565(color, background, t))),
        )
    }
}

// =============================================================================
// Color Interpolation
// =============================================================================

/// Linear interpolation between two Rgb565 colors.
///
/// Works on the raw 5-6-5 channels with 8 bits of fixed-point fraction.
/// `t = 0` returns `from`, `t = 1` returns `to`.
pub fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;
    if t_fixed == 0 {
        return from;
    }
    if t_fixed >= 256 {
        return to;
    }

    let mix = |a: u8, b: u8| -> u8 {
        let a = i32::from(a);
        let b = i32::from(b);
        (a + (((b - a) * t_fixed) >> 8)) as u8
    };

    Rgb565::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

// =============================================================================
// Unit Tests
// =============================================================================
