//! Interactive fortune teller.
//!
//! Draws the opened paper toy and counts how many times it has flexed. The
//! wizard mounts one of these for every stage that shows the teller and reacts
//! to the completion returned from [`InteractiveFortuneRenderer::update`].
//!
//! # Paint Order
//!
//! 1. Canvas cleared to the card background
//! 2. Inner triangles (two per quadrant), stroked as open paths
//! 3. Outer flaps (one quadrilateral per quadrant), stroked closed
//!
//! The flaps go on top so the inside colors only show while the teller opens.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{DUSTY_ROSE, LAVENDER, PEACH, PURPLE, SAGE, SOFT_BLUE, TEAL, YELLOW};
use crate::geometry::{CANVAS_CENTER, Displacement, Quadrant, QuadrantVertices};
use crate::oscillator::{Completed, OscillationDriver, Playback, SpeedMultiplier};
use crate::renderers::{clear_canvas, draw_open_triangle, draw_quad, surface_available};

/// Inputs supplied by the page that owns the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RendererProps {
    /// Whether the teller should animate and count.
    pub playing: bool,
    /// Cycles to count before reporting completion.
    pub target_cycles: u32,
    /// Animation speed.
    pub speed: SpeedMultiplier,
}

impl RendererProps {
    /// A paused teller at the given speed.
    pub const fn paused(speed: SpeedMultiplier) -> Self {
        Self {
            playing: false,
            target_cycles: 0,
            speed,
        }
    }

    /// A teller that plays until `target_cycles` cycles have elapsed.
    pub const fn playing(
        target_cycles: u32,
        speed: SpeedMultiplier,
    ) -> Self {
        Self {
            playing: true,
            target_cycles,
            speed,
        }
    }
}

impl Default for RendererProps {
    fn default() -> Self {
        Self::paused(SpeedMultiplier::default())
    }
}

/// Fill colors of the inner triangles, per quadrant.
const fn inside_color(quadrant: Quadrant) -> Rgb565 {
    match quadrant {
        Quadrant::NorthEast => SOFT_BLUE,
        Quadrant::SouthEast => SAGE,
        Quadrant::NorthWest => DUSTY_ROSE,
        Quadrant::SouthWest => LAVENDER,
    }
}

/// Fill colors of the outer flaps, per quadrant.
const fn flap_color(quadrant: Quadrant) -> Rgb565 {
    match quadrant {
        Quadrant::NorthEast => YELLOW,
        Quadrant::SouthEast => PEACH,
        Quadrant::NorthWest => TEAL,
        Quadrant::SouthWest => PURPLE,
    }
}

/// The cycle-counting fortune teller.
#[derive(Clone, Debug)]
pub struct InteractiveFortuneRenderer {
    props: RendererProps,
    driver: OscillationDriver,
}

impl InteractiveFortuneRenderer {
    /// Mount a renderer at `time_ms`.
    ///
    /// The initial phase is computed immediately so a paused teller still shows
    /// a shape. A playing teller starts counting from zero.
    pub fn new(
        props: RendererProps,
        time_ms: f64,
    ) -> Self {
        let mut driver = OscillationDriver::new(props.speed, time_ms);
        if props.playing {
            driver.start(props.target_cycles);
        }
        Self { props, driver }
    }

    /// Advance one frame. Returns the completion on the frame the target is reached.
    pub fn update(
        &mut self,
        time_ms: f64,
    ) -> Option<Completed> {
        self.driver.tick(time_ms)
    }

    /// Stop counting. The teller freezes at its current shape.
    pub const fn stop(&mut self) {
        self.driver.stop();
    }

    /// Props the renderer was mounted with.
    #[inline]
    pub const fn props(&self) -> RendererProps {
        self.props
    }

    /// Cycles counted so far in this run.
    #[inline]
    pub const fn cycles(&self) -> u32 {
        self.driver.cycles()
    }

    /// Playback state of this run.
    #[inline]
    pub const fn playback(&self) -> Playback {
        self.driver.playback()
    }

    /// Tip displacement for the current phase.
    #[inline]
    pub fn displacement(&self) -> Displacement {
        Displacement::from_sine(self.driver.sine())
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

        let displacement = self.displacement();
        let quadrants = Quadrant::ALL.map(|q| (q, QuadrantVertices::new(q, CANVAS_CENTER, displacement)));

        for (quadrant, vertices) in &quadrants {
            for triangle in vertices.inner_triangles(CANVAS_CENTER) {
                draw_open_triangle(target, triangle, inside_color(*quadrant));
            }
        }

        for (quadrant, vertices) in &quadrants {
            draw_quad(target, vertices.flap(), flap_color(*quadrant));
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
