//! Application shell: the current route, both pages and the debug overlay.
//!
//! `main.rs` owns the window and the frame loop; everything that decides what
//! is on screen lives here so it can be driven from tests without SDL.

use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::input::InputEvent;
use crate::log_line;
use crate::pages::Route;
use crate::profiling::{DebugLog, ProfilingMetrics};
use crate::renderers::InteractiveFortuneRenderer;
use crate::screens::{AppStatus, FortunePage, HomePage, draw_debug_page};

/// Routed application state.
pub struct App {
    route: Route,
    home: HomePage,
    /// Mounted only while the route is `/fortune`.
    fortune: Option<FortunePage>,
    show_debug: bool,
}

impl App {
    /// Start on the landing page.
    pub const fn new(home: HomePage) -> Self {
        Self {
            route: Route::Home,
            home,
            fortune: None,
            show_debug: false,
        }
    }

    #[inline]
    pub const fn route(&self) -> Route {
        self.route
    }

    #[inline]
    pub const fn is_debug_shown(&self) -> bool {
        self.show_debug
    }

    #[inline]
    pub const fn fortune(&self) -> Option<&FortunePage> {
        self.fortune.as_ref()
    }

    /// Handle one input event.
    ///
    /// While the debug page is shown only `ToggleDebug` is accepted.
    pub fn handle(
        &mut self,
        event: InputEvent,
        now: Instant,
        log: &mut DebugLog,
    ) {
        if event == InputEvent::ToggleDebug {
            self.show_debug = !self.show_debug;
            log.push(if self.show_debug { "debug: on" } else { "debug: off" });
            return;
        }
        if self.show_debug {
            return;
        }

        let target = match self.route {
            Route::Home => self.home.handle(event),
            Route::Fortune => self
                .fortune
                .as_mut()
                .and_then(|page| page.handle(event, now, log)),
        };
        if let Some(route) = target {
            self.navigate(route, now, log);
        }
    }

    /// Switch routes. Entering `/fortune` mounts a fresh page; leaving drops it.
    pub fn navigate(
        &mut self,
        route: Route,
        now: Instant,
        log: &mut DebugLog,
    ) {
        if route == self.route {
            return;
        }
        self.route = route;
        self.fortune = match route {
            Route::Home => None,
            Route::Fortune => Some(FortunePage::new(now)),
        };
        log_line!(log, "route: {}", route.path());
    }

    /// Advance one frame.
    pub fn update(
        &mut self,
        now: Instant,
        log: &mut DebugLog,
        metrics: &mut ProfilingMetrics,
    ) {
        let Some(page) = self.fortune.as_mut() else {
            return;
        };
        if page.update(now, log).is_some() {
            metrics.inc_stage_changes();
            if page.renderer().is_some() {
                metrics.inc_renderer_mounts();
            }
        }
    }

    /// Snapshot for the debug page.
    pub fn status(&self) -> AppStatus {
        let wizard = self.fortune.as_ref().map(FortunePage::wizard);
        let renderer = self.fortune.as_ref().and_then(FortunePage::renderer);
        AppStatus {
            route: self.route,
            stage: wizard.map(|w| w.stage()),
            cycles: renderer.map(|r| (r.cycles(), r.props().target_cycles)),
            playback: renderer.map(InteractiveFortuneRenderer::playback),
            transition_pending: wizard.is_some_and(|w| w.pending().is_some()),
            image_loaded: self.home.has_image(),
        }
    }

    pub fn draw<D>(
        &self,
        target: &mut D,
        now: Instant,
        metrics: &ProfilingMetrics,
        log: &DebugLog,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.show_debug {
            draw_debug_page(target, metrics, &self.status(), log);
            return;
        }
        match (self.route, &self.fortune) {
            (Route::Fortune, Some(page)) => page.draw(target, now),
            _ => self.home.draw(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::{BLACK, FALLBACK_BG};
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TRANSITION_PAUSE};
    use crate::oscillator::Playback;
    use crate::screens::IMAGE_SLOT;
    use crate::wizard::Stage;

    fn app() -> (App, DebugLog, Instant) {
        (App::new(HomePage::without_image()), DebugLog::quiet(), Instant::now())
    }

    fn type_question(
        app: &mut App,
        text: &str,
        now: Instant,
        log: &mut DebugLog,
    ) {
        for c in text.chars() {
            app.handle(InputEvent::Char(c), now, log);
        }
        app.handle(InputEvent::Submit, now, log);
    }

    #[test]
    fn test_starts_on_home() {
        let (app, _, _) = app();
        assert_eq!(app.route(), Route::Home);
        assert!(app.fortune().is_none());
        assert!(!app.status().image_loaded);
    }

    #[test]
    fn test_submit_on_home_opens_fortune() {
        let (mut app, mut log, now) = app();
        app.handle(InputEvent::Submit, now, &mut log);

        assert_eq!(app.route(), Route::Fortune);
        assert_eq!(app.status().stage, Some(Stage::Question));
        assert!(log.iter().any(|line| line == "route: /fortune"));
    }

    #[test]
    fn test_leaving_fortune_drops_state() {
        let (mut app, mut log, now) = app();
        app.handle(InputEvent::Submit, now, &mut log);
        type_question(&mut app, "Will it rain?", now, &mut log);
        assert!(app.status().transition_pending);

        app.handle(InputEvent::Back, now, &mut log);
        assert_eq!(app.route(), Route::Home);
        assert!(app.fortune().is_none());

        app.handle(InputEvent::Submit, now, &mut log);
        let page = app.fortune().expect("page mounted again");
        assert_eq!(page.wizard().stage(), Stage::Question);
        assert!(page.wizard().question().is_empty(), "Fresh run");
    }

    #[test]
    fn test_debug_page_swallows_input() {
        let (mut app, mut log, now) = app();
        app.handle(InputEvent::ToggleDebug, now, &mut log);
        assert!(app.is_debug_shown());

        app.handle(InputEvent::Submit, now, &mut log);
        assert_eq!(app.route(), Route::Home, "Hidden page ignores input");

        app.handle(InputEvent::ToggleDebug, now, &mut log);
        assert!(!app.is_debug_shown());
        assert!(log.iter().any(|line| line == "debug: on"));
    }

    #[test]
    fn test_update_counts_stage_changes() {
        let (mut app, mut log, now) = app();
        let mut metrics = ProfilingMetrics::new();
        app.handle(InputEvent::Submit, now, &mut log);
        type_question(&mut app, "Ja?", now, &mut log);

        app.update(now, &mut log, &mut metrics);
        assert_eq!(metrics.stage_changes, 0, "Pause not over yet");

        let later = now + TRANSITION_PAUSE + Duration::from_millis(1);
        app.update(later, &mut log, &mut metrics);
        assert_eq!(metrics.stage_changes, 1);
        assert_eq!(metrics.renderer_mounts, 1, "Pick stage shows the teller");
        assert_eq!(app.status().stage, Some(Stage::OuterColorPick));
        assert!(app.status().cycles.is_some());
        assert_eq!(app.status().playback, Some(Playback::Stopped), "Pick stage teller is paused");
    }

    #[test]
    fn test_draw_switches_views() {
        let (mut app, mut log, now) = app();
        let metrics = ProfilingMetrics::new();
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let probe = IMAGE_SLOT.top_left + Point::new(20, 20);

        app.draw(&mut display, now, &metrics, &log);
        assert_eq!(display.get_pixel(probe), FALLBACK_BG);

        app.handle(InputEvent::ToggleDebug, now, &mut log);
        app.draw(&mut display, now, &metrics, &log);
        assert_eq!(display.get_pixel(Point::new(100, 60)), BLACK, "Debug page background");
    }
}
