//! Paper fortune teller ("Judy se Kwakkie") desktop simulator.
//!
//! Ask a question, pick an outer color, watch the teller fold once per letter,
//! pick an inner color, watch again, read your fortune.
//!
//! # Routes
//!
//! | Path       | Page                                              |
//! |------------|---------------------------------------------------|
//! | `/`        | Illustration (or fallback) and "Learn your fortune" |
//! | `/fortune` | Question form, color picks, animations, answer    |
//!
//! # Controls
//!
//! | Input         | Action                                       |
//! |---------------|----------------------------------------------|
//! | Mouse click   | Press buttons                                |
//! | Typing        | Edit the question (shift and caps lock work) |
//! | `Enter`       | Submit / primary button                      |
//! | `1`-`4`       | Pick a color in the pick stages              |
//! | `Escape`      | Back to the landing page                     |
//! | `F1`          | Toggle the debug page                        |
//!
//! Key repeat only applies to typing; buttons fire once per press.
//!
//! # Frame Loop
//!
//! ```text
//! events -> App::handle -> App::update -> App::draw -> window.update -> sleep
//! ```
//!
//! Each frame sleeps for whatever is left of [`FRAME_TIME`] after rendering
//! and records the split in [`ProfilingMetrics`].

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Mod;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use kwakkie::app::App;
use kwakkie::colors::PAGE_GREEN;
use kwakkie::config::{FRAME_TIME, JUDY_IMAGE_PATH, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE, WINDOW_TITLE};
use kwakkie::input::{InputEvent, translate_key};
use kwakkie::profiling::{DebugLog, ProfilingMetrics};
use kwakkie::screens::{HomePage, run_splash_screen};

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(PAGE_GREEN).ok();
    window.update(&display);

    // Returns false if the window is closed during the splash
    if !run_splash_screen(&mut display, &mut window) {
        return;
    }

    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("kwakkie started");

    let home = HomePage::load(JUDY_IMAGE_PATH, &mut debug_log);
    let mut app = App::new(home);

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            let event = match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown {
                    keycode,
                    keymod,
                    repeat,
                } => {
                    let shift = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);
                    let caps_lock = keymod.contains(Mod::CAPSMOD);
                    match translate_key(&keycode.name(), shift, caps_lock) {
                        // OS key repeat only types; it never presses buttons twice
                        Some(event) if repeat && !event.repeats() => continue,
                        Some(event) => event,
                        None => continue,
                    }
                }
                SimulatorEvent::MouseButtonUp { point, .. } => InputEvent::Click(point),
                _ => continue,
            };
            app.handle(event, frame_start, &mut debug_log);
        }

        app.update(frame_start, &mut debug_log, &mut metrics);
        app.draw(&mut display, frame_start, &metrics, &debug_log);

        window.update(&display);

        // ======================================================================
        // Frame Timing
        // ======================================================================

        let render_time = frame_start.elapsed();
        let remaining = FRAME_TIME.saturating_sub(render_time);
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(render_time);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}
