//! Debug/profiling page rendering.
//!
//! Shows frame timing, the app's current state and the debug log terminal.
//! Toggled with `F1` from any page.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ DEBUG VIEW        UP 00:12:34     62 FPS │
//! ├──────────────────────────────────────────┤
//! │ TIMING               │ APP               │
//! │ Frame: 16.2ms        │ Route: /fortune   │
//! │ Render:0.9ms         │ Stage: animation  │
//! │ Sleep: 15.3ms        │ Cycles: 6/6 done  │
//! │ Min:   16.0ms        │ Pending: no       │
//! │ Max:   21.4ms        │ Stages: 4         │
//! │ Avg:   16.3ms        │ Mounts: 3         │
//! ├──────────────────────────────────────────┤
//! │ > route: /fortune                        │
//! │ > stage: outer colors                    │
//! │ > _                                      │
//! └──────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BLACK, DIM_GRAY, HIGHLIGHT_YELLOW, TERMINAL_AMBER, TERMINAL_BG, TERMINAL_GREEN, WHITE};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::oscillator::Playback;
use crate::pages::Route;
use crate::profiling::{DebugLog, ProfilingMetrics};
use crate::styles::RIGHT_ALIGNED;
use crate::wizard::Stage;

// =============================================================================
// Layout Constants
// =============================================================================

const HEADER_Y: i32 = 14;
const HEADER_DIVIDER_Y: i32 = 20;
const SECTION_HEADER_Y: i32 = 34;
const STATS_Y: i32 = 48;
const STAT_LINE_HEIGHT: i32 = 13;
const LOG_DIVIDER_Y: i32 = 132;
const LOG_Y: i32 = 146;
const LOG_LINE_HEIGHT: i32 = 12;

/// Left column (timing).
const COL1_X: i32 = 4;

/// Right column (app state).
const COL2_X: i32 = 172;

const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TERMINAL_GREEN);
const SECTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, DIM_GRAY);
const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);
const HIGHLIGHT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, HIGHLIGHT_YELLOW);
const LOG_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TERMINAL_AMBER);

// =============================================================================
// App Status
// =============================================================================

/// Snapshot of the app state shown in the right column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AppStatus {
    pub route: Route,
    /// Wizard stage, when the fortune page is mounted.
    pub stage: Option<Stage>,
    /// Counted and target cycles of the mounted renderer.
    pub cycles: Option<(u32, u32)>,
    /// Playback state of the mounted renderer.
    pub playback: Option<Playback>,
    pub transition_pending: bool,
    pub image_loaded: bool,
}

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug page over the whole target.
pub fn draw_debug_page<D>(
    target: &mut D,
    metrics: &ProfilingMetrics,
    status: &AppStatus,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(BLACK).ok();

    draw_header(target, metrics);
    draw_horizontal_line(target, HEADER_DIVIDER_Y);

    Text::new("TIMING", Point::new(COL1_X, SECTION_HEADER_Y), SECTION_STYLE)
        .draw(target)
        .ok();
    Text::new("APP", Point::new(COL2_X, SECTION_HEADER_Y), SECTION_STYLE)
        .draw(target)
        .ok();

    draw_timing_column(target, metrics);
    draw_app_column(target, metrics, status);

    draw_horizontal_line(target, LOG_DIVIDER_Y);
    draw_log_terminal(target, log);
}

fn draw_header<D>(
    target: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), TITLE_STYLE)
        .draw(target)
        .ok();

    let mut uptime: String<24> = String::new();
    write!(uptime, "UP {}", metrics.uptime_string()).ok();
    Text::new(&uptime, Point::new(130, HEADER_Y), VALUE_STYLE).draw(target).ok();

    let mut fps: String<12> = String::new();
    write!(fps, "{} FPS", metrics.fps()).ok();
    Text::with_text_style(
        &fps,
        Point::new(SCREEN_WIDTH as i32 - COL1_X, HEADER_Y),
        VALUE_STYLE,
        RIGHT_ALIGNED,
    )
    .draw(target)
    .ok();
}

/// Draw one stat line and advance `y`.
fn stat_line<D>(
    target: &mut D,
    x: i32,
    y: &mut i32,
    style: MonoTextStyle<'static, Rgb565>,
    args: core::fmt::Arguments<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut s: String<28> = String::new();
    s.write_fmt(args).ok();
    Text::new(&s, Point::new(x, *y), style).draw(target).ok();
    *y += STAT_LINE_HEIGHT;
}

fn ms(us: u32) -> f32 {
    us as f32 / 1000.0
}

fn draw_timing_column<D>(
    target: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let x = COL1_X;
    let mut y = STATS_Y;

    let min_us = if metrics.frame_time_min_us == u32::MAX { 0 } else { metrics.frame_time_min_us };

    stat_line(target, x, &mut y, VALUE_STYLE, format_args!("Frame: {:.1}ms", ms(metrics.frame_time_us)));
    stat_line(target, x, &mut y, VALUE_STYLE, format_args!("Render:{:.1}ms", ms(metrics.render_time_us)));
    stat_line(target, x, &mut y, VALUE_STYLE, format_args!("Sleep: {:.1}ms", ms(metrics.sleep_time_us)));
    stat_line(target, x, &mut y, HIGHLIGHT_STYLE, format_args!("Min:   {:.1}ms", ms(min_us)));
    stat_line(target, x, &mut y, HIGHLIGHT_STYLE, format_args!("Max:   {:.1}ms", ms(metrics.frame_time_max_us)));
    stat_line(target, x, &mut y, HIGHLIGHT_STYLE, format_args!("Avg:   {:.1}ms", ms(metrics.frame_time_avg_us())));
}

fn draw_app_column<D>(
    target: &mut D,
    metrics: &ProfilingMetrics,
    status: &AppStatus,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let x = COL2_X;
    let mut y = STATS_Y;

    stat_line(target, x, &mut y, VALUE_STYLE, format_args!("Route: {}", status.route.path()));
    match status.stage {
        Some(stage) => stat_line(target, x, &mut y, VALUE_STYLE, format_args!("Stage: {}", stage.name())),
        None => stat_line(
            target,
            x,
            &mut y,
            VALUE_STYLE,
            format_args!("Image: {}", if status.image_loaded { "loaded" } else { "fallback" }),
        ),
    }
    match status.cycles {
        Some((counted, target_cycles)) => stat_line(
            target,
            x,
            &mut y,
            HIGHLIGHT_STYLE,
            format_args!("Cycles: {counted}/{target_cycles} {}", playback_name(status.playback)),
        ),
        None => stat_line(target, x, &mut y, HIGHLIGHT_STYLE, format_args!("Cycles: -")),
    }
    stat_line(
        target,
        x,
        &mut y,
        VALUE_STYLE,
        format_args!("Pending: {}", if status.transition_pending { "yes" } else { "no" }),
    );
    stat_line(target, x, &mut y, VALUE_STYLE, format_args!("Stages: {}", metrics.stage_changes));
    stat_line(target, x, &mut y, VALUE_STYLE, format_args!("Mounts: {}", metrics.renderer_mounts));
}

fn playback_name(playback: Option<Playback>) -> &'static str {
    match playback {
        Some(Playback::Playing { .. }) => "playing",
        Some(Playback::Completed) => "done",
        Some(Playback::Stopped) | None => "paused",
    }
}

fn draw_log_terminal<D>(
    target: &mut D,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(TERMINAL_BG))
    .draw(target)
    .ok();

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), TITLE_STYLE).draw(target).ok();
        Text::new(line, Point::new(COL1_X + 10, y), LOG_TEXT_STYLE)
            .draw(target)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), TITLE_STYLE).draw(target).ok();
}

fn draw_horizontal_line<D>(
    target: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIM_GRAY, 1))
        .draw(target)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    fn count_color(
        display: &SimulatorDisplay<Rgb565>,
        area: Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|p| display.get_pixel(*p) == color).count()
    }

    #[test]
    fn test_playback_names() {
        assert_eq!(playback_name(Some(Playback::Playing { target: 4 })), "playing");
        assert_eq!(playback_name(Some(Playback::Completed)), "done");
        assert_eq!(playback_name(Some(Playback::Stopped)), "paused");
    }

    #[test]
    fn test_debug_page_sections() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut log = DebugLog::quiet();
        log.push("route: /fortune");
        let status = AppStatus {
            route: Route::Fortune,
            stage: Some(Stage::Animation { target: 6 }),
            cycles: Some((2, 6)),
            playback: Some(Playback::Playing { target: 6 }),
            ..AppStatus::default()
        };
        draw_debug_page(&mut display, &ProfilingMetrics::new(), &status, &log);

        assert_eq!(display.get_pixel(Point::new(100, HEADER_DIVIDER_Y)), DIM_GRAY, "Header divider");
        assert_eq!(display.get_pixel(Point::new(300, 500)), TERMINAL_BG, "Terminal background");

        let header = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_DIVIDER_Y as u32));
        assert!(count_color(&display, header, TERMINAL_GREEN) > 0, "Title drawn");

        let log_line = Rectangle::new(Point::new(COL1_X + 10, LOG_Y - 10), Size::new(200, 12));
        assert!(count_color(&display, log_line, TERMINAL_AMBER) > 0, "Log line drawn");
    }
}
