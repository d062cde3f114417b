//! Frame timing and the in-app debug log.
//!
//! [`ProfilingMetrics`] is updated once per frame by the main loop and shown on
//! the debug page (F1). [`DebugLog`] is the app's log sink: every page pushes a
//! short line for navigation, wizard transitions, asset failures and rejected
//! input. The newest lines are shown on the debug page and every line is also
//! echoed to stderr.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//! let mut log = DebugLog::new();
//!
//! let frame_start = Instant::now();
//! // ... update + draw ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//!
//! log.push("route: /fortune");
//! ```

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Number of log lines kept for the debug page.
pub const LOG_BUFFER_SIZE: usize = 10;

/// Maximum characters per log line (longer lines are truncated).
pub const LOG_LINE_LENGTH: usize = 52;

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frame timing statistics.
pub struct ProfilingMetrics {
    /// Total frame time (update + draw + sleep)
    pub frame_time_us: u32,
    /// Time spent updating and drawing
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    /// Minimum frame time observed
    pub frame_time_min_us: u32,
    /// Maximum frame time observed
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    /// Total frames since startup
    pub total_frames: u64,
    /// Wizard stage changes since startup
    pub stage_changes: u32,
    /// Renderer mounts (each starts a fresh cycle count)
    pub renderer_mounts: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Exponential moving average alpha.
    const EMA_ALPHA: f32 = 0.1;

    /// Create new metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            stage_changes: 0,
            renderer_mounts: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = saturating_micros(total_time);
        self.frame_time_us = total_us;
        self.render_time_us = saturating_micros(render_time);
        self.sleep_time_us = saturating_micros(sleep_time);

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        self.frame_time_avg_us = if self.total_frames == 0 {
            total_us as f32
        } else {
            Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us)
        };

        self.total_frames += 1;
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 {
        self.frame_time_avg_us as u32
    }

    /// Frames per second derived from the average frame time.
    #[inline]
    pub fn fps(&self) -> u32 {
        match self.frame_time_avg_us() {
            0 => 0,
            avg => 1_000_000 / avg,
        }
    }

    /// Time since the metrics were created.
    #[inline]
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> {
        format_hms(self.uptime())
    }

    #[inline]
    pub const fn inc_stage_changes(&mut self) {
        self.stage_changes += 1;
    }

    #[inline]
    pub const fn inc_renderer_mounts(&mut self) {
        self.renderer_mounts += 1;
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn saturating_micros(duration: Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}

/// Format a duration as `HH:MM:SS`.
fn format_hms(duration: Duration) -> String<12> {
    let secs = duration.as_secs();
    let mut s = String::new();
    write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60).ok();
    s
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of the most recent log lines.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
    echo: bool,
}

impl DebugLog {
    /// Empty log that also echoes to stderr.
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            echo: true,
        }
    }

    /// Empty log that keeps lines in memory only.
    pub const fn quiet() -> Self {
        Self {
            buffer: Deque::new(),
            echo: false,
        }
    }

    /// Push a line. The oldest line is dropped when full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.echo {
            eprintln!("[kwakkie] {msg}");
        }
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.buffer.push_back(line).ok();
    }

    /// Format and push a line.
    pub fn push_fmt(
        &mut self,
        args: core::fmt::Arguments<'_>,
    ) {
        let mut line = Truncating(String::new());
        line.write_fmt(args).ok();
        self.push(&line.0);
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|line| line.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Writer that keeps whatever fits and silently drops the rest.
struct Truncating(String<LOG_LINE_LENGTH>);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> core::fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// `format!`-style push into a [`DebugLog`].
#[macro_export]
macro_rules! log_line {
    ($log:expr, $($arg:tt)*) => {
        $log.push_fmt(format_args!($($arg)*))
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiling_metrics_new() {
        let metrics = ProfilingMetrics::new();
        assert_eq!(metrics.total_frames, 0);
        assert_eq!(metrics.frame_time_min_us, u32::MAX);
        assert_eq!(metrics.frame_time_max_us, 0);
        assert_eq!(metrics.fps(), 0);
    }

    #[test]
    fn test_record_frame_min_max() {
        let mut metrics = ProfilingMetrics::new();
        for us in [20_000, 15_000, 25_000] {
            metrics.record_frame(
                Duration::from_micros(us),
                Duration::from_micros(us / 2),
                Duration::from_micros(us / 2),
            );
        }
        assert_eq!(metrics.total_frames, 3);
        assert_eq!(metrics.frame_time_us, 25_000);
        assert_eq!(metrics.frame_time_min_us, 15_000);
        assert_eq!(metrics.frame_time_max_us, 25_000);
    }

    #[test]
    fn test_fps_from_average() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(Duration::from_micros(16_000), Duration::ZERO, Duration::ZERO);
        assert_eq!(metrics.fps(), 62);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::ZERO).as_str(), "00:00:00");
        assert_eq!(format_hms(Duration::from_secs(3_725)).as_str(), "01:02:05");
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::quiet();
        assert!(log.is_empty());
        for i in 0..=LOG_BUFFER_SIZE {
            log_line!(log, "line {i}");
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("line 1"), "Oldest line is dropped");
    }

    #[test]
    fn test_formatted_line_truncates_mid_argument() {
        let mut log = DebugLog::quiet();
        let long = "y".repeat(LOG_LINE_LENGTH);
        log_line!(log, "err: {long}");
        let line = log.iter().next().unwrap();
        assert_eq!(line.len(), LOG_LINE_LENGTH);
        assert!(line.starts_with("err: yyy"), "Argument is cut, not dropped");
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::quiet();
        log.push(&"x".repeat(LOG_LINE_LENGTH * 2));
        assert_eq!(log.iter().next().map(str::len), Some(LOG_LINE_LENGTH));
    }
}
