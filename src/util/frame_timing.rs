//! Frame counting, FPS calculation and periodic timing reports.

use web_time::{Duration, Instant};

/// Frame counter with FPS calculation and periodic reporting.
///
/// The viewer advances the orientation controller exactly once per call to
/// [`end_frame`](Self::end_frame), so the frame index doubles as a tick
/// count.
pub struct FrameTiming {
    /// Number of completed frames.
    frame_index: u64,
    /// Last frame timestamp
    last_frame: Instant,
    /// Last time [`take_report`](Self::take_report) fired
    last_report: Instant,
    /// Interval between reports
    report_interval: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer that reports every `report_interval`.
    #[must_use]
    pub fn new(report_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            frame_index: 0,
            last_frame: now,
            last_report: now,
            report_interval,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_index += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Completed frame count.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Returns the smoothed FPS once per report interval, `None` otherwise.
    pub fn take_report(&mut self) -> Option<f32> {
        if self.last_report.elapsed() < self.report_interval {
            return None;
        }
        self.last_report = Instant::now();
        Some(self.smoothed_fps)
    }
}
