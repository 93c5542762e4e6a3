use std::time::{Duration, Instant};

/// Timer for tracking frame count and elapsed run time.
pub struct Timer {
    start_time: Instant,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Updates the timer (called once per frame).
    pub fn tick(&mut self) {
        self.elapsed = self.start_time.elapsed();
        self.frame_count += 1;
    }
}

/// Paces the frame loop to a fixed interval.
///
/// If a frame finishes early, the remainder of the interval is slept away.
/// Overruns are not compensated: under load the loop degrades to a lower
/// effective frame rate instead of skipping animation steps.
pub struct FramePacer {
    interval: Duration,
    frame_start: Instant,
}

impl FramePacer {
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / target_fps.max(1),
            frame_start: Instant::now(),
        }
    }

    /// Marks the beginning of a frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Sleeps the remainder of the frame interval, if any.
    pub fn end_frame(&self) {
        let spent = self.frame_start.elapsed();
        if spent < self.interval {
            std::thread::sleep(self.interval - spent);
        }
    }
}
