use std::time::{Duration, Instant};

/// Measures the average duration of a run of frames.
///
/// The baseline is taken at construction (or [`FrameTimer::reset`]); every
/// [`FrameTimer::tick`] counts one finished frame.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    start: Instant,
    frames: u64,
}

impl FrameTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            frames: 0,
        }
    }

    /// Resets the baseline and the frame count.
    pub fn reset(&mut self) {
        self.start = Instant::now();
        self.frames = 0;
    }

    /// Marks the end of one frame.
    #[inline]
    pub fn tick(&mut self) {
        self.frames += 1;
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Average seconds per counted frame, `None` before the first tick.
    pub fn seconds_per_frame(&self) -> Option<f64> {
        (self.frames > 0).then(|| self.elapsed().as_secs_f64() / self.frames as f64)
    }
}
