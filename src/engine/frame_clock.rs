/// Frame timing and pacing
///
/// Gameplay integrates with the real elapsed time of each rendered frame,
/// so there is no fixed-timestep accumulator here. The clock measures the
/// frame delta, paces redraws to the target frame rate and keeps a rolling
/// FPS average for the log.
use std::time::{Duration, Instant};

/// Largest frame delta handed to the simulation (seconds)
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame timing state
pub struct FrameClock {
    /// Time between frames at the target rate
    frame_interval: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    /// Create a clock pacing frames at `target_fps`
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_interval: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last_frame_time: Instant::now(),
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the elapsed seconds since the previous one
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        let delta = frame_time.as_secs_f32();
        if delta > MAX_FRAME_DELTA {
            log::debug!("Long frame ({:.3}s), clamping delta", delta);
        }
        delta.min(MAX_FRAME_DELTA)
    }

    /// Instant at which the next frame should be drawn
    pub fn next_frame_at(&self) -> Instant {
        self.last_frame_time + self.frame_interval
    }

    /// Whether enough time has passed to draw the next frame
    pub fn frame_due(&self) -> bool {
        Instant::now() >= self.next_frame_at()
    }

    /// Time between frames at the target rate
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}
