//! Frame timing
//!
//! The loop asks its [`Clock`] how long the last frame took, then asks it to
//! wait until the next frame is due under the current frame-rate cap.

use std::time::{Duration, Instant};

/// Number of frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Time source and frame pacer
pub trait Clock {
    /// Seconds since the previous call
    fn delta_seconds(&mut self) -> f32;

    /// Block until the next frame is due at `target_fps`
    fn wait_for_next_frame(&mut self, target_fps: u32);

    /// Measured frames per second
    fn fps(&self) -> f32;
}

/// Wall-clock pacing backed by `std::time::Instant`
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    /// Last `delta_seconds` sample
    last_sample: Instant,
    /// When the previous frame was released by `wait_for_next_frame`
    last_frame: Instant,
    /// Seconds since start at which recent frames ended (ring buffer)
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: f32,
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_sample: now,
            last_frame: now,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0.0,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn delta_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_sample).as_secs_f32();
        self.last_sample = now;
        dt
    }

    fn wait_for_next_frame(&mut self, target_fps: u32) {
        let frame = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        let due = self.last_frame + frame;
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
        self.last_frame = Instant::now();

        // Track frame times for FPS, oldest to newest
        let time = self.last_frame.duration_since(self.start).as_secs_f64();
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed) as f32;
            }
        }
    }

    fn fps(&self) -> f32 {
        self.fps
    }
}

/// Deterministic clock: every frame lasts exactly `1 / fps` seconds of the
/// current cap and waiting returns immediately
#[derive(Debug, Clone)]
pub struct FixedClock {
    fps: u32,
    frames: u64,
}

impl FixedClock {
    pub fn new(fps: u32) -> Self {
        Self {
            fps: fps.max(1),
            frames: 0,
        }
    }

    /// Frames waited for so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Clock for FixedClock {
    fn delta_seconds(&mut self) -> f32 {
        1.0 / self.fps as f32
    }

    fn wait_for_next_frame(&mut self, target_fps: u32) {
        self.fps = target_fps.max(1);
        self.frames += 1;
    }

    fn fps(&self) -> f32 {
        self.fps as f32
    }
}
