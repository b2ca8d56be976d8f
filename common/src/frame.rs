use std::time::{Duration, Instant};

pub struct FrameState {
    pub start: Instant,
    pub last_frame_end: Instant,
    pub deltatime: f64,
    pub fps: f32,
    pub frame_count: u64,
}

impl FrameState {
    pub fn update_statistics(&mut self) {
        self.update_statistics_at(Instant::now());
    }

    fn update_statistics_at(&mut self, now: Instant) {
        self.deltatime = now.duration_since(self.last_frame_end).as_secs_f64();
        self.fps = if self.deltatime > 0.0 {
            (1.0 / self.deltatime) as f32
        } else {
            0.0
        };

        self.frame_count += 1;
        self.last_frame_end = now;
    }

    /// Seconds since the program started.
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    pub fn average_fps(&self) -> f32 {
        let running_for = self.last_frame_end.duration_since(self.start);
        if running_for == Duration::ZERO {
            return 0.0;
        }

        self.frame_count as f32 / running_for.as_secs_f32()
    }
}

impl Default for FrameState {
    fn default() -> Self {
        let now = Instant::now();

        FrameState {
            start: now,
            last_frame_end: now,
            deltatime: 0.0,
            fps: 0.0,
            frame_count: 0,
        }
    }
}
