/// Length of the window over which frames are counted.
pub const FPS_WINDOW_SECONDS: f64 = 1.0;

/// Frame counter for the throughput readout.
///
/// Frames are counted over one-second windows; when a window closes its count
/// becomes the reported `fps` and a new window starts at that timestamp.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    frame_count: u32,
    last_timestamp: f64,
    fps: u32,
}

impl FrameStats {
    #[must_use]
    pub fn new(start_timestamp: f64) -> Self {
        Self {
            frame_count: 0,
            last_timestamp: start_timestamp,
            fps: 0,
        }
    }

    /// Counts one frame finished at `now` (seconds). Returns true when this
    /// frame closed a window and `fps` was refreshed.
    pub fn record_frame(&mut self, now: f64) -> bool {
        self.frame_count = self.frame_count.saturating_add(1);

        if now - self.last_timestamp >= FPS_WINDOW_SECONDS {
            self.fps = self.frame_count;
            self.frame_count = 0;
            self.last_timestamp = now;
            return true;
        }

        false
    }

    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    #[must_use]
    pub fn last_timestamp(&self) -> f64 {
        self.last_timestamp
    }

    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
