// Walk cycle animation

/// Cyclic frame sequence that only advances while the player is moving.
///
/// Frame 0 doubles as the idle frame.
#[derive(Debug, Clone)]
pub struct FrameCycle {
    /// Number of frames in the cycle
    frame_count: usize,
    /// Time each frame is shown (seconds)
    frame_duration: f32,
    /// Current frame index
    current_frame: usize,
    /// Time accumulated on the current frame
    frame_timer: f32,
}

impl FrameCycle {
    pub fn new(frame_count: usize, frame_duration: f32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_duration,
            current_frame: 0,
            frame_timer: 0.0,
        }
    }

    /// Advance the cycle by `dt` seconds.
    ///
    /// Moving: accumulate time and step one frame once the frame duration is
    /// reached, restarting the accumulator. Not moving: back to the idle frame.
    pub fn update(&mut self, dt: f32, moving: bool) {
        if !moving {
            self.stop();
            return;
        }

        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer = 0.0;
            self.current_frame = (self.current_frame + 1) % self.frame_count;
        }
    }

    /// Return to the idle frame
    pub fn stop(&mut self) {
        self.current_frame = 0;
        self.frame_timer = 0.0;
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}
