/// Monotonic phase accumulator driving all time-based waveforms.
///
/// Advances once per frame by `base_increment * (1 + level_gain * level)`,
/// so louder input speeds the motion up without ever rewinding it. The
/// phase never resets; a new clock starts at zero when its owning
/// renderer is rebuilt.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    phase: f32,
    base_increment: f32,
    level_gain: f32,
}

impl AnimationClock {
    pub const fn new(base_increment: f32, level_gain: f32) -> Self {
        Self {
            phase: 0.0,
            base_increment,
            level_gain,
        }
    }

    /// Per-frame step for a given level, before it is applied.
    pub fn increment_for(&self, level: f32) -> f32 {
        self.base_increment * (1.0 + self.level_gain * level)
    }

    /// Advance by one frame and return the new phase.
    pub fn advance(&mut self, level: f32) -> f32 {
        self.phase += self.increment_for(level);
        self.phase
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}
