// Loudness normalization and the coarse display state derived from it.

/// Analyser transform window; yields `FFT_SIZE / 2` byte frequency bins.
pub const FFT_SIZE: u32 = 256;

/// Mean byte magnitude is divided by this before clamping to 1.0.
pub const LEVEL_DIVISOR: f32 = 128.0;

/// Levels strictly above this read as speech.
pub const SPEAKING_THRESHOLD: f32 = 0.15;

/// Display label for the orb, derived from the latest level only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Microphone not granted yet.
    Idle,
    Listening,
    Speaking,
}

impl RenderState {
    pub fn status_label(self) -> &'static str {
        match self {
            RenderState::Idle => "",
            RenderState::Listening => "Listening...",
            RenderState::Speaking => "Speaking detected...",
        }
    }
}

/// One published measurement: the normalized level and its state label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelSample {
    pub level: f32,
    pub state: RenderState,
}

impl LevelSample {
    pub const IDLE: LevelSample = LevelSample {
        level: 0.0,
        state: RenderState::Idle,
    };
}

/// Mean of the byte frequency bins scaled into [0, 1].
///
/// An empty snapshot reads as silence.
pub fn normalized_level(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    let mean = sum as f32 / bins.len() as f32;
    (mean / LEVEL_DIVISOR).min(1.0)
}

/// Threshold classification of an already-normalized level.
pub fn classify(level: f32) -> RenderState {
    if level > SPEAKING_THRESHOLD {
        RenderState::Speaking
    } else {
        RenderState::Listening
    }
}

/// Full pipeline from a raw snapshot to a publishable sample.
pub fn sample_from_bins(bins: &[u8]) -> LevelSample {
    let level = normalized_level(bins);
    LevelSample {
        level,
        state: classify(level),
    }
}
