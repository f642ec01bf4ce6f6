use glam::Vec2;
use std::f32::consts::PI;

// Tuning for the stripe (branded) painter.

// Geometry
pub const RADIUS_RATIO: f32 = 0.42; // orb radius as a fraction of surface size
pub const BAND_OFFSETS: [f32; 5] = [-0.6, -0.3, 0.0, 0.3, 0.6]; // band y-offsets, in radii
pub const BAND_PHASE_STEP: f32 = 0.7; // wave phase shift between adjacent bands
pub const BAND_SEGMENTS: usize = 120; // samples per band is BAND_SEGMENTS + 1

// Clock profile
pub const BASE_INCREMENT: f32 = 0.01; // phase step per frame at silence
pub const LEVEL_GAIN: f32 = 4.0; // speed multiplier is 1 + LEVEL_GAIN * level

// Wave shaping, all in radii
pub const AMPLITUDE_BASE: f32 = 0.18;
pub const AMPLITUDE_LEVEL_BOOST: f32 = 0.12;
pub const THICKNESS_BASE: f32 = 0.16;
pub const THICKNESS_LEVEL_BOOST: f32 = 0.03;
pub const THICKNESS_TAPER_EXP: f32 = 0.7; // visibility exponent, keeps edges fuller than linear

// Rim crescents
pub const CRESCENT_BASE: f32 = 0.06;
pub const CRESCENT_LEVEL_BOOST: f32 = 0.02;
pub const CRESCENT_INNER_RATIO: f32 = 0.98; // radius of the offset arc

// Outer glow
pub const GLOW_THRESHOLD: f32 = 0.1; // level must exceed this for any glow
pub const GLOW_ALPHA_GAIN: f32 = 0.4;
pub const GLOW_PAD_PX: f32 = 5.0; // glow disc radius beyond the orb
pub const GLOW_REACH_PX: f32 = 30.0; // gradient fade distance beyond the orb

/// One sampled point on a band's spine, with the full ribbon thickness
/// at that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandPoint {
    pub pos: Vec2,
    pub thickness: f32,
}

/// Foreshortening factor for a band parameter t in [0, 1].
///
/// The sampled angle spans [-pi/2, pi/2]: full visibility at the
/// sphere's center, zero at the rim. Clamped at zero because f32
/// rounding can push the rim cosine fractionally negative, which would
/// turn the fractional-power taper into NaN.
pub fn visibility(t: f32) -> f32 {
    ((t - 0.5) * PI).cos().max(0.0)
}

pub fn base_amplitude(radius: f32, level: f32) -> f32 {
    radius * AMPLITUDE_BASE + level * radius * AMPLITUDE_LEVEL_BOOST
}

pub fn base_thickness(radius: f32, level: f32) -> f32 {
    radius * THICKNESS_BASE + level * radius * THICKNESS_LEVEL_BOOST
}

pub fn crescent_offset(radius: f32, level: f32) -> f32 {
    radius * (CRESCENT_BASE + level * CRESCENT_LEVEL_BOOST)
}

/// Glow opacity for the current level, or None below the threshold.
pub fn glow_alpha(level: f32) -> Option<f32> {
    if level > GLOW_THRESHOLD {
        Some(level * GLOW_ALPHA_GAIN)
    } else {
        None
    }
}

/// Composite wave: three sine harmonics at unrelated frequencies and
/// drift rates so the motion never reads as periodic.
pub fn wave(t: f32, time: f32, phase: f32, amplitude: f32) -> f32 {
    (t * PI * 2.0 + time + phase).sin() * amplitude
        + (t * PI * 3.5 + time * 0.7 + phase).sin() * amplitude * 0.4
        + (t * PI * 1.2 + time * 1.3 + phase).sin() * amplitude * 0.25
}

/// Sample one band's spine into `out` (cleared first).
///
/// `band` indexes into BAND_OFFSETS and sets the phase shift.
pub fn band_points(
    center: Vec2,
    radius: f32,
    level: f32,
    time: f32,
    band: usize,
    out: &mut Vec<BandPoint>,
) {
    out.clear();
    let y_offset = BAND_OFFSETS[band] * radius;
    let phase = band as f32 * BAND_PHASE_STEP;
    let amplitude = base_amplitude(radius, level);
    let thickness = base_thickness(radius, level);

    for i in 0..=BAND_SEGMENTS {
        let t = i as f32 / BAND_SEGMENTS as f32;
        let angle = (t - 0.5) * PI;
        let sf = visibility(t);
        let x = center.x + angle.sin() * radius;
        let y = center.y + (y_offset + wave(t, time, phase, amplitude)) * sf;
        out.push(BandPoint {
            pos: Vec2::new(x, y),
            thickness: thickness * sf.powf(THICKNESS_TAPER_EXP),
        });
    }
}
