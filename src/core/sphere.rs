use glam::Vec2;
use std::f32::consts::PI;

// Tuning for the matte sphere painter shared by the obsidian, mana,
// opal and halo variants.

// Geometry
pub const RADIUS_RATIO: f32 = 0.35; // orb radius as a fraction of surface size
pub const BACKDROP_PAD_PX: f32 = 3.0; // drop-shadow disc extends this far past the orb
pub const EDGE_INNER_RATIO: f32 = 0.2; // edge darkening starts at this fraction of the radius
pub const AMBIENT_OFFSET_RATIO: f32 = 0.3; // ambient highlight center offset, in radii
pub const AMBIENT_RADIUS_RATIO: f32 = 0.8;

// Clock profile
pub const BASE_INCREMENT: f32 = 0.006; // phase step per frame at silence
pub const LEVEL_GAIN: f32 = 6.0; // speed multiplier is 1 + LEVEL_GAIN * level

// Loudness only brightens the blobs; their paths never react to it.
pub const HIGHLIGHT_LEVEL_GAIN: f32 = 0.08;
pub const SHADOW_LEVEL_GAIN: f32 = 0.04;

/// One drifting radial-gradient patch.
#[derive(Clone, Copy, Debug)]
pub struct Blob {
    /// Clock multiplier for this blob's trajectory parameter.
    pub speed: f32,
    /// Gradient radius, in orb radii.
    pub size: f32,
    /// Base opacity before the level boost.
    pub opacity: f32,
    /// Phase offset so the blobs never bunch up.
    pub offset: f32,
}

pub const HIGHLIGHTS: [Blob; 6] = [
    Blob { speed: 0.7, size: 0.8, opacity: 0.15, offset: 0.0 },
    Blob { speed: 0.5, size: 0.6, opacity: 0.12, offset: PI * 0.5 },
    Blob { speed: 0.6, size: 0.7, opacity: 0.10, offset: PI },
    Blob { speed: 0.8, size: 0.5, opacity: 0.13, offset: PI * 1.5 },
    Blob { speed: 0.55, size: 0.65, opacity: 0.11, offset: PI * 0.3 },
    Blob { speed: 0.65, size: 0.55, opacity: 0.14, offset: PI * 1.2 },
];

pub const SHADOWS: [Blob; 3] = [
    Blob { speed: 0.4, size: 0.5, opacity: 0.08, offset: PI * 0.7 },
    Blob { speed: 0.5, size: 0.45, opacity: 0.06, offset: PI * 1.8 },
    Blob { speed: 0.45, size: 0.4, opacity: 0.07, offset: PI * 0.2 },
];

/// Highlight trajectory: two stacked sine/cosine pairs at unrelated
/// rates trace a closed figure-eight-ish drift inside the disc.
pub fn highlight_center(blob: &Blob, phase: f32, center: Vec2, radius: f32) -> Vec2 {
    let t = phase * blob.speed + blob.offset;
    Vec2::new(
        center.x + t.sin() * radius * 0.4 + (t * 1.7).sin() * radius * 0.2,
        center.y + (t * 0.8).cos() * radius * 0.35 + (t * 1.3).cos() * radius * 0.15,
    )
}

/// Shadow trajectory, phased differently so shadows cross the highlights.
pub fn shadow_center(blob: &Blob, phase: f32, center: Vec2, radius: f32) -> Vec2 {
    let t = phase * blob.speed + blob.offset;
    Vec2::new(
        center.x + (t * 1.1).cos() * radius * 0.5 + (t * 0.6).sin() * radius * 0.2,
        center.y + (t * 0.9).sin() * radius * 0.4 + (t * 1.4).cos() * radius * 0.2,
    )
}

pub fn highlight_intensity(blob: &Blob, level: f32) -> f32 {
    blob.opacity + level * HIGHLIGHT_LEVEL_GAIN
}

pub fn shadow_intensity(blob: &Blob, level: f32) -> f32 {
    blob.opacity + level * SHADOW_LEVEL_GAIN
}

// Gradient stop layouts: (offset, alpha factor) applied to the palette
// colors below. Each gradient ends in a fully transparent base-color stop.
pub const HIGHLIGHT_STOPS: [(f32, f32); 3] = [(0.0, 1.0), (0.3, 0.7), (0.6, 0.3)];
pub const SHADOW_STOPS: [(f32, f32); 2] = [(0.0, 1.0), (0.5, 0.5)];
pub const AMBIENT_STOPS: [(f32, f32); 3] = [(0.0, 0.08), (0.5, 0.03), (1.0, 0.0)];

// Edge darkening is palette-independent: black at fixed alphas.
pub const EDGE_STOPS: [(f32, f32); 5] = [
    (0.0, 0.0),
    (0.5, 0.0),
    (0.75, 0.1),
    (0.9, 0.25),
    (1.0, 0.45),
];

pub type Rgb = [u8; 3];

/// CSS color string for a canvas gradient stop.
pub fn rgba(c: Rgb, alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", c[0], c[1], c[2], alpha)
}

/// Color set for one sphere variant. Geometry is shared; only these
/// colors differ between obsidian, mana, opal and halo.
#[derive(Clone, Copy, Debug)]
pub struct SpherePalette {
    /// Drop-shadow disc behind the orb.
    pub backdrop: Rgb,
    /// Flat fill inside the clip, also the transparent gradient terminal.
    pub base: Rgb,
    /// Colors for HIGHLIGHT_STOPS, brightest first.
    pub highlight: [Rgb; 3],
    /// Colors for SHADOW_STOPS, darkest first.
    pub shadow: [Rgb; 2],
    /// Colors for AMBIENT_STOPS.
    pub ambient: [Rgb; 3],
}

/// The canonical neutral grey ball.
pub const OPAL: SpherePalette = SpherePalette {
    backdrop: [26, 26, 26],
    base: [138, 138, 138],
    highlight: [[180, 180, 180], [160, 160, 160], [140, 140, 140]],
    shadow: [[70, 70, 70], [90, 90, 90]],
    ambient: [[200, 200, 200], [180, 180, 180], [160, 160, 160]],
};

pub const OBSIDIAN: SpherePalette = SpherePalette {
    backdrop: [12, 12, 14],
    base: [54, 54, 60],
    highlight: [[116, 116, 126], [96, 96, 106], [78, 78, 88]],
    shadow: [[22, 22, 26], [34, 34, 40]],
    ambient: [[140, 140, 150], [118, 118, 128], [96, 96, 106]],
};

pub const MANA: SpherePalette = SpherePalette {
    backdrop: [14, 20, 34],
    base: [92, 116, 168],
    highlight: [[148, 172, 222], [126, 150, 202], [108, 132, 184]],
    shadow: [[46, 60, 94], [62, 78, 114]],
    ambient: [[176, 196, 236], [152, 174, 216], [130, 152, 196]],
};

pub const HALO: SpherePalette = SpherePalette {
    backdrop: [30, 26, 16],
    base: [170, 150, 108],
    highlight: [[222, 202, 152], [200, 180, 134], [182, 162, 118]],
    shadow: [[88, 74, 48], [108, 94, 64]],
    ambient: [[236, 218, 172], [214, 196, 152], [192, 176, 134]],
};
