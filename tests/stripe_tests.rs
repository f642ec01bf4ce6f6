// Host-side tests for the stripe band geometry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod stripe {
    include!("../src/core/stripe.rs");
}

use glam::Vec2;
use stripe::*;

fn sample_band(level: f32, time: f32, band: usize) -> Vec<BandPoint> {
    let mut out = Vec::new();
    band_points(Vec2::splat(150.0), 126.0, level, time, band, &mut out);
    out
}

#[test]
fn band_has_one_point_per_segment_boundary() {
    let points = sample_band(0.0, 0.0, 2);
    assert_eq!(points.len(), BAND_SEGMENTS + 1);
}

#[test]
fn visibility_is_nonnegative_over_the_half_circle() {
    for i in 0..=BAND_SEGMENTS {
        let t = i as f32 / BAND_SEGMENTS as f32;
        assert!(visibility(t) >= -1e-6, "negative visibility at t={t}");
    }
    assert!((visibility(0.5) - 1.0).abs() < 1e-6);
}

#[test]
fn thickness_never_goes_negative() {
    for band in 0..BAND_OFFSETS.len() {
        for level in [0.0, 0.5, 1.0] {
            for point in sample_band(level, 3.7, band) {
                assert!(point.thickness >= -1e-4);
            }
        }
    }
}

#[test]
fn band_x_spans_the_diameter() {
    let points = sample_band(0.3, 1.0, 0);
    let first = points.first().unwrap();
    let last = points.last().unwrap();
    assert!((first.pos.x - (150.0 - 126.0)).abs() < 1e-3);
    assert!((last.pos.x - (150.0 + 126.0)).abs() < 1e-3);
    // The rim points collapse onto the band's center line.
    assert!(first.thickness.abs() < 1e-3);
    assert!(last.thickness.abs() < 1e-3);
}

#[test]
fn sampling_is_a_pure_function_of_its_inputs() {
    let a = sample_band(0.42, 12.5, 3);
    let b = sample_band(0.42, 12.5, 3);
    assert_eq!(a, b);
}

#[test]
fn silence_uses_base_amplitude_and_thickness() {
    let r = 126.0;
    assert!((base_amplitude(r, 0.0) - r * 0.18).abs() < 1e-4);
    assert!((base_thickness(r, 0.0) - r * 0.16).abs() < 1e-4);
}

#[test]
fn half_level_boosts_amplitude_and_thickness() {
    let r = 126.0;
    assert!((base_amplitude(r, 0.5) - r * 0.24).abs() < 1e-4);
    assert!((base_thickness(r, 0.5) - r * 0.175).abs() < 1e-4);
}

#[test]
fn glow_appears_only_above_the_threshold() {
    assert_eq!(glow_alpha(0.0), None);
    assert_eq!(glow_alpha(0.1), None);
    let alpha = glow_alpha(0.5).expect("glow at level 0.5");
    assert!((alpha - 0.2).abs() < 1e-6);
}

#[test]
fn crescent_offset_grows_with_level() {
    let r = 126.0;
    let quiet = crescent_offset(r, 0.0);
    let loud = crescent_offset(r, 1.0);
    assert!((quiet - r * 0.06).abs() < 1e-4);
    assert!((loud - r * 0.08).abs() < 1e-4);
}

#[test]
fn wave_sums_three_harmonics() {
    // At t=0 and phase 0 only the time terms remain; spot-check against
    // the closed form.
    let time: f32 = 0.9;
    let amplitude = 10.0;
    let expected = time.sin() * amplitude
        + (0.7 * time).sin() * amplitude * 0.4
        + (1.3 * time).sin() * amplitude * 0.25;
    assert!((wave(0.0, time, 0.0, amplitude) - expected).abs() < 1e-4);
}
