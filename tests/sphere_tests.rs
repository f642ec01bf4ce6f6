// Host-side tests for the matte-sphere blob tables and palettes.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod sphere {
    include!("../src/core/sphere.rs");
}

use glam::Vec2;
use sphere::*;

const CENTER: Vec2 = Vec2::new(150.0, 150.0);
const RADIUS: f32 = 105.0;

#[test]
fn highlight_centers_stay_near_the_disc() {
    // Component bounds from the trajectory weights: 0.4 + 0.2 in x,
    // 0.35 + 0.15 in y, both inside one radius.
    for blob in &HIGHLIGHTS {
        for i in 0..200 {
            let phase = i as f32 * 0.37;
            let c = highlight_center(blob, phase, CENTER, RADIUS);
            assert!((c.x - CENTER.x).abs() <= RADIUS * 0.6 + 1e-3);
            assert!((c.y - CENTER.y).abs() <= RADIUS * 0.5 + 1e-3);
        }
    }
}

#[test]
fn shadow_centers_stay_near_the_disc() {
    for blob in &SHADOWS {
        for i in 0..200 {
            let phase = i as f32 * 0.37;
            let c = shadow_center(blob, phase, CENTER, RADIUS);
            assert!((c.x - CENTER.x).abs() <= RADIUS * 0.7 + 1e-3);
            assert!((c.y - CENTER.y).abs() <= RADIUS * 0.6 + 1e-3);
        }
    }
}

#[test]
fn trajectories_are_pure_functions() {
    let blob = &HIGHLIGHTS[0];
    let a = highlight_center(blob, 5.5, CENTER, RADIUS);
    let b = highlight_center(blob, 5.5, CENTER, RADIUS);
    assert_eq!(a, b);
    let blob = &SHADOWS[1];
    let a = shadow_center(blob, 5.5, CENTER, RADIUS);
    let b = shadow_center(blob, 5.5, CENTER, RADIUS);
    assert_eq!(a, b);
}

#[test]
fn level_boosts_intensity_but_not_paths() {
    let blob = &HIGHLIGHTS[0];
    assert!((highlight_intensity(blob, 0.0) - blob.opacity).abs() < 1e-6);
    assert!((highlight_intensity(blob, 1.0) - (blob.opacity + 0.08)).abs() < 1e-6);
    let shadow = &SHADOWS[0];
    assert!((shadow_intensity(shadow, 1.0) - (shadow.opacity + 0.04)).abs() < 1e-6);
    // The trajectory has no level input at all; same phase, same point.
    let quiet = highlight_center(blob, 2.0, CENTER, RADIUS);
    let loud = highlight_center(blob, 2.0, CENTER, RADIUS);
    assert_eq!(quiet, loud);
}

#[test]
fn blob_tables_have_the_expected_shapes() {
    assert_eq!(HIGHLIGHTS.len(), 6);
    assert_eq!(SHADOWS.len(), 3);
    for blob in HIGHLIGHTS.iter().chain(&SHADOWS) {
        assert!(blob.speed > 0.0 && blob.speed < 1.0);
        assert!(blob.size > 0.0 && blob.size <= 1.0);
        assert!(blob.opacity > 0.0 && blob.opacity < 0.2);
    }
}

#[test]
fn gradient_stops_are_ordered_and_bounded() {
    for stops in [&HIGHLIGHT_STOPS[..], &SHADOW_STOPS[..], &AMBIENT_STOPS[..], &EDGE_STOPS[..]] {
        let mut prev = -1.0;
        for &(offset, alpha) in stops {
            assert!(offset > prev, "stop offsets must ascend");
            assert!((0.0..=1.0).contains(&offset));
            assert!((0.0..=1.0).contains(&alpha));
            prev = offset;
        }
    }
}

#[test]
fn edge_darkening_increases_toward_the_rim() {
    let mut prev = -1.0;
    for &(_, alpha) in &EDGE_STOPS {
        assert!(alpha >= prev);
        prev = alpha;
    }
    assert_eq!(EDGE_STOPS.last().unwrap().1, 0.45);
}

#[test]
fn rgba_formats_a_css_color() {
    assert_eq!(rgba([180, 180, 180], 0.15), "rgba(180, 180, 180, 0.15)");
    assert_eq!(rgba([0, 0, 0], 0.0), "rgba(0, 0, 0, 0)");
}

#[test]
fn variant_palettes_are_distinct() {
    let bases = [OPAL.base, OBSIDIAN.base, MANA.base, HALO.base];
    for (i, a) in bases.iter().enumerate() {
        for b in &bases[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn opal_carries_the_canonical_grey() {
    assert_eq!(OPAL.base, [138, 138, 138]);
    assert_eq!(OPAL.backdrop, [26, 26, 26]);
    assert_eq!(OPAL.highlight[0], [180, 180, 180]);
}
