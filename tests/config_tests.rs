// Host-side tests for the shell-facing configuration types.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod config {
    include!("../src/core/config.rs");
}

use config::*;

#[test]
fn variant_names_round_trip() {
    for variant in Variant::ALL {
        assert_eq!(Variant::parse(variant.as_str()), Some(variant));
    }
}

#[test]
fn unknown_variant_is_rejected() {
    assert_eq!(Variant::parse("plasma"), None);
    assert_eq!(Variant::parse(""), None);
    assert_eq!(Variant::parse("Branded"), None);
}

#[test]
fn only_branded_selects_the_stripe_painter() {
    assert!(Variant::Branded.is_branded());
    for variant in [Variant::Obsidian, Variant::Mana, Variant::Opal, Variant::Halo] {
        assert!(!variant.is_branded());
    }
}

#[test]
fn size_clamps_to_the_slider_range() {
    assert_eq!(clamp_size(99), 100);
    assert_eq!(clamp_size(100), 100);
    assert_eq!(clamp_size(280), 280);
    assert_eq!(clamp_size(500), 500);
    assert_eq!(clamp_size(501), 500);
}

#[test]
fn filters_clamp_out_of_range_values() {
    let wild = ColorFilters {
        grayscale: 150,
        hue_rotate: 400,
        brightness: 999,
        contrast: 201,
        saturate: 500,
        invert: 101,
    };
    let clamped = wild.clamped();
    assert_eq!(clamped.grayscale, 100);
    assert_eq!(clamped.hue_rotate, 360);
    assert_eq!(clamped.brightness, 200);
    assert_eq!(clamped.contrast, 200);
    assert_eq!(clamped.saturate, 200);
    assert_eq!(clamped.invert, 100);
}

#[test]
fn clamping_neutral_is_a_no_op() {
    assert_eq!(ColorFilters::NEUTRAL.clamped(), ColorFilters::NEUTRAL);
}

#[test]
fn css_keeps_the_fixed_function_order() {
    assert_eq!(
        ColorFilters::NEUTRAL.css(),
        "grayscale(0%) hue-rotate(0deg) brightness(100%) contrast(100%) saturate(100%) invert(0%)"
    );
    let tinted = ColorFilters {
        hue_rotate: 90,
        saturate: 150,
        ..ColorFilters::NEUTRAL
    };
    assert_eq!(
        tinted.css(),
        "grayscale(0%) hue-rotate(90deg) brightness(100%) contrast(100%) saturate(150%) invert(0%)"
    );
}

#[test]
fn black_white_preset_only_touches_grayscale() {
    let bw = ColorFilters::BLACK_WHITE;
    assert_eq!(bw.grayscale, 100);
    assert_eq!(
        ColorFilters {
            grayscale: 0,
            ..bw
        },
        ColorFilters::NEUTRAL
    );
    assert!(!bw.is_neutral());
    assert!(ColorFilters::NEUTRAL.is_neutral());
}

#[test]
fn defaults_match_the_shell() {
    let config = VisualConfig::default();
    assert_eq!(config.variant, Variant::Branded);
    assert_eq!(config.size_px, 280);
    assert_eq!(config.background, "#000000");
    assert!(!config.show_logo);
    assert!(config.show_status);
    assert!(config.filters.is_neutral());
}

#[test]
fn background_palette_has_ten_hex_swatches() {
    assert_eq!(BG_PALETTE.len(), 10);
    for (name, hex) in BG_PALETTE {
        assert!(!name.is_empty());
        assert!(hex.starts_with('#') && hex.len() == 7, "bad swatch {hex}");
        assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
    assert_eq!(BG_PALETTE[0].1, BACKGROUND_DEFAULT);
}

#[test]
fn logo_tracks_most_of_the_orb() {
    assert!(LOGO_SIZE_RATIO > 0.0 && LOGO_SIZE_RATIO < 1.0);
}
