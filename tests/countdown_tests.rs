// Host-side tests for the countdown arithmetic and glow recipe.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod countdown {
    include!("../src/core/countdown.rs");
}
use countdown::*;

const NOW: f64 = 1_760_000_000_000.0;

#[test]
fn whole_days_round_up() {
    assert_eq!(days_remaining(NOW + 10.0 * MS_PER_DAY, NOW), 10);
    assert_eq!(days_remaining(NOW + 10.0 * MS_PER_DAY + 1000.0, NOW), 11);
    assert_eq!(days_remaining(NOW + 1.0, NOW), 1);
}

#[test]
fn never_negative() {
    assert_eq!(days_remaining(NOW, NOW), 0);
    assert_eq!(days_remaining(NOW - 1.0, NOW), 0);
    assert_eq!(days_remaining(NOW - 400.0 * MS_PER_DAY, NOW), 0);
    assert_eq!(days_remaining(f64::NAN, NOW), 0);
}

#[test]
fn label_is_plain_integer() {
    assert_eq!(label(0), "0");
    assert_eq!(label(112), "112");
}

#[test]
fn glow_goes_from_wide_halo_to_crisp_fill() {
    let blurs: Vec<f64> = GLOW_PASSES
        .iter()
        .filter_map(|p| p.shadow.map(|(_, blur)| blur))
        .collect();
    assert_eq!(blurs, vec![30.0, 20.0, 12.0]);
    let last = GLOW_PASSES[GLOW_PASSES.len() - 1];
    assert!(last.shadow.is_none());
    assert_eq!(last.fill, Rgba::new(255, 255, 255, 1.0));
    for pair in GLOW_PASSES.windows(2) {
        assert!(pair[0].fill.a <= pair[1].fill.a);
    }
}

#[test]
fn rgba_css_string() {
    assert_eq!(Rgba::new(255, 180, 80, 0.7).css(), "rgba(255, 180, 80, 0.7)");
}

#[test]
fn raster_size_caps_pixel_ratio() {
    assert_eq!(raster_size((1024, 512), 1.0, 2.0), (1024, 512, 1.0));
    assert_eq!(raster_size((1024, 512), 1.5, 2.0), (1536, 768, 1.5));
    assert_eq!(raster_size((1024, 512), 3.0, 2.0), (2048, 1024, 2.0));
}

#[test]
fn raster_size_tolerates_bad_ratio() {
    assert_eq!(raster_size((100, 50), 0.0, 2.0), (100, 50, 1.0));
    assert_eq!(raster_size((100, 50), f64::NAN, 2.0), (100, 50, 1.0));
    assert_eq!(raster_size((0, 0), 1.0, 2.0), (1, 1, 1.0));
}
