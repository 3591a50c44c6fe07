// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_starts_inside_zoom_limits() {
    let distance = (CAMERA_EYE - CAMERA_TARGET).length();
    assert!(distance >= ORBIT_MIN_DISTANCE && distance <= ORBIT_MAX_DISTANCE);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING <= 1.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FAR > ORBIT_MAX_DISTANCE + FLOOR_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn button_lies_on_the_floor() {
    // after the tilt the thin z extent is vertical
    assert!((BUTTON_POSITION.y - BUTTON_SIZE.z * 0.5).abs() < 1e-6);
    assert!(glam::Vec2::new(BUTTON_POSITION.x, BUTTON_POSITION.z).length() < FLOOR_RADIUS);
    assert!(BUTTON_TEXTURED_FACE < 6);
    assert_eq!(BUTTON_TEXTURE_SIZE.0, 2 * BUTTON_TEXTURE_SIZE.1);
}

#[test]
fn countdown_billboard_matches_raster_aspect() {
    let raster = COUNTDOWN_RASTER_BASE.0 as f32 / COUNTDOWN_RASTER_BASE.1 as f32;
    let quad = COUNTDOWN_SCALE.x / COUNTDOWN_SCALE.y;
    assert!((raster - quad).abs() < 1e-6);
    assert!(COUNTDOWN_FONT_PX < COUNTDOWN_RASTER_BASE.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_values() {
    assert_eq!(TAP_DEBOUNCE_MS, 300);
    assert_eq!(COUNTDOWN_REFRESH_MS, 60_000);
    let (y, m, d) = TARGET_DATE;
    assert_eq!((y, m, d), (2026, 2, 6));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn model_placement_values() {
    assert_eq!(MODEL_TARGET_SIZE, 2.0);
    assert!((MODEL_YAW + std::f32::consts::PI / 5.0).abs() < 1e-7);
    assert!(MODEL_PATH.ends_with(".glb"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_values() {
    assert!(SHADOW_MAP_SIZE.is_power_of_two());
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(FOG_NEAR < FOG_FAR);
    assert!(TONE_MAPPING_EXPOSURE > 0.0);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, AUDIO_ID, GREETING_BUTTON_ID, GREETING_MESSAGE_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
