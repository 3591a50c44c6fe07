// Host-side tests for the light rig, materials and colour helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod lighting {
        include!("../src/core/lighting.rs");
    }
    pub mod materials {
        include!("../src/core/materials.rs");
    }
}
use glam::Vec3;
use scene_core::color::*;
use scene_core::constants::*;
use scene_core::lighting::*;
use scene_core::materials;

#[test]
fn srgb_decoding_endpoints() {
    assert_eq!(srgb_hex(0x000000), [0.0, 0.0, 0.0]);
    assert_eq!(srgb_hex(0xffffff), [1.0, 1.0, 1.0]);
    let mid = srgb_hex(0x808080)[0];
    assert!((mid - 0.2158).abs() < 1e-3);
    assert_eq!(srgb_hex_rgba(0xff0000, 0.5), [1.0, 0.0, 0.0, 0.5]);
}

#[test]
fn stage_rig_packs_three_lights() {
    let rig = stage_rig();
    let (raw, count) = rig.pack();
    assert_eq!(count, 3);
    assert_eq!(raw[0].position[3], 1.0);
    assert_eq!(raw[1].position[3], 0.0);
    assert_eq!(raw[2].position[3], 1.0);
    assert_eq!(raw[3], LightRaw::default());
}

#[test]
fn key_spot_is_the_only_shadow_caster() {
    let rig = stage_rig();
    let caster = rig.shadow_caster().unwrap();
    assert_eq!(caster, &rig.lights[0]);
    assert_eq!(rig.lights.iter().filter(|l| l.cast_shadow).count(), 1);
    let (raw, _) = rig.pack();
    assert_eq!(raw[0].cone[2], 1.0);
    assert_eq!(raw[2].cone[2], 0.0);
}

#[test]
fn shadow_frustum_contains_the_target() {
    let rig = stage_rig();
    let caster = rig.shadow_caster().unwrap();
    let LightKind::Spot { target, .. } = caster.kind else {
        panic!("key light should be a spot");
    };
    let vp = caster.shadow_view_proj().unwrap();
    let p = vp.project_point3(target);
    assert!(p.x.abs() < 1e-4 && p.y.abs() < 1e-4);
    assert!(p.z > 0.0 && p.z < 1.0);
    assert!(rig.lights[1].shadow_view_proj().is_none());
    assert!(rig.lights[2].shadow_view_proj().is_none());
}

#[test]
fn straight_down_spot_still_has_a_frustum() {
    let spot = Light::spot(0xffffff, 1.0, 10.0, 0.5, 0.0, 1.0, Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO)
        .with_shadow();
    let vp = spot.shadow_view_proj().unwrap();
    assert!(vp.is_finite());
}

#[test]
fn spot_cone_and_direction() {
    let spot = Light::spot(0xffffff, 2.0, 10.0, 0.6, 0.5, 1.0, Vec3::new(0.0, 4.0, 3.0), Vec3::ZERO);
    let raw = spot.to_raw();
    assert!((raw.cone[0] - 0.6f32.cos()).abs() < 1e-6);
    assert!((raw.cone[1] - 0.3f32.cos()).abs() < 1e-6);
    assert!(raw.cone[1] > raw.cone[0]);
    let dir = Vec3::new(raw.direction[0], raw.direction[1], raw.direction[2]);
    assert!((dir - Vec3::new(0.0, 0.8, 0.6)).length() < 1e-5);
    assert_eq!(raw.color[0], 2.0);
    assert_eq!(raw.color[3], 10.0);
}

#[test]
fn rig_refuses_lights_beyond_slot_limit() {
    let mut rig = stage_rig();
    assert!(rig.add(countdown_light()));
    assert!(rig.add(Light::point(0xffffff, 1.0, 0.0, 2.0, Vec3::ZERO)));
    assert_eq!(rig.lights.len(), MAX_LIGHTS);
    assert!(!rig.add(Light::point(0xffffff, 1.0, 0.0, 2.0, Vec3::ONE)));
    assert_eq!(rig.pack().1, MAX_LIGHTS as u32);
}

#[test]
fn countdown_light_sits_on_the_billboard() {
    let light = countdown_light();
    assert_eq!(light.position, COUNTDOWN_POSITION);
    assert!(matches!(light.kind, LightKind::Point));
    assert!(!light.cast_shadow);
}

#[test]
fn ambient_radiance_scales_colour() {
    let rig = stage_rig();
    let r = rig.ambient_radiance();
    for (c, base) in r.iter().zip(rig.ambient.color) {
        assert!((c - base * rig.ambient.intensity).abs() < 1e-7);
    }
}

#[test]
fn materials_pack_parameters() {
    let raw = materials::countdown_sprite().to_raw();
    assert_eq!(raw.params[2], COUNTDOWN_ALPHA_TEST);
    assert_eq!(raw.base_color, [1.0; 4]);

    let model = materials::model_pbr().to_raw();
    assert_eq!(model.params[0], 1.0);
    assert_eq!(model.params[1], 1.0);

    // label face stays white so the texture keeps its colours
    assert_eq!(materials::button_top().base_color, [1.0; 4]);
    assert_eq!(
        materials::button_side().base_color,
        srgb_hex_rgba(BUTTON_FACE_HEX, 1.0)
    );
}
