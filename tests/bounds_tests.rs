// Host-side tests for bounding boxes and model placement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bounds {
    include!("../src/core/bounds.rs");
}
use bounds::*;
use glam::{Mat4, Vec3};

const YAW: f32 = -std::f32::consts::PI / 5.0;

fn sample_box() -> Aabb {
    Aabb::from_points([Vec3::new(-1.0, -0.5, -2.0), Vec3::new(3.0, 1.5, 0.0)])
}

#[test]
fn empty_box_has_zero_size() {
    let b = Aabb::default();
    assert!(b.is_empty());
    assert_eq!(b.size(), Vec3::ZERO);
    assert_eq!(b.max_dimension(), 0.0);
    assert!(b.transformed(&Mat4::from_scale(Vec3::splat(3.0))).is_empty());
}

#[test]
fn union_and_measurements() {
    let a = Aabb::from_points([Vec3::ZERO, Vec3::ONE]);
    let b = Aabb::from_points([Vec3::new(-1.0, 2.0, 0.5)]);
    let u = a.union(b);
    assert_eq!(u.min, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(u.max, Vec3::new(1.0, 2.0, 1.0));
    assert_eq!(u.max_dimension(), 2.0);
    assert_eq!(u.size(), Vec3::new(2.0, 2.0, 1.0));
    assert_eq!(a.union(Aabb::EMPTY), a);
}

#[test]
fn transformed_box_encloses_rotated_corners() {
    let b = Aabb::from_points([Vec3::splat(-1.0), Vec3::splat(1.0)]);
    let r = b.transformed(&Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4));
    let s = std::f32::consts::SQRT_2;
    assert!((r.max.x - s).abs() < 1e-5);
    assert!((r.max.z - s).abs() < 1e-5);
    assert!((r.max.y - 1.0).abs() < 1e-5);
}

#[test]
fn fit_scales_largest_extent_to_target() {
    let placement = fit_to_ground(&sample_box(), 2.0, YAW);
    assert!((placement.scale - 0.5).abs() < 1e-6);
    let scaled = sample_box().transformed(&Mat4::from_scale(Vec3::splat(placement.scale)));
    assert!((scaled.max_dimension() - 2.0).abs() < 1e-5);
}

#[test]
fn fitted_model_rests_on_the_ground() {
    let placement = fit_to_ground(&sample_box(), 2.0, YAW);
    let world = sample_box().transformed(&placement.matrix());
    assert!(world.min.y.abs() < 1e-5);
    assert!((world.max.y - 1.0).abs() < 1e-5);
    assert_eq!(placement.rotation_y, YAW);
}

#[test]
fn fit_only_moves_vertically() {
    let placement = fit_to_ground(&sample_box(), 2.0, 0.0);
    assert_eq!(placement.translation.x, 0.0);
    assert_eq!(placement.translation.z, 0.0);
    assert!((placement.translation.y - 0.25).abs() < 1e-6);
}

#[test]
fn degenerate_bounds_keep_unit_scale() {
    let flat = Aabb::from_points([Vec3::new(1.0, 2.0, 3.0)]);
    let placement = fit_to_ground(&flat, 2.0, 0.0);
    assert_eq!(placement.scale, 1.0);
    assert!((placement.translation.y + 2.0).abs() < 1e-6);

    let none = fit_to_ground(&Aabb::EMPTY, 2.0, YAW);
    assert_eq!(none.scale, 1.0);
    assert_eq!(none.translation, Vec3::ZERO);
}
