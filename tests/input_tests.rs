// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
use glam::{Mat4, Vec2, Vec3};
use input::*;
use instant::{Duration, Instant};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn ray_down_at(x: f32, z: f32) -> Ray {
    Ray {
        origin: Vec3::new(x, 5.0, z),
        dir: Vec3::NEG_Y,
    }
}

fn unit_button() -> Clickable {
    Clickable::single(HitBox::new(Vec3::new(1.0, 0.2, 1.0), Mat4::IDENTITY))
}

#[test]
fn client_to_ndc_maps_corners_and_centre() {
    let origin = Vec2::new(10.0, 20.0);
    let size = Vec2::new(200.0, 100.0);
    let tl = client_to_ndc(Vec2::new(10.0, 20.0), origin, size).unwrap();
    assert!(approx(tl.x, -1.0) && approx(tl.y, 1.0));
    let br = client_to_ndc(Vec2::new(210.0, 120.0), origin, size).unwrap();
    assert!(approx(br.x, 1.0) && approx(br.y, -1.0));
    let c = client_to_ndc(Vec2::new(110.0, 70.0), origin, size).unwrap();
    assert!(approx(c.x, 0.0) && approx(c.y, 0.0));
}

#[test]
fn client_to_ndc_rejects_degenerate_rect() {
    assert!(client_to_ndc(Vec2::ZERO, Vec2::ZERO, Vec2::new(0.0, 100.0)).is_none());
    assert!(client_to_ndc(Vec2::ZERO, Vec2::ZERO, Vec2::new(100.0, -1.0)).is_none());
}

#[test]
fn ray_from_ndc_points_down_the_view_axis() {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(45f32.to_radians(), 1.0, 0.1, 100.0);
    let inv = (proj * view).inverse();
    let ray = Ray::from_ndc(Vec2::ZERO, inv).unwrap();
    assert!(approx(ray.dir.length(), 1.0));
    assert!(approx(ray.dir.z, -1.0));
    assert!(approx(ray.origin.x, 0.0) && approx(ray.origin.y, 0.0));
    assert!(ray.origin.z < 5.0 && ray.origin.z > 4.8);
}

#[test]
fn ray_through_screen_centre_hits_box_at_origin() {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(45f32.to_radians(), 1.0, 0.1, 100.0);
    let ray = Ray::from_ndc(Vec2::ZERO, (proj * view).inverse()).unwrap();
    let hit = unit_button().hit(&ray).unwrap();
    // near face sits at z = 0.5
    let point = ray.origin + ray.dir * hit;
    assert!((point.z - 0.5).abs() < 1e-3);
}

#[test]
fn hitbox_hit_and_miss() {
    let button = unit_button();
    let t = button.hit(&ray_down_at(0.2, -0.3)).unwrap();
    assert!(approx(t, 4.9));
    assert!(button.hit(&ray_down_at(0.6, 0.0)).is_none());
    assert!(button.hit(&ray_down_at(0.0, 2.0)).is_none());
}

#[test]
fn hitbox_behind_origin_is_ignored() {
    let ray = Ray {
        origin: Vec3::new(0.0, 5.0, 0.0),
        dir: Vec3::Y,
    };
    assert!(unit_button().hit(&ray).is_none());
}

#[test]
fn hitbox_from_inside_reports_exit_distance() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::Y,
    };
    let t = unit_button().hit(&ray).unwrap();
    assert!(approx(t, 0.1));
}

#[test]
fn hitbox_respects_model_transform() {
    let model = Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0))
        * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2);
    // thin in local z, which becomes world y after the tilt
    let hb = HitBox::new(Vec3::new(1.2, 0.6, 0.08), model);
    let t = hb.intersect(&ray_down_at(3.0, 0.0)).unwrap();
    assert!(approx(t, 5.0 - 0.04));
    assert!(hb.intersect(&ray_down_at(0.0, 0.0)).is_none());
    // local y extent of 0.6 now lies along world z
    assert!(hb.intersect(&ray_down_at(3.0, 0.25)).is_some());
    assert!(hb.intersect(&ray_down_at(3.0, 0.35)).is_none());
}

#[test]
fn debounce_drops_taps_inside_window() {
    let mut taps = TapController::new(Duration::from_millis(300));
    taps.clickable = Some(unit_button());
    let t0 = Instant::now();
    let ray = ray_down_at(0.0, 0.0);
    assert!(taps.register_tap(&ray, t0));
    assert!(!taps.register_tap(&ray, t0 + Duration::from_millis(100)));
    assert!(!taps.register_tap(&ray, t0 + Duration::from_millis(299)));
    assert!(taps.register_tap(&ray, t0 + Duration::from_millis(300)));
}

#[test]
fn two_hits_within_window_toggle_once() {
    let mut taps = TapController::new(Duration::from_millis(300));
    taps.clickable = Some(unit_button());
    let t0 = Instant::now();
    let ray = ray_down_at(0.0, 0.0);
    assert!(taps.register_tap(&ray, t0));
    assert!(!taps.register_tap(&ray, t0 + Duration::from_millis(150)));
}

#[test]
fn two_hits_outside_window_toggle_twice() {
    let mut taps = TapController::new(Duration::from_millis(300));
    taps.clickable = Some(unit_button());
    let t0 = Instant::now();
    let ray = ray_down_at(0.0, 0.0);
    assert!(taps.register_tap(&ray, t0));
    assert!(taps.register_tap(&ray, t0 + Duration::from_millis(400)));
}

#[test]
fn miss_does_not_open_window() {
    let mut taps = TapController::new(Duration::from_millis(300));
    taps.clickable = Some(unit_button());
    let t0 = Instant::now();
    assert!(!taps.register_tap(&ray_down_at(2.0, 2.0), t0));
    assert!(taps.register_tap(&ray_down_at(0.0, 0.0), t0 + Duration::from_millis(10)));
}

#[test]
fn tap_before_button_exists_is_ignored() {
    let mut taps = TapController::new(Duration::from_millis(300));
    let t0 = Instant::now();
    assert!(!taps.register_tap(&ray_down_at(0.0, 0.0), t0));
    taps.clickable = Some(unit_button());
    assert!(taps.register_tap(&ray_down_at(0.0, 0.0), t0 + Duration::from_millis(1)));
}

#[test]
fn drag_tracker_reports_deltas_for_active_pointer_only() {
    let mut drag = DragTracker::default();
    assert!(drag.move_to(1, Vec2::new(5.0, 5.0)).is_none());
    drag.begin(1, Vec2::new(10.0, 10.0));
    assert_eq!(drag.move_to(1, Vec2::new(15.0, 8.0)), Some(Vec2::new(5.0, -2.0)));
    assert_eq!(drag.move_to(1, Vec2::new(15.0, 9.0)), Some(Vec2::new(0.0, 1.0)));
    assert!(drag.move_to(2, Vec2::new(0.0, 0.0)).is_none());
    drag.end(2);
    assert_eq!(drag.active, Some(1));
    drag.end(1);
    assert!(drag.move_to(1, Vec2::new(20.0, 20.0)).is_none());
}

#[test]
fn ray_hitting_only_other_geometry_does_not_trigger() {
    let floor = HitBox::new(Vec3::new(8.0, 0.01, 8.0), Mat4::IDENTITY);
    let mut taps = TapController::new(Duration::from_millis(300));
    taps.clickable = Some(Clickable::single(HitBox::new(
        Vec3::new(1.0, 0.2, 1.0),
        Mat4::from_translation(Vec3::new(0.0, 0.1, 2.0)),
    )));
    let ray = ray_down_at(-2.0, -2.0);
    assert!(floor.intersect(&ray).is_some());
    assert!(!taps.register_tap(&ray, Instant::now()));
}

#[test]
fn unarmed_controller_never_toggles() {
    // stage never built: the button's screen position hits nothing
    let mut taps = TapController::new(Duration::from_millis(300));
    let t0 = Instant::now();
    let ray = ray_down_at(0.0, 0.0);
    assert!(unit_button().hit(&ray).is_some());
    for i in 0..4 {
        assert!(!taps.register_tap(&ray, t0 + Duration::from_millis(400 * i)));
    }
    assert!(taps.debounce.ready(t0));
}
