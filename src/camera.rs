use glam::{Mat4, Vec3, Vec4};
use std::f32::consts::{PI, TAU};

const POLAR_EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSettings {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the pending rotation applied per frame.
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

/// Perspective camera orbiting a fixed target with damped rotation.
///
/// Rotation is kept as spherical coordinates around `target`: `theta` is the
/// azimuth measured from +Z towards +X, `phi` the polar angle from +Y.
/// Input accumulates into pending deltas; `update` bleeds them in.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pub lens: Lens,
    pub settings: OrbitSettings,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, lens: Lens, settings: OrbitSettings) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };
        Self {
            target,
            radius: radius.clamp(settings.min_distance, settings.max_distance),
            theta,
            phi,
            lens,
            settings,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye()).normalize_or_zero()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.lens.aspect = aspect;
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.lens.fov_y_deg.to_radians(),
            self.lens.aspect,
            self.lens.near,
            self.lens.far,
        )
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    #[inline]
    pub fn inverse_view_proj(&self) -> Mat4 {
        self.view_proj().inverse()
    }

    /// Camera right and up axes in world space (billboard basis).
    pub fn basis(&self) -> (Vec3, Vec3) {
        let inv_view = self.view().inverse();
        let right: Vec4 = inv_view.x_axis;
        let up: Vec4 = inv_view.y_axis;
        (right.truncate(), up.truncate())
    }

    /// Queue a drag of `dx`, `dy` pixels over a viewport `viewport_height` pixels tall.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_theta -= TAU * dx / h * self.settings.rotate_speed;
        self.pending_phi -= TAU * dy / h * self.settings.rotate_speed;
    }

    /// Queue a wheel step; negative `delta_y` moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        let step = 0.95_f32.powf(self.settings.zoom_speed);
        if delta_y < 0.0 {
            self.pending_scale *= step;
        } else if delta_y > 0.0 {
            self.pending_scale /= step;
        }
    }

    /// Advance one frame of damping. Returns true while motion is still pending.
    pub fn update(&mut self) -> bool {
        let d = self.settings.damping.clamp(0.0, 1.0);
        self.theta += self.pending_theta * d;
        self.phi = (self.phi + self.pending_phi * d).clamp(POLAR_EPS, PI - POLAR_EPS);
        self.radius = (self.radius * self.pending_scale)
            .clamp(self.settings.min_distance, self.settings.max_distance);
        self.pending_scale = 1.0;
        self.pending_theta *= 1.0 - d;
        self.pending_phi *= 1.0 - d;
        if self.pending_theta.abs() < 1e-6 {
            self.pending_theta = 0.0;
        }
        if self.pending_phi.abs() < 1e-6 {
            self.pending_phi = 0.0;
        }
        self.pending_theta != 0.0 || self.pending_phi != 0.0
    }
}
