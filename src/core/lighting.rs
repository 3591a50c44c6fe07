use super::color::{scaled, srgb_hex};
use super::constants::{COUNTDOWN_POSITION, SHADOW_NEAR};
use glam::{Mat4, Vec3};

/// Number of punctual light slots in the scene uniform.
pub const MAX_LIGHTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Point,
    Spot {
        target: Vec3,
        /// Half-angle of the cone, radians.
        angle: f32,
        /// Fraction of the cone that fades out, 0..1.
        penumbra: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec3,
    /// Linear RGB.
    pub color: [f32; 3],
    pub intensity: f32,
    /// Cutoff distance; zero means unbounded.
    pub distance: f32,
    pub decay: f32,
    pub cast_shadow: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightRaw {
    /// xyz position, w: 0 point / 1 spot
    pub position: [f32; 4],
    /// rgb * intensity, w: cutoff distance
    pub color: [f32; 4],
    /// xyz unit vector from the target towards the light, w: decay
    pub direction: [f32; 4],
    /// x: cos(angle), y: cos(angle * (1 - penumbra)), z: 1 if shadowed
    pub cone: [f32; 4],
}

impl Light {
    pub fn point(hex: u32, intensity: f32, distance: f32, decay: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            color: srgb_hex(hex),
            intensity,
            distance,
            decay,
            cast_shadow: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn spot(
        hex: u32,
        intensity: f32,
        distance: f32,
        angle: f32,
        penumbra: f32,
        decay: f32,
        position: Vec3,
        target: Vec3,
    ) -> Self {
        Self {
            kind: LightKind::Spot {
                target,
                angle,
                penumbra,
            },
            position,
            color: srgb_hex(hex),
            intensity,
            distance,
            decay,
            cast_shadow: false,
        }
    }

    pub fn with_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    pub fn to_raw(&self) -> LightRaw {
        let c = scaled(self.color, self.intensity);
        match self.kind {
            LightKind::Point => LightRaw {
                position: [self.position.x, self.position.y, self.position.z, 0.0],
                color: [c[0], c[1], c[2], self.distance],
                direction: [0.0, -1.0, 0.0, self.decay],
                cone: [-1.0, -1.0, 0.0, 0.0],
            },
            LightKind::Spot {
                target,
                angle,
                penumbra,
            } => {
                let dir = (self.position - target).normalize_or_zero();
                LightRaw {
                    position: [self.position.x, self.position.y, self.position.z, 1.0],
                    color: [c[0], c[1], c[2], self.distance],
                    direction: [dir.x, dir.y, dir.z, self.decay],
                    cone: [
                        angle.cos(),
                        (angle * (1.0 - penumbra)).cos(),
                        if self.cast_shadow { 1.0 } else { 0.0 },
                        0.0,
                    ],
                }
            }
        }
    }

    /// Perspective frustum of a shadow-casting spot light.
    pub fn shadow_view_proj(&self) -> Option<Mat4> {
        let LightKind::Spot { target, angle, .. } = self.kind else {
            return None;
        };
        if !self.cast_shadow {
            return None;
        }
        let far = if self.distance > 0.0 { self.distance } else { 500.0 };
        let up = if (self.position - target).normalize_or_zero().abs_diff_eq(Vec3::Y, 1e-3) {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(self.position, target, up);
        let proj = Mat4::perspective_rh(2.0 * angle, 1.0, SHADOW_NEAR, far);
        Some(proj * view)
    }
}

/// Every light in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Rig {
    pub ambient: AmbientLight,
    pub lights: Vec<Light>,
}

impl Rig {
    /// Add a light; returns false when every slot is taken.
    pub fn add(&mut self, light: Light) -> bool {
        if self.lights.len() >= MAX_LIGHTS {
            log::warn!("[lights] all {} slots used, dropping light", MAX_LIGHTS);
            return false;
        }
        self.lights.push(light);
        true
    }

    pub fn pack(&self) -> ([LightRaw; MAX_LIGHTS], u32) {
        let mut out = [LightRaw::default(); MAX_LIGHTS];
        for (slot, light) in out.iter_mut().zip(&self.lights) {
            *slot = light.to_raw();
        }
        (out, self.lights.len().min(MAX_LIGHTS) as u32)
    }

    /// Only the first shadow-casting spot light gets a shadow map.
    pub fn shadow_caster(&self) -> Option<&Light> {
        self.lights
            .iter()
            .find(|l| l.cast_shadow && matches!(l.kind, LightKind::Spot { .. }))
    }

    #[inline]
    pub fn ambient_radiance(&self) -> [f32; 3] {
        scaled(self.ambient.color, self.ambient.intensity)
    }
}

/// Ambient wash, warm key spot, cool fill and a soft front spot.
pub fn stage_rig() -> Rig {
    let gramophone = Vec3::new(0.0, 0.8, 0.0);
    Rig {
        ambient: AmbientLight {
            color: srgb_hex(0x0b0b12),
            intensity: 0.3,
        },
        lights: vec![
            Light::spot(
                0xffe0b2,
                18.0,
                30.0,
                std::f32::consts::PI / 3.2,
                0.35,
                1.3,
                Vec3::new(1.6, 3.2, 2.0),
                gramophone,
            )
            .with_shadow(),
            Light::point(0x4f46e5, 0.8, 14.0, 2.0, Vec3::new(-2.5, 2.0, 3.2)),
            Light::spot(
                0xfff4e6,
                3.0,
                12.0,
                std::f32::consts::PI / 5.0,
                0.4,
                1.2,
                Vec3::new(0.0, 1.5, 4.5),
                gramophone,
            ),
        ],
    }
}

/// Warm glow that sits on the countdown billboard.
pub fn countdown_light() -> Light {
    Light::point(0xffc864, 2.5, 15.0, 1.5, COUNTDOWN_POSITION)
}
