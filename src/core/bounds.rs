use glam::{Mat4, Quat, Vec3};

/// Axis-aligned bounding box. An empty box has `min > max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        points.into_iter().fold(Self::EMPTY, |b, p| b.include(p))
    }

    #[inline]
    pub fn include(self, p: Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    #[inline]
    pub fn union(self, other: Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    #[inline]
    pub fn max_dimension(&self) -> f32 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }

    /// World-space box enclosing this box after `m` (all eight corners).
    pub fn transformed(&self, m: &Mat4) -> Self {
        if self.is_empty() {
            return *self;
        }
        let (lo, hi) = (self.min, self.max);
        Self::from_points((0..8).map(|i| {
            let corner = Vec3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            );
            m.transform_point3(corner)
        }))
    }
}

/// Uniform scale, translation and yaw applied to a loaded model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub translation: Vec3,
    pub rotation_y: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: Vec3::ZERO,
            rotation_y: 0.0,
        }
    }
}

impl Placement {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y),
            self.translation,
        )
    }
}

/// Scale a model so its largest extent equals `desired_size` and rest it on Y = 0.
///
/// The yaw is applied last; a rotation about Y leaves the vertical extent
/// untouched, so the model still sits on the ground afterwards.
pub fn fit_to_ground(bounds: &Aabb, desired_size: f32, rotation_y: f32) -> Placement {
    let max_dim = bounds.max_dimension();
    let scale = if max_dim > 0.0 && max_dim.is_finite() {
        desired_size / max_dim
    } else {
        1.0
    };

    let mut translation = Vec3::ZERO;
    let scaled = bounds.transformed(&Mat4::from_scale(Vec3::splat(scale)));
    if !scaled.is_empty() {
        translation.y -= scaled.min.y;
    }

    Placement {
        scale,
        translation,
        rotation_y,
    }
}
