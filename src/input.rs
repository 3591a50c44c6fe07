use glam::{Mat4, Vec2, Vec3};
use instant::{Duration, Instant};

/// Client coordinates to normalized device coordinates of a canvas whose
/// bounding rect starts at `rect_origin` and is `rect_size` CSS pixels big.
///
/// NDC y points up. Returns `None` for a degenerate rect.
pub fn client_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if !(rect_size.x > 0.0 && rect_size.y > 0.0) {
        return None;
    }
    let local = (client - rect_origin) / rect_size;
    Some(Vec2::new(local.x * 2.0 - 1.0, -(local.y * 2.0) + 1.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    /// Ray through `ndc`, unprojected between the near and far planes.
    pub fn from_ndc(ndc: Vec2, inverse_view_proj: Mat4) -> Option<Ray> {
        let near = inverse_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let dir = (far - near).normalize_or_zero();
        if !near.is_finite() || dir == Vec3::ZERO {
            return None;
        }
        Some(Ray { origin: near, dir })
    }
}

/// Oriented box: an axis-aligned box of `half_extents` in the local frame of `model`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitBox {
    pub half_extents: Vec3,
    pub model: Mat4,
}

impl HitBox {
    pub fn new(size: Vec3, model: Mat4) -> Self {
        Self {
            half_extents: size * 0.5,
            model,
        }
    }

    /// World-space distance along `ray` to the nearest hit in front of the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let inv = self.model.inverse();
        if !inv.is_finite() {
            return None;
        }
        let o = inv.transform_point3(ray.origin);
        let d = inv.transform_vector3(ray.dir);

        // slab test in local space; t stays in ray parameter units
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let (oa, da, ha) = (o[axis], d[axis], self.half_extents[axis]);
            if da.abs() < 1e-9 {
                if oa < -ha || oa > ha {
                    return None;
                }
                continue;
            }
            let t1 = (-ha - oa) / da;
            let t2 = (ha - oa) / da;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
            if t_min > t_max {
                return None;
            }
        }
        if t_max < 0.0 {
            return None;
        }
        let t = if t_min >= 0.0 { t_min } else { t_max };
        Some(t)
    }
}

/// The object a tap has to hit. Every part counts as the object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clickable {
    pub parts: Vec<HitBox>,
}

impl Clickable {
    pub fn single(part: HitBox) -> Self {
        Self { parts: vec![part] }
    }

    pub fn hit(&self, ray: &Ray) -> Option<f32> {
        self.parts
            .iter()
            .filter_map(|p| p.intersect(ray))
            .min_by(|a, b| a.total_cmp(b))
    }
}

/// Timestamp window that swallows triggers arriving too soon after the last one.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    pub window: Duration,
    last: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    #[inline]
    pub fn ready(&self, now: Instant) -> bool {
        match self.last {
            Some(last) => now.saturating_duration_since(last) >= self.window,
            None => true,
        }
    }

    #[inline]
    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }
}

/// Decides whether a tap toggles playback.
#[derive(Clone, Debug)]
pub struct TapController {
    /// Unset until the button exists.
    pub clickable: Option<Clickable>,
    pub debounce: Debounce,
}

impl TapController {
    pub fn new(window: Duration) -> Self {
        Self {
            clickable: None,
            debounce: Debounce::new(window),
        }
    }

    /// True when the tap should toggle playback. Taps inside the debounce
    /// window are dropped before the ray is tested; misses leave the window alone.
    pub fn register_tap(&mut self, ray: &Ray, now: Instant) -> bool {
        if !self.debounce.ready(now) {
            return false;
        }
        let Some(clickable) = &self.clickable else {
            return false;
        };
        if clickable.hit(ray).is_none() {
            return false;
        }
        self.debounce.mark(now);
        true
    }
}

/// Pointer drag bookkeeping for orbit rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    pub active: Option<i32>,
    pub last: Vec2,
}

impl DragTracker {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = Some(pointer_id);
        self.last = at;
    }

    /// Pixel delta since the previous position of the tracked pointer.
    pub fn move_to(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if self.active != Some(pointer_id) {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if self.active == Some(pointer_id) {
            self.active = None;
        }
    }
}
