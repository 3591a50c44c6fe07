// Day-count arithmetic and the glow recipe for the countdown billboard.

pub const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Whole days left until `target_ms`, rounded up; zero once the target has passed.
pub fn days_remaining(target_ms: f64, now_ms: f64) -> u32 {
    let days = ((target_ms - now_ms) / MS_PER_DAY).ceil();
    if days.is_nan() || days <= 0.0 {
        0
    } else if days >= u32::MAX as f64 {
        u32::MAX
    } else {
        days as u32
    }
}

#[inline]
pub fn label(days: u32) -> String {
    days.to_string()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One `fillText` over the same glyphs: a blurred shadow plus a fill.
/// `shadow: None` is the crisp top layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPass {
    pub shadow: Option<(Rgba, f64)>,
    pub fill: Rgba,
}

// Outer warm halo first, crisp white last.
pub const GLOW_PASSES: [GlowPass; 4] = [
    GlowPass {
        shadow: Some((Rgba::new(255, 180, 80, 0.7), 30.0)),
        fill: Rgba::new(255, 200, 100, 0.5),
    },
    GlowPass {
        shadow: Some((Rgba::new(255, 240, 200, 0.6), 20.0)),
        fill: Rgba::new(255, 255, 200, 0.7),
    },
    GlowPass {
        shadow: Some((Rgba::new(255, 255, 255, 0.8), 12.0)),
        fill: Rgba::new(255, 255, 255, 0.9),
    },
    GlowPass {
        shadow: None,
        fill: Rgba::new(255, 255, 255, 1.0),
    },
];

/// Backing-store size and context scale for a raster of `base` CSS pixels.
///
/// The pixel ratio is capped at `max_ratio`; missing or non-finite ratios count as 1.
pub fn raster_size(base: (u32, u32), device_pixel_ratio: f64, max_ratio: f64) -> (u32, u32, f64) {
    let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max_ratio)
    } else {
        1.0
    };
    let w = (base.0 as f64 * ratio).round() as u32;
    let h = (base.1 as f64 * ratio).round() as u32;
    (w.max(1), h.max(1), ratio)
}
