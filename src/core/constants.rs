use glam::{Vec2, Vec3};

// Shared scene layout constants used by the web frontend.

// Stage
pub const BACKGROUND_HEX: u32 = 0x050307;
pub const FOG_NEAR: f32 = 6.0;
pub const FOG_FAR: f32 = 20.0;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 50.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.3, 1.2, 5.5); // front view with the countdown visible behind
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.9, 0.0);

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 7.0;
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;

// Floor
pub const FLOOR_RADIUS: f32 = 4.0;
pub const FLOOR_SEGMENTS: u32 = 64;
pub const FLOOR_HEX: u32 = 0x050308;

// Play/pause button (box lying flat, textured face pointing up)
pub const BUTTON_SIZE: Vec3 = Vec3::new(1.2, 0.6, 0.08);
pub const BUTTON_POSITION: Vec3 = Vec3::new(0.4, 0.04, 1.1);
pub const BUTTON_TILT_X: f32 = -std::f32::consts::FRAC_PI_2;
pub const BUTTON_FACE_HEX: u32 = 0x1a1a1a;
pub const BUTTON_TEXTURED_FACE: usize = 4; // +Z, up after the tilt
pub const BUTTON_TEXTURE_SIZE: (u32, u32) = (512, 256);
pub const BUTTON_CORNER_RADIUS: f64 = 30.0;

// Loaded model
pub const MODEL_TARGET_SIZE: f32 = 2.0;
pub const MODEL_YAW: f32 = -std::f32::consts::PI / 5.0; // three-quarter view

// Countdown billboard
pub const COUNTDOWN_POSITION: Vec3 = Vec3::new(0.0, 2.0, -2.0);
pub const COUNTDOWN_SCALE: Vec2 = Vec2::new(8.0, 4.0); // 2:1 like the raster
pub const COUNTDOWN_RASTER_BASE: (u32, u32) = (1024, 512);
pub const COUNTDOWN_FONT_PX: u32 = 300;
pub const COUNTDOWN_ALPHA_TEST: f32 = 0.1;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const TONE_MAPPING_EXPOSURE: f32 = 1.2;
pub const SHADOW_MAP_SIZE: u32 = 1024;
pub const SHADOW_NEAR: f32 = 0.5;
pub const MSAA_SAMPLES: u32 = 4;
