// Page wiring: element ids, asset locations and timing.

// DOM element ids expected in index.html
pub const CANVAS_ID: &str = "scene";
pub const AUDIO_ID: &str = "gramophone-audio";
pub const GREETING_BUTTON_ID: &str = "greeting-button";
pub const GREETING_MESSAGE_ID: &str = "greeting-message";

// Assets, relative to the page
pub const MODEL_PATH: &str = "assets/gramophone.glb";
pub const BASE_COLOR_MAP: &str = "assets/DefaultMaterial_Base_color.tga.png";
pub const METALNESS_MAP: &str = "assets/DefaultMaterial_Metallic.tga.png";
pub const ROUGHNESS_MAP: &str = "assets/DefaultMaterial_Roughness.tga.png";
pub const NORMAL_MAP: &str = "assets/DefaultMaterial_Normal_OpenGL.tga.png";
pub const AO_MAP: &str = "assets/DefaultMaterial_Mixed_AO.tga.png";
pub const AUDIO_SRC: &str = "assets/Clair_Obscur_Expedition_33.mp3";

pub const FONT_FAMILY: &str = "Decort";
pub const FONT_SOURCE: &str = "url(assets/Decort.ttf)";

// Countdown target as a local calendar date (year, month 1-12, day)
pub const TARGET_DATE: (u32, u32, u32) = (2026, 2, 6);
pub const COUNTDOWN_REFRESH_MS: i32 = 60_000;

// Minimum spacing between accepted button taps
pub const TAP_DEBOUNCE_MS: u64 = 300;
