pub mod bounds;
pub mod color;
pub mod constants;
pub mod countdown;
pub mod greeting;
pub mod lighting;
pub mod materials;
pub mod mesh;
pub mod model;

pub use constants::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static SHADOW_WGSL: &str = include_str!("../../shaders/shadow.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
