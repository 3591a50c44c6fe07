use super::color::{scaled, srgb_hex, srgb_hex_rgba};
use super::constants::{BUTTON_FACE_HEX, COUNTDOWN_ALPHA_TEST, FLOOR_HEX};

/// Metallic-roughness surface parameters; texture maps multiply these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialDesc {
    /// Linear RGBA.
    pub base_color: [f32; 4],
    /// Linear RGB already multiplied by the emissive intensity.
    pub emissive: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    /// Fragments with alpha below this are discarded.
    pub alpha_test: f32,
    pub ao_intensity: f32,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0, 1.0],
            emissive: [0.0; 3],
            roughness: 1.0,
            metalness: 0.0,
            alpha_test: 0.0,
            ao_intensity: 1.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialRaw {
    pub base_color: [f32; 4],
    pub emissive: [f32; 4],
    /// x: roughness, y: metalness, z: alpha test, w: ao intensity
    pub params: [f32; 4],
}

impl MaterialDesc {
    pub fn to_raw(&self) -> MaterialRaw {
        MaterialRaw {
            base_color: self.base_color,
            emissive: [self.emissive[0], self.emissive[1], self.emissive[2], 1.0],
            params: [
                self.roughness,
                self.metalness,
                self.alpha_test,
                self.ao_intensity,
            ],
        }
    }
}

pub fn floor() -> MaterialDesc {
    MaterialDesc {
        base_color: srgb_hex_rgba(FLOOR_HEX, 1.0),
        roughness: 1.0,
        metalness: 0.0,
        ..Default::default()
    }
}

/// Top face of the button: white so the label texture shows as drawn.
pub fn button_top() -> MaterialDesc {
    MaterialDesc {
        base_color: [1.0, 1.0, 1.0, 1.0],
        emissive: scaled(srgb_hex(BUTTON_FACE_HEX), 0.1),
        roughness: 0.7,
        metalness: 0.1,
        ..Default::default()
    }
}

pub fn button_side() -> MaterialDesc {
    MaterialDesc {
        base_color: srgb_hex_rgba(BUTTON_FACE_HEX, 1.0),
        emissive: scaled(srgb_hex(BUTTON_FACE_HEX), 0.1),
        roughness: 0.7,
        metalness: 0.1,
        ..Default::default()
    }
}

/// Shared by every mesh of the loaded model.
pub fn model_pbr() -> MaterialDesc {
    MaterialDesc {
        roughness: 1.0,
        metalness: 1.0,
        ..Default::default()
    }
}

pub fn countdown_sprite() -> MaterialDesc {
    MaterialDesc {
        alpha_test: COUNTDOWN_ALPHA_TEST,
        ..Default::default()
    }
}
