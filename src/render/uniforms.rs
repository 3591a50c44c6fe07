use crate::camera::OrbitCamera;
use crate::core::color::srgb_hex;
use crate::core::lighting::{LightRaw, Rig, MAX_LIGHTS};
use crate::core::{BACKGROUND_HEX, FOG_FAR, FOG_NEAR};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniform {
    view_proj: [[f32; 4]; 4],
    shadow_view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    forward: [f32; 4],
    right: [f32; 4],
    up: [f32; 4],
    ambient: [f32; 4],
    fog_color: [f32; 4],
    // near, far, light count, shadow map valid
    fog: [f32; 4],
    lights: [LightRaw; MAX_LIGHTS],
}

impl SceneUniform {
    pub(crate) fn new(camera: &OrbitCamera, rig: &Rig) -> Self {
        let (lights, count) = rig.pack();
        let shadow = rig.shadow_caster().and_then(|l| l.shadow_view_proj());
        let (right, up) = camera.basis();
        let amb = rig.ambient_radiance();
        let fog = srgb_hex(BACKGROUND_HEX);
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            shadow_view_proj: shadow.unwrap_or(Mat4::IDENTITY).to_cols_array_2d(),
            eye: vec4(camera.eye(), 1.0),
            forward: vec4(camera.forward(), 0.0),
            right: vec4(right, 0.0),
            up: vec4(up, 0.0),
            ambient: [amb[0], amb[1], amb[2], 1.0],
            fog_color: [fog[0], fog[1], fog[2], 1.0],
            fog: [
                FOG_NEAR,
                FOG_FAR,
                count as f32,
                if shadow.is_some() { 1.0 } else { 0.0 },
            ],
            lights,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ShadowUniform {
    pub(crate) view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniform {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
    // x: receives shadows
    flags: [f32; 4],
}

impl ObjectUniform {
    pub(crate) fn new(model: Mat4, receive_shadow: bool) -> Self {
        let normal = model.inverse().transpose();
        Self {
            model: model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
            flags: [if receive_shadow { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) exposure: f32,
    pub(crate) _pad: [f32; 3],
}

#[inline]
fn vec4(v: Vec3, w: f32) -> [f32; 4] {
    [v.x, v.y, v.z, w]
}
