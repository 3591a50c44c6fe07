use crate::canvas_text;
use crate::core::lighting::{countdown_light, Rig};
use crate::core::materials;
use crate::core::mesh::{box_mesh, circle};
use crate::core::{
    BUTTON_POSITION, BUTTON_SIZE, BUTTON_TEXTURED_FACE, BUTTON_TILT_X, COUNTDOWN_POSITION,
    COUNTDOWN_SCALE, FLOOR_RADIUS, FLOOR_SEGMENTS,
};
use crate::input::{Clickable, HitBox};
use crate::loader::LoadedModel;
use crate::render::{GpuState, MaterialMaps};
use glam::Mat4;
use image::RgbaImage;
use smallvec::SmallVec;

/// Button lying flat on the floor with its textured face up.
pub fn button_model() -> Mat4 {
    Mat4::from_translation(BUTTON_POSITION) * Mat4::from_rotation_x(BUTTON_TILT_X)
}

/// Floor disc and play button. The button label is drawn once here.
///
/// Returns the hit volume of the button that was just placed.
pub fn build_stage(gpu: &mut GpuState<'_>) -> Clickable {
    let floor_material = gpu.create_material(materials::floor(), MaterialMaps::default());
    gpu.add_drawable(
        "floor",
        &circle(FLOOR_RADIUS, FLOOR_SEGMENTS),
        smallvec::smallvec![floor_material],
        Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        false,
        true,
    );

    let face = match canvas_text::draw_button_face() {
        Ok(img) => Some(gpu.create_texture("button_face", &img, true)),
        Err(e) => {
            log::error!("[stage] button label failed: {:?}", e);
            None
        }
    };
    let top = gpu.create_material(
        materials::button_top(),
        MaterialMaps {
            base_color: face,
            ..Default::default()
        },
    );
    let side = gpu.create_material(materials::button_side(), MaterialMaps::default());
    let slots: SmallVec<[_; 6]> = (0..6)
        .map(|i| {
            if i == BUTTON_TEXTURED_FACE {
                top.clone()
            } else {
                side.clone()
            }
        })
        .collect();
    gpu.add_drawable("button", &box_mesh(BUTTON_SIZE), slots, button_model(), true, true);
    log::info!("[stage] floor and button ready");
    Clickable::single(HitBox::new(BUTTON_SIZE, button_model()))
}

/// Upload the loaded gramophone; every mesh shares one material.
pub fn attach_model(gpu: &mut GpuState<'_>, model: LoadedModel) {
    let LoadedModel {
        meshes,
        placement,
        textures,
    } = model;
    let upload = |img: Option<RgbaImage>, label: &str, srgb: bool| {
        img.map(|i| gpu.create_texture(label, &i, srgb))
    };
    let maps = MaterialMaps {
        base_color: upload(textures.base_color, "model_base_color", true),
        metalness: upload(textures.metalness, "model_metalness", false),
        roughness: upload(textures.roughness, "model_roughness", false),
        normal: upload(textures.normal, "model_normal", false),
        ao: upload(textures.ao, "model_ao", true),
    };
    let material = gpu.create_material(materials::model_pbr(), maps);
    let transform = placement.matrix();
    for (i, mesh) in meshes.iter().enumerate() {
        gpu.add_drawable(
            &format!("model_{}", i),
            mesh,
            smallvec::smallvec![material.clone()],
            transform,
            true,
            true,
        );
    }
    log::info!("[stage] gramophone attached ({} meshes)", meshes.len());
}

/// Show `img` on the countdown billboard. The first time also lights it.
pub fn attach_countdown(gpu: &mut GpuState<'_>, rig: &mut Rig, img: RgbaImage) {
    let first = !gpu.has_sprite();
    let texture = gpu.create_texture("countdown", &img, true);
    let material = gpu.create_material(
        materials::countdown_sprite(),
        MaterialMaps {
            base_color: Some(texture),
            ..Default::default()
        },
    );
    gpu.set_sprite(material, COUNTDOWN_POSITION, COUNTDOWN_SCALE);
    if first {
        rig.add(countdown_light());
    }
}
