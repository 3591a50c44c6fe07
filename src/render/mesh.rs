use super::helpers;
use super::material::GpuMaterial;
use super::uniforms::ObjectUniform;
use crate::core::mesh::{FaceGroup, MeshData, ModelVertex};
use glam::Mat4;
use smallvec::SmallVec;
use std::rc::Rc;
use wgpu::util::DeviceExt;

const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
    2 => Float32x2,
    3 => Float32x4
];

pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBS,
    }
}

pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub groups: SmallVec<[FaceGroup; 6]>,
}

impl GpuMesh {
    pub fn new(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            groups: mesh.groups.clone(),
        }
    }
}

/// Per-object transform and shadow flags bound at group 2.
pub struct ObjectBinding {
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl ObjectBinding {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        model: Mat4,
        receive_shadow: bool,
    ) -> Self {
        let buffer = helpers::uniform_buffer(
            device,
            "object_uniform",
            &ObjectUniform::new(model, receive_shadow),
        );
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object_bg"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }
}

/// A mesh in the scene with one material per face group.
pub struct Drawable {
    pub mesh: GpuMesh,
    pub materials: SmallVec<[Rc<GpuMaterial>; 6]>,
    pub object: ObjectBinding,
    pub cast_shadow: bool,
}

impl Drawable {
    /// Material for a face group; out-of-range slots reuse the last material.
    pub fn material_for(&self, group: &FaceGroup) -> Option<&Rc<GpuMaterial>> {
        self.materials
            .get(group.material)
            .or_else(|| self.materials.last())
    }

    /// Draw ranges with their material; a mesh without groups is one range.
    pub fn ranges(&self) -> SmallVec<[FaceGroup; 6]> {
        if self.mesh.groups.is_empty() {
            smallvec::smallvec![FaceGroup {
                start: 0,
                count: self.mesh.index_count,
                material: 0,
            }]
        } else {
            self.mesh.groups.clone()
        }
    }
}

/// Camera-facing textured quad; the model matrix carries centre and scale.
pub struct Sprite {
    pub material: Rc<GpuMaterial>,
    pub object: ObjectBinding,
}
