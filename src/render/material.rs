use super::helpers;
use super::texture::{Fallbacks, GpuTexture};
use crate::core::materials::MaterialDesc;

/// Textures for each map slot; `None` picks the neutral fallback.
#[derive(Default)]
pub struct MaterialMaps {
    pub base_color: Option<GpuTexture>,
    pub metalness: Option<GpuTexture>,
    pub roughness: Option<GpuTexture>,
    pub normal: Option<GpuTexture>,
    pub ao: Option<GpuTexture>,
}

pub struct GpuMaterial {
    pub desc: MaterialDesc,
    pub uniform: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    // bound textures live as long as the bind group
    _maps: MaterialMaps,
}

pub(crate) fn material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("material_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::FRAGMENT),
            helpers::texture_entry(1),
            helpers::texture_entry(2),
            helpers::texture_entry(3),
            helpers::texture_entry(4),
            helpers::texture_entry(5),
            helpers::sampler_entry(6),
        ],
    })
}

impl GpuMaterial {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        fallbacks: &Fallbacks,
        desc: MaterialDesc,
        maps: MaterialMaps,
    ) -> Self {
        let uniform = helpers::uniform_buffer(device, "material_uniform", &desc.to_raw());
        let views = [
            view_or(&maps.base_color, &fallbacks.white_srgb),
            view_or(&maps.metalness, &fallbacks.white_linear),
            view_or(&maps.roughness, &fallbacks.white_linear),
            view_or(&maps.normal, &fallbacks.flat_normal),
            view_or(&maps.ao, &fallbacks.white_srgb),
        ];
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("material_bg"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(views[0]),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(views[1]),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(views[2]),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::TextureView(views[3]),
                },
                wgpu::BindGroupEntry {
                    binding: 5,
                    resource: wgpu::BindingResource::TextureView(views[4]),
                },
                wgpu::BindGroupEntry {
                    binding: 6,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Self {
            desc,
            uniform,
            bind_group,
            _maps: maps,
        }
    }
}

#[inline]
fn view_or<'t>(slot: &'t Option<GpuTexture>, fallback: &'t GpuTexture) -> &'t wgpu::TextureView {
    slot.as_ref().map_or(&fallback.view, |t| &t.view)
}
