use super::helpers;
use crate::core::MSAA_SAMPLES;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Screen-sized offscreen targets.
///
/// - `msaa_*` is the multisampled HDR colour the scene is drawn into.
/// - `hdr_*` receives the resolve and is sampled by the tone-map pass.
/// - `depth_*` is the multisampled depth buffer of the scene pass.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let attach = wgpu::TextureUsages::RENDER_ATTACHMENT;
        let (msaa_tex, msaa_view) = helpers::create_target(
            device,
            "msaa_tex",
            width,
            height,
            MSAA_SAMPLES,
            HDR_FORMAT,
            attach,
        );
        let (hdr_tex, hdr_view) = helpers::create_target(
            device,
            "hdr_tex",
            width,
            height,
            1,
            HDR_FORMAT,
            attach | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let (depth_tex, depth_view) = helpers::create_target(
            device,
            "depth_tex",
            width,
            height,
            MSAA_SAMPLES,
            DEPTH_FORMAT,
            attach,
        );
        Self {
            msaa_tex,
            msaa_view,
            hdr_tex,
            hdr_view,
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        for tex in [&self.msaa_tex, &self.hdr_tex, &self.depth_tex] {
            tex.destroy();
        }
        *self = Self::new(device, width, height);
    }
}
