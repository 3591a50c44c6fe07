use crate::camera::OrbitCamera;
use crate::core::color::srgb_hex;
use crate::core::lighting::Rig;
use crate::core::materials::MaterialDesc;
use crate::core::mesh::MeshData;
use crate::core::{BACKGROUND_HEX, MSAA_SAMPLES, TONE_MAPPING_EXPOSURE};
use glam::{Mat4, Vec2, Vec3};
use image::RgbaImage;
use smallvec::SmallVec;
use std::rc::Rc;
use web_sys as web;

mod helpers;
mod material;
mod mesh;
mod post;
mod shadow;
mod targets;
mod texture;
mod uniforms;

pub use material::{GpuMaterial, MaterialMaps};
pub use texture::GpuTexture;

use mesh::{Drawable, GpuMesh, ObjectBinding, Sprite};
use shadow::ShadowResources;
use targets::{RenderTargets, DEPTH_FORMAT, HDR_FORMAT};
use uniforms::SceneUniform;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // sRGB view of the swapchain the tone-map pass writes to
    view_format: wgpu::TextureFormat,

    targets: RenderTargets,
    shadow: ShadowResources,
    post: post::PostResources,
    bg_post: wgpu::BindGroup,

    scene_uniform: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    material_bgl: wgpu::BindGroupLayout,
    object_bgl: wgpu::BindGroupLayout,
    material_sampler: wgpu::Sampler,
    fallbacks: texture::Fallbacks,

    mesh_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,

    drawables: Vec<Drawable>,
    sprite: Option<Sprite>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Canvas formats are linear; render through an sRGB view of them
        let view_format = format.add_srgb_suffix();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} viewed as {:?}", format, view_format);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let shadow_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shadow_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SHADOW_WGSL.into()),
        });
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });

        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let material_bgl = material::material_layout(&device);
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Depth,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
            ],
        });

        let shadow = ShadowResources::new(&device, &shadow_shader, &object_bgl);
        let scene_uniform = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniform"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_uniform.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&shadow.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&shadow.compare_sampler),
                },
            ],
        });

        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_scene"),
            bind_group_layouts: &[&scene_bgl, &material_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let mesh_pipeline = scene_pipeline(
            &device,
            &scene_layout,
            &scene_shader,
            "mesh",
            ("vs_mesh", "fs_mesh"),
            &[mesh::vertex_layout()],
            None,
        );
        let sprite_pipeline = scene_pipeline(
            &device,
            &scene_layout,
            &scene_shader,
            "sprite",
            ("vs_sprite", "fs_sprite"),
            &[],
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );

        let targets = RenderTargets::new(&device, width, height);
        let post = post::create_post_resources(&device, &post_shader, view_format);
        let bg_post = post::bind_source(&device, &post, &targets.hdr_view);
        helpers::write_post_uniforms(&queue, &post.uniform_buffer, TONE_MAPPING_EXPOSURE);

        let fallbacks = texture::Fallbacks::new(&device, &queue);
        let material_sampler = texture::linear_repeat_sampler(&device);
        let bg = srgb_hex(BACKGROUND_HEX);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            targets,
            shadow,
            post,
            bg_post,
            scene_uniform,
            scene_bg,
            material_bgl,
            object_bgl,
            material_sampler,
            fallbacks,
            mesh_pipeline,
            sprite_pipeline,
            drawables: Vec::new(),
            sprite: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: 1.0,
            },
        })
    }

    pub fn create_texture(&self, label: &str, img: &RgbaImage, srgb: bool) -> GpuTexture {
        texture::from_image(&self.device, &self.queue, label, img, srgb)
    }

    pub fn create_material(&self, desc: MaterialDesc, maps: MaterialMaps) -> Rc<GpuMaterial> {
        Rc::new(GpuMaterial::new(
            &self.device,
            &self.material_bgl,
            &self.material_sampler,
            &self.fallbacks,
            desc,
            maps,
        ))
    }

    /// Upload `mesh` and keep it in the scene for good.
    pub fn add_drawable(
        &mut self,
        label: &str,
        mesh: &MeshData,
        materials: SmallVec<[Rc<GpuMaterial>; 6]>,
        model: Mat4,
        cast_shadow: bool,
        receive_shadow: bool,
    ) {
        let drawable = Drawable {
            mesh: GpuMesh::new(&self.device, label, mesh),
            materials,
            object: ObjectBinding::new(&self.device, &self.object_bgl, model, receive_shadow),
            cast_shadow,
        };
        self.drawables.push(drawable);
    }

    #[inline]
    pub fn has_sprite(&self) -> bool {
        self.sprite.is_some()
    }

    /// Place the billboard, replacing any previous one.
    pub fn set_sprite(&mut self, material: Rc<GpuMaterial>, center: Vec3, scale: Vec2) {
        let model = Mat4::from_translation(center) * Mat4::from_scale(scale.extend(1.0));
        self.sprite = Some(Sprite {
            material,
            object: ObjectBinding::new(&self.device, &self.object_bgl, model, false),
        });
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            self.targets.recreate(&self.device, width, height);
            self.bg_post = post::bind_source(&self.device, &self.post, &self.targets.hdr_view);
        }
    }

    pub fn render(&mut self, camera: &OrbitCamera, rig: &Rig) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });

        let scene = SceneUniform::new(camera, rig);
        self.queue
            .write_buffer(&self.scene_uniform, 0, bytemuck::bytes_of(&scene));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: shadow map from the key light
        let light_view_proj = rig.shadow_caster().and_then(|l| l.shadow_view_proj());
        self.shadow
            .encode(&self.queue, &mut encoder, light_view_proj, &self.drawables);

        // Pass 2: lit meshes then sprites into the multisampled HDR target
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&self.targets.hdr_view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bg, &[]);

            rpass.set_pipeline(&self.mesh_pipeline);
            for d in &self.drawables {
                rpass.set_bind_group(2, &d.object.bind_group, &[]);
                rpass.set_vertex_buffer(0, d.mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(d.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                for group in d.ranges() {
                    let Some(mat) = d.material_for(&group) else {
                        continue;
                    };
                    rpass.set_bind_group(1, &mat.bind_group, &[]);
                    rpass.draw_indexed(group.start..group.start + group.count, 0, 0..1);
                }
            }

            if let Some(sprite) = &self.sprite {
                rpass.set_pipeline(&self.sprite_pipeline);
                rpass.set_bind_group(1, &sprite.material.bind_group, &[]);
                rpass.set_bind_group(2, &sprite.object.bind_group, &[]);
                rpass.draw(0..6, 0..1);
            }
        }

        // Pass 3: tone map to the swapchain
        post::blit(
            &mut encoder,
            "tonemap",
            &view,
            wgpu::Color::BLACK,
            &self.post.tonemap_pipeline,
            &self.bg_post,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Re-acquire the swapchain after it was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

fn scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    label: &str,
    (vs_entry, fs_entry): (&str, &str),
    buffers: &[wgpu::VertexBufferLayout<'_>],
    blend: Option<wgpu::BlendState>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: MSAA_SAMPLES,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
