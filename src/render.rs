use crate::constants::*;
use crate::core::{ObjectPose, PathTable, PulseInstance, ScenePoses};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use web_sys as web;

// ===================== WebGPU render sink =====================
//
// Two pipelines over one uniform layout: a line-list pass for the wire
// lattice and an instanced-quad pass for pulses and object sprites. Pulses
// ride the circuit-group transform; object sprites use the plain camera.

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    mvp: [[f32; 4]; 4],
    tint: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SpriteInstance {
    pos: [f32; 3],
    scale: f32,
    color: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    line_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,
    circuit_uniforms: wgpu::Buffer,
    scene_uniforms: wgpu::Buffer,
    circuit_bind_group: wgpu::BindGroup,
    scene_bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    wire_vb: wgpu::Buffer,
    wire_vertex_count: u32,
    pulse_instance_vb: wgpu::Buffer,
    sprite_instance_vb: wgpu::Buffer,
    pulse_scratch: Vec<SpriteInstance>,
    width: u32,
    height: u32,
}

const SHADER_SRC: &str = r#"
struct Uniforms {
  mvp: mat4x4<f32>,
  tint: vec4<f32>,
};
@group(0) @binding(0) var<uniform> u: Uniforms;

struct LineOut {
  @builtin(position) pos: vec4<f32>,
};

@vertex
fn vs_line(@location(0) v_pos: vec3<f32>) -> LineOut {
  var out: LineOut;
  out.pos = u.mvp * vec4<f32>(v_pos, 1.0);
  return out;
}

@fragment
fn fs_line(inf: LineOut) -> @location(0) vec4<f32> {
  return u.tint;
}

struct SpriteOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) color: vec4<f32>,
  @location(1) local: vec2<f32>,
};

@vertex
fn vs_sprite(
  @location(0) v_pos: vec2<f32>,
  @location(1) i_pos: vec3<f32>,
  @location(2) i_scale: f32,
  @location(3) i_color: vec4<f32>,
) -> SpriteOut {
  let world = vec4<f32>(i_pos + vec3<f32>(v_pos * i_scale, 0.0), 1.0);
  var out: SpriteOut;
  out.pos = u.mvp * world;
  out.color = i_color;
  out.local = v_pos; // unscaled local for shape mask
  return out;
}

@fragment
fn fs_sprite(inf: SpriteOut) -> @location(0) vec4<f32> {
  // Circular mask within the quad (unit circle of radius 0.5)
  let r = length(inf.local);
  let shape_alpha = 1.0 - smoothstep(0.48, 0.5, r);
  return vec4<f32>(inf.color.rgb, shape_alpha * inf.color.a);
}
"#;

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        paths: &PathTable,
        pulse_capacity: usize,
    ) -> anyhow::Result<Self> {
        use wgpu::util::DeviceExt;

        let width = canvas.width();
        let height = canvas.height();

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
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });

        let circuit_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("circuit_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Quad vertex buffer (two triangles)
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Static wire geometry, two endpoints per segment
        let wire_vertices: Vec<[f32; 3]> = paths
            .segments()
            .iter()
            .flat_map(|s| [s.start.to_array(), s.end.to_array()])
            .collect();
        let wire_vertex_count = wire_vertices.len() as u32;
        let wire_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("wire_vb"),
            contents: bytemuck::cast_slice(&wire_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let pulse_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pulse_instance_vb"),
            size: (std::mem::size_of::<SpriteInstance>() * pulse_capacity.max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let sprite_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_instance_vb"),
            size: (std::mem::size_of::<SpriteInstance>() * SPRITE_CAPACITY) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let circuit_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("circuit_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: circuit_uniforms.as_entire_binding(),
            }],
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniforms.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let line_buffers = [wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        }];
        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_line"),
                buffers: &line_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..wgpu::PrimitiveState::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let sprite_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SpriteInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let sprite_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sprite"),
                buffers: &sprite_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sprite"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            line_pipeline,
            sprite_pipeline,
            circuit_uniforms,
            scene_uniforms,
            circuit_bind_group,
            scene_bind_group,
            quad_vb,
            wire_vb,
            wire_vertex_count,
            pulse_instance_vb,
            sprite_instance_vb,
            pulse_scratch: Vec::with_capacity(pulse_capacity),
            width,
            height,
        })
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
        }
    }

    fn view_proj(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(
            CAMERA_FOVY_DEG.to_radians(),
            aspect,
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        );
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        proj * view
    }

    pub fn render(
        &mut self,
        poses: &ScenePoses,
        pulses: &[PulseInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let view_proj = self.view_proj();
        self.queue.write_buffer(
            &self.circuit_uniforms,
            0,
            bytemuck::bytes_of(&Uniforms {
                mvp: (view_proj * poses.circuit.matrix()).to_cols_array_2d(),
                tint: WIRE_COLOR,
            }),
        );
        self.queue.write_buffer(
            &self.scene_uniforms,
            0,
            bytemuck::bytes_of(&Uniforms {
                mvp: view_proj.to_cols_array_2d(),
                tint: [1.0, 1.0, 1.0, 1.0],
            }),
        );

        // Pulse instances, rewritten into the reusable scratch buffer
        self.pulse_scratch.clear();
        self.pulse_scratch
            .extend(pulses.iter().map(|p| SpriteInstance {
                pos: p.position.to_array(),
                scale: p.scale * PULSE_SPRITE_SIZE,
                color: ACCENT_COLOR,
            }));
        if !self.pulse_scratch.is_empty() {
            self.queue.write_buffer(
                &self.pulse_instance_vb,
                0,
                bytemuck::cast_slice(&self.pulse_scratch),
            );
        }

        // Visible object sprites
        let mut sprites: SmallVec<[SpriteInstance; SPRITE_CAPACITY]> = SmallVec::new();
        for (pose, color) in [
            (&poses.particles, PARTICLE_COLOR),
            (&poses.sweep, SWEEP_COLOR),
            (&poses.ring_outer, RING_COLOR),
            (&poses.ring_inner, RING_COLOR),
            (&poses.core, ACCENT_COLOR),
            (&poses.drone, DRONE_COLOR),
        ] {
            push_sprite(&mut sprites, pose, color);
        }
        if !sprites.is_empty() {
            self.queue
                .write_buffer(&self.sprite_instance_vb, 0, bytemuck::cast_slice(&sprites));
        }

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rpass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: CLEAR_COLOR[0],
                        g: CLEAR_COLOR[1],
                        b: CLEAR_COLOR[2],
                        a: CLEAR_COLOR[3],
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        // Wires and pulses ride the circuit-group transform
        if self.wire_vertex_count > 0 {
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_bind_group(0, &self.circuit_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.wire_vb.slice(..));
            rpass.draw(0..self.wire_vertex_count, 0..1);
        }
        if !self.pulse_scratch.is_empty() {
            rpass.set_pipeline(&self.sprite_pipeline);
            rpass.set_bind_group(0, &self.circuit_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.pulse_instance_vb.slice(..));
            rpass.draw(0..6, 0..self.pulse_scratch.len() as u32);
        }
        if !sprites.is_empty() {
            rpass.set_pipeline(&self.sprite_pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.sprite_instance_vb.slice(..));
            rpass.draw(0..6, 0..sprites.len() as u32);
        }
        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn push_sprite(
    sprites: &mut SmallVec<[SpriteInstance; SPRITE_CAPACITY]>,
    pose: &ObjectPose,
    color: [f32; 4],
) {
    if !pose.visible || pose.scale.x <= 0.0 {
        return;
    }
    sprites.push(SpriteInstance {
        pos: pose.position.to_array(),
        scale: pose.scale.x,
        color,
    });
}
