//! Single lit box: mesh generation, uniforms, and the draw pass.

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::{
    camera::{Camera, CameraUniform},
    gpu::render_context::RenderContext,
    options::SceneOptions,
};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Interleaved position + normal vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Outward face normal.
    pub normal: [f32; 3],
}

impl BoxVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Light and material parameters, laid out for the `Scene` WGSL struct.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniform {
    box_color: [f32; 3],
    ambient: f32,
    key_dir: [f32; 3],
    key_intensity: f32,
    fill_dir: [f32; 3],
    fill_intensity: f32,
    top_dir: [f32; 3],
    top_intensity: f32,
    top_color: [f32; 3],
    _pad: f32,
}

impl From<&SceneOptions> for SceneUniform {
    fn from(scene: &SceneOptions) -> Self {
        Self {
            box_color: scene.box_color,
            ambient: scene.ambient,
            key_dir: scene.key_light_dir,
            key_intensity: scene.key_light_intensity,
            fill_dir: scene.fill_light_dir,
            fill_intensity: scene.fill_light_intensity,
            top_dir: scene.top_light_dir,
            top_intensity: scene.top_light_intensity,
            top_color: scene.top_light_color,
            _pad: 0.0,
        }
    }
}

/// Build an axis-aligned cube of edge `size` centered at the origin.
///
/// Each face has its own four vertices so normals stay flat. Triangles
/// wind counter-clockwise seen from outside.
#[must_use]
pub fn box_mesh(size: f32) -> (Vec<BoxVertex>, Vec<u16>) {
    // (normal, u, v) with u × v = normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let h = size * 0.5;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face, (n, u, v)) in faces.into_iter().enumerate() {
        let base = (face * 4) as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (n + u * su + v * sv) * h;
            vertices.push(BoxVertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
        indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }
    (vertices, indices)
}

/// Convert a linear RGB triple to a wgpu clear color.
#[must_use]
pub fn clear_color(rgb: [f32; 3]) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(rgb[0]),
        g: f64::from(rgb[1]),
        b: f64::from(rgb[2]),
        a: 1.0,
    }
}

/// Pipeline, buffers, and depth target for drawing the box.
pub struct BoxPass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    box_size: f32,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    scene_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    clear: wgpu::Color,
}

impl BoxPass {
    /// Create the pipeline and upload the box mesh for `scene`.
    #[must_use]
    pub fn new(context: &RenderContext, scene: &SceneOptions) -> Self {
        let device = &context.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/box.wgsl"
        ));

        let camera_uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::bytes_of(&camera_uniform),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let scene_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Buffer"),
                contents: bytemuck::bytes_of(&SceneUniform::from(scene)),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Box Bind Group Layout"),
                entries: &[uniform_entry(0), uniform_entry(1)],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Box Bind Group"),
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: scene_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Box Pipeline Layout"),
                bind_group_layouts: &[&layout],
                push_constant_ranges: &[],
            });
        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Box Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[BoxVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        let (vertex_buffer, index_buffer, index_count) =
            upload_mesh(device, scene.box_size);

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count,
            box_size: scene.box_size,
            camera_uniform,
            camera_buffer,
            scene_buffer,
            bind_group,
            depth_view: create_depth_view(context),
            clear: clear_color(scene.background),
        }
    }

    /// Apply new scene options: lights, colors, and box size.
    pub fn set_scene(&mut self, context: &RenderContext, scene: &SceneOptions) {
        context.queue.write_buffer(
            &self.scene_buffer,
            0,
            bytemuck::bytes_of(&SceneUniform::from(scene)),
        );
        if scene.box_size != self.box_size {
            let (vertex_buffer, index_buffer, index_count) =
                upload_mesh(&context.device, scene.box_size);
            self.vertex_buffer = vertex_buffer;
            self.index_buffer = index_buffer;
            self.index_count = index_count;
            self.box_size = scene.box_size;
        }
        self.clear = clear_color(scene.background);
    }

    /// Upload this frame's camera and object rotation.
    pub fn update(
        &mut self,
        context: &RenderContext,
        camera: &Camera,
        model: Mat4,
    ) {
        self.camera_uniform.update(camera, model);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&self.camera_uniform),
        );
    }

    /// Recreate the depth target after a surface resize.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth_view = create_depth_view(context);
    }

    /// Clear `target` and draw the box into it.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Box Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint16,
        );
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Vertex+fragment-visible uniform buffer binding.
fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn upload_mesh(
    device: &wgpu::Device,
    size: f32,
) -> (wgpu::Buffer, wgpu::Buffer, u32) {
    let (vertices, indices) = box_mesh(size);
    let vertex_buffer =
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Box Vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
    let index_buffer =
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Box Indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
    (vertex_buffer, index_buffer, indices.len() as u32)
}

fn create_depth_view(context: &RenderContext) -> wgpu::TextureView {
    let texture = context.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: context.config.width,
            height: context.config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_flat_faces() {
        let (vertices, indices) = box_mesh(2.0);
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn corners_sit_at_half_size() {
        let (vertices, _) = box_mesh(3.0);
        for v in &vertices {
            for c in v.position {
                assert!((c.abs() - 1.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn triangles_wind_outward() {
        let (vertices, indices) = box_mesh(2.0);
        for tri in indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|i| Vec3::from_array(vertices[i as usize].position));
            let n = Vec3::from_array(vertices[tri[0] as usize].normal);
            assert!((b - a).cross(c - a).dot(n) > 0.0);
            assert!(a.dot(n) > 0.0);
        }
    }

    #[test]
    fn clear_color_widens_channels() {
        let c = clear_color([0.25, 0.5, 1.0]);
        assert_eq!((c.r, c.g, c.b, c.a), (0.25, 0.5, 1.0, 1.0));
    }
}
