use wgpu::util::DeviceExt;

use crate::coords::Vec2;

use super::vertex::{TranslationUniform, Vertex};
use super::{RenderCtx, ShaderProgram};

/// Immutable GPU geometry plus its own translation uniform.
///
/// Vertex (and optional index) data is uploaded once at construction. Each
/// mesh owns a separate uniform buffer, so several meshes can be drawn with
/// different translations inside the same submission. All buffers are
/// released when the mesh is dropped.
pub struct Mesh {
    label: String,

    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,

    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,

    translation_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl Mesh {
    /// Uploads non-indexed geometry (drawn as a plain triangle list).
    pub fn new(
        ctx: &RenderCtx<'_>,
        program: &ShaderProgram,
        label: &str,
        vertices: &[Vertex],
    ) -> Self {
        Self::build(ctx, program, label, vertices, None)
    }

    /// Uploads indexed geometry; `indices` are triangle-list triples.
    pub fn indexed(
        ctx: &RenderCtx<'_>,
        program: &ShaderProgram,
        label: &str,
        vertices: &[Vertex],
        indices: &[u32],
    ) -> Self {
        Self::build(ctx, program, label, vertices, Some(indices))
    }

    fn build(
        ctx: &RenderCtx<'_>,
        program: &ShaderProgram,
        label: &str,
        vertices: &[Vertex],
        indices: Option<&[u32]>,
    ) -> Self {
        let vertex_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = indices.map(|indices| {
            ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} ibo")),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        let translation_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} translation ubo")),
            contents: bytemuck::bytes_of(&TranslationUniform::new(Vec2::zero())),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} bind group")),
            layout: program.bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: translation_ubo.as_entire_binding(),
            }],
        });

        log::debug!(
            "mesh `{label}` uploaded: {} vertices, {} indices",
            vertices.len(),
            indices.map_or(0, <[u32]>::len),
        );

        Self {
            label: label.to_string(),
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            index_buffer,
            index_count: indices.map_or(0, |i| i.len() as u32),
            translation_ubo,
            bind_group,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Stages the translation used by the next draw of this mesh.
    ///
    /// The write lands before the frame's command buffer executes.
    pub fn set_translation(&self, queue: &wgpu::Queue, offset: Vec2) {
        queue.write_buffer(
            &self.translation_ubo,
            0,
            bytemuck::bytes_of(&TranslationUniform::new(offset)),
        );
    }

    /// Binds this mesh's buffers and uniform, then issues the draw.
    ///
    /// The caller must have bound the program's pipeline on `pass`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        match &self.index_buffer {
            Some(ibo) => {
                pass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..self.index_count, 0, 0..1);
            }
            None => pass.draw(0..self.vertex_count, 0..1),
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        log::trace!("releasing mesh `{}`", self.label);
    }
}
