use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// Vertex layout (24 bytes):
///
///  offset  0  position [f32; 3]   loc 0
///  offset 12  color    [f32; 3]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    /// Vertex at `(p.x, p.y, z)`.
    #[inline]
    pub fn at(p: Vec2, z: f32, color: Color) -> Self {
        Self::new([p.x, p.y, z], color.to_rgb_array())
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Per-mesh translation uniform (group 0, binding 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TranslationUniform {
    pub offset: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl TranslationUniform {
    #[inline]
    pub fn new(offset: Vec2) -> Self {
        Self {
            offset: [offset.x, offset.y],
            _pad: [0.0; 2],
        }
    }

    /// Minimum binding size for the uniform buffer.
    pub(crate) fn min_binding_size() -> Option<std::num::NonZeroU64> {
        std::num::NonZeroU64::new(std::mem::size_of::<Self>() as u64)
    }
}
