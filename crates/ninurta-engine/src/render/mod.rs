//! GPU rendering subsystem.
//!
//! One shader program, meshes that own their buffers, and the circle shape
//! built on top of them. Each mesh owns its GPU resources and releases them
//! on drop.
//!
//! Convention:
//! - CPU geometry is already in NDC (+Y up).
//! - The vertex shader only adds a per-mesh translation uniform.

mod ctx;
mod mesh;
mod program;
mod vertex;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::Mesh;
pub use program::{check_wgsl, ShaderProgram, BASIC_WGSL, FS_ENTRY, VS_ENTRY};
pub use vertex::{TranslationUniform, Vertex};
