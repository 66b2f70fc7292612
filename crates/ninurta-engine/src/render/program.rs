use anyhow::{anyhow, ensure, Result};

use super::vertex::{TranslationUniform, Vertex};
use super::RenderCtx;

/// Built-in shader pair: position + color, shifted by a translation uniform.
pub const BASIC_WGSL: &str = include_str!("shaders/basic.wgsl");

/// Vertex stage entry point every program must define.
pub const VS_ENTRY: &str = "vs_main";

/// Fragment stage entry point every program must define.
pub const FS_ENTRY: &str = "fs_main";

/// Parses, validates and entry-point-checks a WGSL source on the CPU.
///
/// The error message is the rendered diagnostic (source excerpt + reason) and
/// is never empty. A source that passes is safe to hand to wgpu.
pub fn check_wgsl(source: &str) -> Result<()> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| anyhow!("shader compile failed:\n{}", e.emit_to_string(source)))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    );
    validator
        .validate(&module)
        .map_err(|e| anyhow!("shader validation failed:\n{}", e.emit_to_string(source)))?;

    for (stage, name) in [
        (naga::ShaderStage::Vertex, VS_ENTRY),
        (naga::ShaderStage::Fragment, FS_ENTRY),
    ] {
        ensure!(
            module
                .entry_points
                .iter()
                .any(|ep| ep.stage == stage && ep.name == name),
            "shader link failed: no {stage:?} entry point `{name}`"
        );
    }

    Ok(())
}

/// Runs [`check_wgsl`] and logs the diagnostic on failure.
///
/// Returns whether the source is usable.
fn compile_or_report(label: &str, source: &str) -> bool {
    match check_wgsl(source) {
        Ok(()) => {
            log::debug!("shader program `{label}` compiled");
            true
        }
        Err(e) => {
            log::error!("shader program `{label}`: {e:#}");
            false
        }
    }
}

/// The shader program every mesh is drawn with.
///
/// A source that fails to compile or link still yields a `ShaderProgram`:
/// the failure is logged, no pipeline exists, and [`ShaderProgram::bind`]
/// reports `false` so callers skip their draws.
pub struct ShaderProgram {
    label: String,
    bind_group_layout: wgpu::BindGroupLayout,
    pipeline: Option<wgpu::RenderPipeline>,
}

impl ShaderProgram {
    /// Builds the program from [`BASIC_WGSL`].
    pub fn basic(ctx: &RenderCtx<'_>) -> Self {
        Self::from_wgsl(ctx, "ninurta basic", BASIC_WGSL)
    }

    pub fn from_wgsl(ctx: &RenderCtx<'_>, label: &str, source: &str) -> Self {
        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("ninurta translation bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: TranslationUniform::min_binding_size(),
                    },
                    count: None,
                }],
            });

        let pipeline = compile_or_report(label, source)
            .then(|| build_pipeline(ctx, label, source, &bind_group_layout));

        Self {
            label: label.to_string(),
            bind_group_layout,
            pipeline,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// False when the source failed to compile or link.
    pub fn is_usable(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Layout of the per-mesh translation bind group (group 0).
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Sets the pipeline on `pass`. Returns `false` if there is none.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) -> bool {
        let Some(pipeline) = self.pipeline.as_ref() else { return false };
        pass.set_pipeline(pipeline);
        true
    }
}

fn build_pipeline(
    ctx: &RenderCtx<'_>,
    label: &str,
    source: &str,
    bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("ninurta pipeline layout"),
        bind_group_layouts: &[bind_group_layout],
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(VS_ENTRY),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(FS_ENTRY),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_shader_compiles_and_links() {
        check_wgsl(BASIC_WGSL).unwrap();
    }

    #[test]
    fn syntax_error_has_diagnostic() {
        let err = check_wgsl("@vertex fn vs_main( -> {").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("compile failed"));
        assert!(msg.lines().count() > 1, "expected a rendered diagnostic, got: {msg}");
    }

    #[test]
    fn type_error_is_reported() {
        let src = BASIC_WGSL.replace("return vec4<f32>(in.color, 1.0);", "return in.color;");
        let msg = format!("{:#}", check_wgsl(&src).unwrap_err());
        assert!(!msg.trim().is_empty());
    }

    #[test]
    fn missing_fragment_entry_fails_link() {
        let src = BASIC_WGSL.replace("fn fs_main", "fn fs_other");
        let msg = format!("{:#}", check_wgsl(&src).unwrap_err());
        assert!(msg.contains("link failed"));
        assert!(msg.contains(FS_ENTRY));
    }

    #[test]
    fn report_does_not_panic_on_garbage() {
        assert!(!compile_or_report("garbage", "this is not wgsl"));
        assert!(compile_or_report("basic", BASIC_WGSL));
    }
}
