use crate::paint::Color;

/// Device handles a renderer needs to create and update resources.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
}

/// The frame's color target.
///
/// The first pass begun on it clears to the frame's clear color; later
/// passes load what is already there.
pub struct RenderTarget<'a> {
    encoder: &'a mut wgpu::CommandEncoder,
    color_view: &'a wgpu::TextureView,
    pending_clear: Option<Color>,
}

impl<'a> RenderTarget<'a> {
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        clear: Color,
    ) -> Self {
        Self { encoder, color_view, pending_clear: Some(clear) }
    }

    pub fn begin_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        let load = load_op(self.pending_clear.take());

        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations { load, store: wgpu::StoreOp::Store },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }

    /// Clears the target if nothing has drawn to it yet.
    pub(crate) fn finish(mut self) {
        if self.pending_clear.is_some() {
            drop(self.begin_pass("ninurta clear"));
        }
    }
}

fn load_op(clear: Option<Color>) -> wgpu::LoadOp<wgpu::Color> {
    match clear {
        Some(color) => wgpu::LoadOp::Clear(color.to_wgpu()),
        None => wgpu::LoadOp::Load,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_clear_becomes_clear_op() {
        let op = load_op(Some(Color::rgb(1.0, 0.0, 0.5)));
        assert!(matches!(op, wgpu::LoadOp::Clear(c) if c.r == 1.0 && c.b == 0.5));
    }

    #[test]
    fn later_passes_load() {
        assert!(matches!(load_op(None), wgpu::LoadOp::Load));
    }
}
