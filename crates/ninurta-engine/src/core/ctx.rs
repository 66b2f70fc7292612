use winit::window::Window;

use crate::device::{Gpu, SurfaceFault};
use crate::input::InputState;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Everything `App::on_frame` may touch during one frame.
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    /// Frames rendered before this one.
    pub frame_index: u64,
}

impl FrameCtx<'_, '_> {
    /// Handles for building GPU resources, e.g. on the first frame.
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx {
            device: self.gpu.device(),
            queue: self.gpu.queue(),
            surface_format: self.gpu.surface_format(),
        }
    }

    /// Records one frame through `draw` and presents it.
    ///
    /// The target starts out cleared to `clear`. A frame whose image cannot
    /// be acquired is skipped; only an unrecoverable surface asks for exit.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(SurfaceFault::Fatal) => {
                log::error!("swapchain is out of memory; stopping");
                return AppControl::Exit;
            }
            Err(_) => return AppControl::Continue,
        };

        let rctx = self.render_ctx();
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view, clear);
        draw(&rctx, &mut target);
        target.finish();

        self.window.pre_present_notify();
        self.gpu.submit(frame);
        AppControl::Continue
    }
}
