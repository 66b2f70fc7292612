//! The frame loop.

use ninurta_engine::core::{App, AppControl, FrameCtx};
use ninurta_engine::input::{InputState, Key};
use ninurta_engine::paint::Color;

use crate::scene::Scene;
use crate::steering::{Held, Steering};

/// Background: rgb(120, 0, 120).
pub const CLEAR_COLOR: Color = Color::rgb(120.0 / 255.0, 0.0, 120.0 / 255.0);

/// What the frame should do after reading input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tick {
    Draw,
    Quit,
}

/// Input-driven state, kept apart from GPU resources.
#[derive(Debug, Default)]
pub struct Controls {
    pub steering: Steering,
}

impl Controls {
    /// Advances one frame of input handling.
    ///
    /// Escape wins over movement: nothing moves on the frame that quits.
    pub fn tick(&mut self, input: &InputState) -> Tick {
        if input.key_down(Key::Escape) {
            return Tick::Quit;
        }

        self.steering.step(Held::from_input(input));
        Tick::Draw
    }
}

/// Demo application: builds the scene on the first frame, then steers and draws.
#[derive(Default)]
pub struct DemoApp {
    controls: Controls,
    scene: Option<Scene>,
}

impl DemoApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.controls.tick(ctx.input) == Tick::Quit {
            log::info!("escape pressed after {} frames", ctx.frame_index);
            return AppControl::Exit;
        }

        let offset = self.controls.steering.offset();
        if ctx.frame_index % 600 == 0 {
            log::debug!("frame {}: offset ({:.2}, {:.2})", ctx.frame_index, offset.x, offset.y);
        }

        let scene = self.scene.get_or_insert_with(|| Scene::new(&ctx.render_ctx()));

        ctx.render(CLEAR_COLOR, |rctx, target| scene.draw(rctx, target, offset))
    }
}
