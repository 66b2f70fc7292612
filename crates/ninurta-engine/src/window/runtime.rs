use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::InputState;

/// Window title and size.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "ninurta".to_string(),
            initial_size: LogicalSize::new(1600.0, 900.0),
        }
    }
}

/// How the runtime reacts to a window event, after input has been recorded.
#[derive(Debug, Copy, Clone, PartialEq)]
enum WindowAction {
    Close,
    Resize(PhysicalSize<u32>),
    /// DPI changed; the new size is read back from the window.
    Rescale,
    Redraw,
    Ignore,
}

fn window_action(event: &WindowEvent) -> WindowAction {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => WindowAction::Close,
        WindowEvent::Resized(size) => WindowAction::Resize(*size),
        WindowEvent::ScaleFactorChanged { .. } => WindowAction::Rescale,
        WindowEvent::RedrawRequested => WindowAction::Redraw,
        _ => WindowAction::Ignore,
    }
}

/// Runs a single-window app until it exits or its window is closed.
pub struct Runtime;

impl Runtime {
    /// Fails if the event loop, the window or the GPU device cannot be set
    /// up; a normal close is `Ok(())`.
    pub fn run<A: App + 'static>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let mut driver = Driver {
            config,
            gpu_init,
            app,
            surface: None,
            startup_error: None,
            closing: false,
        };
        event_loop
            .run_app(&mut driver)
            .context("winit event loop terminated with error")?;

        driver.startup_error.map_or(Ok(()), Err)
    }
}

#[self_referencing]
struct Surface {
    input: InputState,
    frames: u64,
    window: Window,
    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl Surface {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, gpu_init: GpuInit) -> Result<Self> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(config.title.as_str())
                    .with_inner_size(config.initial_size),
            )
            .context("failed to create window")?;

        SurfaceTryBuilder {
            input: InputState::default(),
            frames: 0,
            window,
            gpu_builder: |window| pollster::block_on(Gpu::new(window, gpu_init)),
        }
            .try_build()
    }
}

struct Driver<A: App> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    surface: Option<Surface>,
    startup_error: Option<anyhow::Error>,
    closing: bool,
}

impl<A: App> Driver<A> {
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.closing = true;
        // GPU handles go before the window they borrow.
        self.surface = None;
        event_loop.exit();
    }

    fn frame(&mut self) -> AppControl {
        let Some(surface) = self.surface.as_mut() else { return AppControl::Continue };
        let app = &mut self.app;

        surface.with_mut(|s| {
            let mut ctx = FrameCtx {
                window: s.window,
                gpu: s.gpu,
                input: &*s.input,
                frame_index: *s.frames,
            };
            let control = app.on_frame(&mut ctx);
            *s.frames += 1;
            control
        })
    }
}

impl<A: App> ApplicationHandler for Driver<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() || self.closing {
            return;
        }

        match Surface::open(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(surface) => {
                surface.borrow_window().request_redraw();
                self.surface = Some(surface);
            }
            Err(err) => {
                log::error!("startup failed: {err:#}");
                self.startup_error = Some(err);
                self.close(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Redraw continuously; FIFO presentation blocks at vblank.
        if let Some(surface) = &self.surface {
            surface.borrow_window().request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.closing {
            return;
        }

        if let (Some(surface), Some(input)) = (self.surface.as_mut(), translate_window_event(&event)) {
            surface.with_input_mut(|state| state.apply_event(&input));
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.close(event_loop);
            return;
        }

        match window_action(&event) {
            WindowAction::Close => {
                log::info!("window closed");
                self.close(event_loop);
            }
            WindowAction::Resize(size) => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.with_gpu_mut(|gpu| gpu.resize(size));
                }
            }
            WindowAction::Rescale => {
                if let Some(surface) = self.surface.as_mut() {
                    let size = surface.borrow_window().inner_size();
                    surface.with_gpu_mut(|gpu| gpu.resize(size));
                }
            }
            WindowAction::Redraw => {
                if self.frame() == AppControl::Exit {
                    log::info!("app asked to exit");
                    self.close(event_loop);
                }
            }
            WindowAction::Ignore => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_request_closes() {
        assert_eq!(window_action(&WindowEvent::CloseRequested), WindowAction::Close);
        assert_eq!(window_action(&WindowEvent::Destroyed), WindowAction::Close);
    }

    #[test]
    fn resize_carries_new_size() {
        let size = PhysicalSize::new(800, 600);
        assert_eq!(window_action(&WindowEvent::Resized(size)), WindowAction::Resize(size));
    }

    #[test]
    fn redraw_drives_a_frame() {
        assert_eq!(window_action(&WindowEvent::RedrawRequested), WindowAction::Redraw);
    }

    #[test]
    fn input_events_do_not_close() {
        assert_eq!(window_action(&WindowEvent::Focused(true)), WindowAction::Ignore);
        assert_eq!(window_action(&WindowEvent::Focused(false)), WindowAction::Ignore);
    }
}
