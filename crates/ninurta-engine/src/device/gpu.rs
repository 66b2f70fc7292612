use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::{self, SurfaceFault};

/// Surface and device settings chosen by the application.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format. `false` selects a `Unorm` one, so
    /// shader outputs are stored exactly as written.
    pub srgb: bool,

    /// `Fifo` waits for vblank and is what paces the frame loop.
    pub present_mode: wgpu::PresentMode,

    pub limits: wgpu::Limits,

    /// Frames the swapchain may queue ahead of the display.
    pub frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            limits: wgpu::Limits::downlevel_defaults(),
            frame_latency: 2,
        }
    }
}

/// One acquired swapchain image plus the encoder recording into it.
///
/// Handed back to [`Gpu::submit`], which submits the encoder and presents
/// the image.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// Device, queue and configured surface for a single window.
///
/// Borrows the window for `'w`; the runtime keeps both in one
/// self-referential entry.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    config: wgpu::SurfaceConfiguration,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl<'w> Gpu<'w> {
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let GpuInit { srgb, present_mode, limits, frame_latency } = init;

        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let (adapter, device, queue) = open_device(&instance, &surface, limits).await?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::pick_format(&caps.formats, srgb)
            .context("surface reports no texture formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode: surface::pick_alpha_mode(&caps.alpha_modes),
            view_formats: Vec::new(),
            desired_maximum_frame_latency: frame_latency,
        };
        surface.configure(&device, &config);

        let info = adapter.get_info();
        log::info!(
            "using {} via {:?} ({} {}); swapchain {format:?} {}x{}",
            info.name,
            info.backend,
            info.driver,
            info.driver_info,
            size.width,
            size.height,
        );

        Ok(Self { surface, config, device, queue })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Follows a window resize. A minimized (0x0) window keeps the old
    /// configuration until it has an area again.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            log::debug!("ignoring zero-area resize");
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquires the next swapchain image.
    ///
    /// On failure the surface is repaired if possible and the returned fault
    /// says whether the caller should retry next frame or give up.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceFault> {
        let surface_texture = self.surface.get_current_texture().map_err(|err| {
            let fault = SurfaceFault::from(&err);
            log::warn!("could not acquire swapchain image: {err} ({fault:?})");
            if fault == SurfaceFault::Reconfigure {
                self.surface.configure(&self.device, &self.config);
            }
            fault
        })?;

        let view = surface_texture.texture.create_view(&Default::default());
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("ninurta frame"),
        });

        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits the frame's commands, then presents its image.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit([encoder.finish()]);
        drop(view);
        surface_texture.present();
    }
}

async fn open_device(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
    limits: wgpu::Limits,
) -> Result<(wgpu::Adapter, wgpu::Device, wgpu::Queue)> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        })
        .await
        .context("no GPU adapter can present to this window")?;

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("ninurta device"),
            required_features: wgpu::Features::empty(),
            required_limits: limits,
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::default(),
            trace: wgpu::Trace::Off,
        })
        .await
        .context("GPU adapter refused to open a device")?;

    Ok((adapter, device, queue))
}
