mod app;
mod scene;
mod steering;

use ninurta_engine::device::GpuInit;
use ninurta_engine::logging::{init_logging, LoggingConfig};
use ninurta_engine::window::{Runtime, RuntimeConfig};

use crate::app::DemoApp;

fn main() {
    init_logging(LoggingConfig::quiet_gpu());

    log::info!("ninurta demo: W/A/S/D move the triangles, Escape quits");

    let gpu_init = GpuInit {
        // Write colors to the framebuffer unconverted.
        srgb: false,
        ..GpuInit::default()
    };

    if let Err(e) = Runtime::run(RuntimeConfig::default(), gpu_init, DemoApp::new()) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }

    log::info!("bye");
}
