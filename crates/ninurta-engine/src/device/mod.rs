//! Window surface and device.
//!
//! [`Gpu`] opens the device for one window and hands out frames; `surface`
//! holds the format choice and the recovery policy for a failed acquire.

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit};
pub use surface::SurfaceFault;
