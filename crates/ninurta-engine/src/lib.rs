//! Ninurta engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the demo: window and event
//! loop, surface/device setup, keyboard state, and the small set of GPU
//! resources (shader program, meshes, circle shape) a frame draws with.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
