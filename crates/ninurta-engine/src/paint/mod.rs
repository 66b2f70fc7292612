//! Colour model shared between the demo and renderers.

pub mod color;

pub use color::Color;
