//! Shapes built on [`Mesh`](super::Mesh).

pub mod circle;

pub use circle::{Circle, CircleGeometry, CircleStyle, DEFAULT_SEGMENTS, MIN_SEGMENTS};
