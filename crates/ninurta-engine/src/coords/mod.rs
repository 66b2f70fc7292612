//! Coordinate types shared by the renderers and the demo.
//!
//! Canonical space is normalized device coordinates:
//! - origin at the window center
//! - +X right, +Y up
//! - the visible range is [-1, 1] on both axes

mod vec2;

pub use vec2::Vec2;
