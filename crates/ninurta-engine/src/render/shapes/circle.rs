use std::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{Mesh, RenderCtx, ShaderProgram, Vertex};

/// Segment count used when the caller has no preference.
pub const DEFAULT_SEGMENTS: u32 = 36;

/// Fewest perimeter vertices that still enclose an area.
pub const MIN_SEGMENTS: u32 = 3;

/// CPU-side triangle fan approximating a circle.
///
/// Layout:
/// - vertex 0 is the center
/// - vertices `1..=segments` lie on the perimeter at angle `TAU * i / segments`,
///   counter-clockwise from +X
/// - triangle `k` is `(0, k + 1, k + 2)`, the last one wrapping to `(0, segments, 1)`
#[derive(Debug, Clone, PartialEq)]
pub struct CircleGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl CircleGeometry {
    pub fn new(center: Vec2, radius: f32, segments: u32, depth: f32, color: Color) -> Self {
        let segments = if segments < MIN_SEGMENTS {
            log::warn!("circle needs at least {MIN_SEGMENTS} segments, got {segments}; using {MIN_SEGMENTS}");
            MIN_SEGMENTS
        } else {
            segments
        };

        let mut vertices = Vec::with_capacity(segments as usize + 1);
        vertices.push(Vertex::at(center, depth, color));

        for i in 0..segments {
            let theta = TAU * i as f32 / segments as f32;
            vertices.push(Vertex::at(center + Vec2::from_angle(theta) * radius, depth, color));
        }

        let mut indices = Vec::with_capacity(segments as usize * 3);
        for k in 1..=segments {
            let next = if k == segments { 1 } else { k + 1 };
            indices.extend_from_slice(&[0, k, next]);
        }

        Self { vertices, indices }
    }

    /// Number of perimeter vertices.
    pub fn segments(&self) -> u32 {
        self.vertices.len().saturating_sub(1) as u32
    }

    /// Index triples, one per fan triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Placement and look of a [`Circle`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleStyle {
    pub position: Vec2,
    /// Vertex z; values outside `[0, 1]` are clipped.
    pub depth: f32,
    pub radius: f32,
    pub segments: u32,
    pub color: Color,
}

impl CircleStyle {
    /// White, flat, [`DEFAULT_SEGMENTS`] segments.
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            depth: 0.0,
            radius,
            segments: DEFAULT_SEGMENTS,
            color: Color::WHITE,
        }
    }

    /// Fan around the local origin; `position` is applied at draw time.
    pub fn geometry(&self) -> CircleGeometry {
        CircleGeometry::new(Vec2::zero(), self.radius, self.segments, self.depth, self.color)
    }
}

/// A filled circle with its own mesh, drawn translated to its position.
pub struct Circle {
    position: Vec2,
    segments: u32,
    mesh: Mesh,
}

impl Circle {
    pub fn new(ctx: &RenderCtx<'_>, program: &ShaderProgram, style: CircleStyle) -> Self {
        let geometry = style.geometry();
        let mesh = Mesh::indexed(ctx, program, "circle", &geometry.vertices, &geometry.indices);

        Self {
            position: style.position,
            segments: geometry.segments(),
            mesh,
        }
    }

    /// Perimeter vertices actually generated (after the minimum is applied).
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Uploads the circle's translation and draws its fan.
    ///
    /// The program's pipeline must already be bound on `pass`.
    pub fn draw(&self, ctx: &RenderCtx<'_>, pass: &mut wgpu::RenderPass<'_>) {
        self.mesh.set_translation(ctx.queue, self.position);
        self.mesh.draw(pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan(segments: u32) -> CircleGeometry {
        CircleGeometry::new(Vec2::zero(), 1.0, segments, 0.0, Color::WHITE)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_and_triangle_counts() {
        for segments in [3, 4, 5, 36, 100, 257] {
            let g = fan(segments);
            assert_eq!(g.vertices.len(), segments as usize + 1);
            assert_eq!(g.indices.len(), segments as usize * 3);
            assert_eq!(g.triangles().count(), segments as usize);
            assert_eq!(g.segments(), segments);
        }
    }

    #[test]
    fn style_defaults_to_36_segments() {
        let g = CircleStyle::new(Vec2::new(0.4, 0.4), 0.2).geometry();
        assert_eq!(g.vertices.len(), 37);
        assert_eq!(g.triangles().count(), 36);
        assert_eq!(g.triangles().last(), Some([0, 36, 1]));
    }

    #[test]
    fn style_geometry_is_centered_on_origin() {
        let style = CircleStyle { segments: 4, ..CircleStyle::new(Vec2::new(0.4, 0.4), 0.2) };
        let g = style.geometry();
        assert_eq!(g.vertices[0].position, [0.0, 0.0, 0.0]);
        assert!(close(g.vertices[1].position[0], 0.2));
        assert_eq!(g.segments(), 4);
    }

    #[test]
    fn too_few_segments_is_raised_to_minimum() {
        for segments in [0, 1, 2] {
            let g = fan(segments);
            assert_eq!(g.segments(), MIN_SEGMENTS);
            assert_eq!(g.triangles().count(), MIN_SEGMENTS as usize);
        }
    }

    // ── topology ──────────────────────────────────────────────────────────

    #[test]
    fn every_triangle_is_center_plus_adjacent_pair() {
        for segments in [3, 4, 36] {
            let g = fan(segments);
            for (k, tri) in g.triangles().enumerate() {
                let k = k as u32;
                assert_eq!(tri[0], 0);
                assert_eq!(tri[1], k + 1);
                let expected_next = if k + 1 == segments { 1 } else { k + 2 };
                assert_eq!(tri[2], expected_next);
            }
        }
    }

    #[test]
    fn last_triangle_wraps_to_first_perimeter_vertex() {
        let g = fan(4);
        assert_eq!(g.triangles().last(), Some([0, 4, 1]));
    }

    #[test]
    fn indices_stay_in_range() {
        let g = fan(36);
        assert!(g.indices.iter().all(|&i| (i as usize) < g.vertices.len()));
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn center_vertex_is_first() {
        let g = CircleGeometry::new(Vec2::new(0.4, 0.4), 0.2, 8, 0.5, Color::WHITE);
        assert_eq!(g.vertices[0].position, [0.4, 0.4, 0.5]);
    }

    #[test]
    fn perimeter_vertices_sit_on_radius() {
        let center = Vec2::new(-0.3, 0.1);
        let g = CircleGeometry::new(center, 0.2, 12, 0.0, Color::WHITE);
        for v in &g.vertices[1..] {
            let dx = v.position[0] - center.x;
            let dy = v.position[1] - center.y;
            assert!(close((dx * dx + dy * dy).sqrt(), 0.2));
        }
    }

    #[test]
    fn perimeter_starts_on_positive_x_and_runs_ccw() {
        let g = fan(4);
        let p = |i: usize| (g.vertices[i].position[0], g.vertices[i].position[1]);

        assert!(close(p(1).0, 1.0) && close(p(1).1, 0.0));
        assert!(close(p(2).0, 0.0) && close(p(2).1, 1.0));
        assert!(close(p(3).0, -1.0) && close(p(3).1, 0.0));
        assert!(close(p(4).0, 0.0) && close(p(4).1, -1.0));
    }

    #[test]
    fn all_vertices_carry_color_and_depth() {
        let color = Color::rgb(0.1, 0.2, 0.3);
        let g = CircleGeometry::new(Vec2::zero(), 1.0, 6, -0.25, color);
        for v in &g.vertices {
            assert_eq!(v.color, [0.1, 0.2, 0.3]);
            assert_eq!(v.position[2], -0.25);
        }
    }
}
