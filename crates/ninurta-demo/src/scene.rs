//! The static scene: one triangle mesh and one circle.

use ninurta_engine::coords::Vec2;
use ninurta_engine::paint::Color;
use ninurta_engine::render::shapes::{Circle, CircleStyle};
use ninurta_engine::render::{Mesh, RenderCtx, RenderTarget, ShaderProgram, Vertex};

const BLUE: [f32; 3] = [0.2, 0.2, 0.8];
const OLIVE: [f32; 3] = [0.2, 0.2, 0.0];

/// Two triangles forming a square plus a roof on top, drawn as a plain list.
pub const TRIANGLES: [Vertex; 9] = [
    Vertex::new([0.5, 0.5, 0.0], BLUE),
    Vertex::new([0.0, 0.5, 0.0], BLUE),
    Vertex::new([0.5, 0.0, 0.0], BLUE),

    Vertex::new([0.0, 0.5, 0.0], BLUE),
    Vertex::new([0.5, 0.0, 0.0], BLUE),
    Vertex::new([0.0, 0.0, 0.0], BLUE),

    Vertex::new([0.6, 0.5, 0.0], OLIVE),
    Vertex::new([-0.1, 0.5, 0.0], OLIVE),
    Vertex::new([0.25, 0.8, 0.0], OLIVE),
];

/// Circle placement and look.
pub const CIRCLE_POSITION: Vec2 = Vec2::new(0.4, 0.4);
pub const CIRCLE_RADIUS: f32 = 0.2;
pub const CIRCLE_SEGMENTS: u32 = 4;
pub const CIRCLE_COLOR: Color = Color::WHITE;

fn circle_style() -> CircleStyle {
    CircleStyle {
        segments: CIRCLE_SEGMENTS,
        color: CIRCLE_COLOR,
        ..CircleStyle::new(CIRCLE_POSITION, CIRCLE_RADIUS)
    }
}

/// GPU resources for everything drawn each frame.
pub struct Scene {
    program: ShaderProgram,
    triangles: Mesh,
    circle: Circle,
}

impl Scene {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        let program = ShaderProgram::basic(ctx);
        if !program.is_usable() {
            log::warn!("shader program `{}` is unusable; frames will only clear", program.label());
        }

        let triangles = Mesh::new(ctx, &program, "triangles", &TRIANGLES);
        let circle = Circle::new(ctx, &program, circle_style());

        log::info!(
            "scene ready: {} triangle vertices, circle with {} segments",
            triangles.vertex_count(),
            circle.segments(),
        );

        Self { program, triangles, circle }
    }

    /// Draws the triangles shifted by `offset`, then the circle at its own position.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, offset: Vec2) {
        let mut pass = target.begin_pass("ninurta scene pass");
        if !self.program.bind(&mut pass) {
            return;
        }

        self.triangles.set_translation(ctx.queue, offset);
        self.triangles.draw(&mut pass);

        self.circle.draw(ctx, &mut pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_table_is_three_whole_triangles() {
        assert_eq!(TRIANGLES.len() % 3, 0);
        assert_eq!(TRIANGLES.len() / 3, 3);
    }

    #[test]
    fn square_is_blue_and_roof_is_olive() {
        assert!(TRIANGLES[..6].iter().all(|v| v.color == BLUE));
        assert!(TRIANGLES[6..].iter().all(|v| v.color == OLIVE));
    }

    #[test]
    fn circle_overrides_only_segments_and_color() {
        let style = circle_style();
        assert_eq!(style.position, CIRCLE_POSITION);
        assert_eq!(style.radius, CIRCLE_RADIUS);
        assert_eq!(style.segments, 4);
        assert_eq!(style.depth, 0.0);
        assert_eq!(style.geometry().triangles().count(), 4);
    }

    #[test]
    fn triangles_are_flat() {
        assert!(TRIANGLES.iter().all(|v| v.position[2] == 0.0));
    }
}
