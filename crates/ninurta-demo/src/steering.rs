//! Keyboard-driven translation of the triangle group.

use ninurta_engine::coords::Vec2;
use ninurta_engine::input::{InputState, Key};

/// Offset change per frame while a direction key is held.
pub const STEP: f32 = 0.01;

/// Lowest allowed offset (x, y).
pub const MIN_OFFSET: Vec2 = Vec2::new(-0.9, -1.0);

/// Highest allowed offset (x, y).
pub const MAX_OFFSET: Vec2 = Vec2::new(0.4, 0.2);

/// Direction keys held during one frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Held {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
}

impl Held {
    /// Reads W/A/S/D from the current key state.
    pub fn from_input(input: &InputState) -> Self {
        Self {
            left: input.key_down(Key::A),
            right: input.key_down(Key::D),
            down: input.key_down(Key::S),
            up: input.key_down(Key::W),
        }
    }

    pub fn any(self) -> bool {
        self.left || self.right || self.down || self.up
    }
}

/// Accumulated translation, clamped to `[MIN_OFFSET, MAX_OFFSET]` after every step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Steering {
    offset: Vec2,
}

impl Default for Steering {
    fn default() -> Self {
        Self::new()
    }
}

impl Steering {
    pub const fn new() -> Self {
        Self { offset: Vec2::zero() }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Applies one frame of movement. Opposite keys cancel out.
    pub fn step(&mut self, held: Held) {
        if !held.any() {
            return;
        }

        let mut next = self.offset;
        if held.left {
            next.x -= STEP;
        }
        if held.right {
            next.x += STEP;
        }
        if held.down {
            next.y -= STEP;
        }
        if held.up {
            next.y += STEP;
        }

        self.offset = next.clamp(MIN_OFFSET, MAX_OFFSET);
    }
}
