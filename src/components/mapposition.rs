//! World-space position component.
//!
//! Positions are whole pixels. Movement adds the entity's speed once per
//! frame on each active axis, so there is no fractional part to keep.

use bevy_ecs::prelude::Component;

/// Top-left corner of an entity in world pixels.
///
/// `x` grows to the right and `y` grows downwards, matching raylib's screen
/// space. Values are unclamped and may go negative or leave the window.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPosition {
    pub x: i32,
    pub y: i32,
}

impl MapPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift the position by the given deltas, wrapping at the `i32` range.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }
}
