//! Player intent resource.
//!
//! [`PlayerInput`] is rebuilt from [`InputState`] at the start of every frame.
//! The movement controller then records in `movement` whether any direction
//! was applied, which gates animation stepping later in the same frame.

use bevy_ecs::prelude::Resource;

use crate::resources::input::InputState;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
    /// Edge-triggered: true only on the frame the key went down.
    pub toggle_fullscreen: bool,
    /// Set by the movement controller, never by sampling.
    pub movement: bool,
}

impl PlayerInput {
    /// Derive this frame's intent from raw key state.
    pub fn from_state(state: &InputState) -> Self {
        Self {
            right: state.direction_right.engaged(),
            left: state.direction_left.engaged(),
            up: state.direction_up.engaged(),
            down: state.direction_down.engaged(),
            toggle_fullscreen: state.fullscreen_toggle.just_pressed,
            movement: false,
        }
    }
}
