//! Animation cadence system.
//!
//! [`animation_cadence`] counts rendered frames on the
//! [`FrameCounter`] resource. Each time the counter reaches its threshold it
//! resets, and if the player moved this frame every input-controlled
//! entity's [`AnimationFrame`] steps forward. A player standing still keeps
//! showing its current frame.
use bevy_ecs::prelude::*;

use crate::components::animation::AnimationFrame;
use crate::components::inputcontrolled::InputControlled;
use crate::resources::framecounter::FrameCounter;
use crate::resources::playerinput::PlayerInput;

/// Count one frame and step player animations when the cadence fires.
pub fn animation_cadence(
    mut counter: ResMut<FrameCounter>,
    input: Res<PlayerInput>,
    mut query: Query<&mut AnimationFrame, With<InputControlled>>,
) {
    if !counter.tick() {
        return;
    }
    if input.movement {
        for mut frame in query.iter_mut() {
            frame.advance();
        }
    }
}
