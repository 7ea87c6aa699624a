//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`InputState`].
//! - [`sample_player_input`] turns that raw state into the frame's
//!   [`PlayerInput`] intent and fires a
//!   [`SwitchFullScreenEvent`] when the fullscreen key goes down.
use bevy_ecs::prelude::*;

use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::input::InputState;
use crate::resources::playerinput::PlayerInput;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    for key in input.keys_mut() {
        key.active = rl.is_key_down(key.key_binding);
        key.just_pressed = rl.is_key_pressed(key.key_binding);
    }
}

/// Rebuild the player's intent for this frame.
pub fn sample_player_input(
    input: Res<InputState>,
    mut player_input: ResMut<PlayerInput>,
    mut commands: Commands,
) {
    *player_input = PlayerInput::from_state(&input);

    if player_input.toggle_fullscreen {
        commands.trigger(SwitchFullScreenEvent {});
    }
}
