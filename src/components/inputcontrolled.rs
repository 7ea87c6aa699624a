//! Input-controlled marker component.
//!
//! Entities carrying [`InputControlled`] are moved by
//! [`crate::systems::playercontroller::player_input_controller`] from the
//! per-frame [`PlayerInput`](crate::resources::playerinput::PlayerInput)
//! intent, and their animation is stepped only while that intent reports
//! movement.

use bevy_ecs::prelude::Component;

/// Tag for the keyboard-driven player entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct InputControlled;
