//! Fullscreen marker resource.
//!
//! Present while the window is fullscreen. The fullscreen observer inserts
//! and removes it as the window is toggled.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct FullScreen;
