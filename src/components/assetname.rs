use bevy_ecs::prelude::Component;

/// Human readable name of a spawned asset, reported when it enters the world.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct AssetName(pub String);

impl AssetName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
