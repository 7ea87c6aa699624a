//! Z-index component for render ordering.
//!
//! The world is drawn in a fixed order: the map below monsters below the
//! player. Entities with higher z-index values are drawn later, on top.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const MAP: ZIndex = ZIndex(0);
    pub const MONSTERS: ZIndex = ZIndex(10);
    pub const PLAYER: ZIndex = ZIndex(20);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_order() {
        let mut layers = vec![ZIndex::PLAYER, ZIndex::MAP, ZIndex::MONSTERS];
        layers.sort();
        assert_eq!(layers, vec![ZIndex::MAP, ZIndex::MONSTERS, ZIndex::PLAYER]);
    }
}
