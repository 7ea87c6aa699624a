//! Facing direction component.
//!
//! An entity's facing is one of four directions, but only the horizontal
//! axis is visually distinct: sprite sheets are drawn as-is when facing
//! [`Facing::Right`] and mirrored for every other direction.

use bevy_ecs::prelude::Component;

/// Direction an entity is oriented towards.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    #[default]
    Right,
    Down,
    Left,
}

impl Facing {
    /// Horizontal sign to apply to a source rectangle's width.
    ///
    /// raylib mirrors a texture region when its width is negative.
    pub fn flip_sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Up | Facing::Down | Facing::Left => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_right() {
        assert_eq!(Facing::default(), Facing::Right);
    }

    #[test]
    fn test_flip_sign_only_right_is_positive() {
        assert_eq!(Facing::Right.flip_sign(), 1.0);
        assert_eq!(Facing::Left.flip_sign(), -1.0);
        assert_eq!(Facing::Up.flip_sign(), -1.0);
        assert_eq!(Facing::Down.flip_sign(), -1.0);
    }
}
