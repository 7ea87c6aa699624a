//! Gameplay statistics carried by actors.

use bevy_ecs::prelude::Component;

pub const DEFAULT_HP: u32 = 100;
pub const DEFAULT_MOVEMENT_SPEED: u32 = 3;

/// Health, experience and movement speed of an actor.
///
/// Only `movement_speed` is read by the current systems: it is the number of
/// pixels the actor travels per frame on each active axis.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub hp: u32,
    pub xp: u32,
    pub movement_speed: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hp: DEFAULT_HP,
            xp: 0,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
        }
    }
}

impl Stats {
    pub fn with_movement_speed(mut self, speed: u32) -> Self {
        self.movement_speed = speed;
        self
    }

    /// Signed per-frame step, ready to add to a position.
    pub fn step(&self) -> i32 {
        i32::try_from(self.movement_speed).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = Stats::default();
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.xp, 0);
        assert_eq!(stats.movement_speed, 3);
    }

    #[test]
    fn test_step_matches_speed() {
        assert_eq!(Stats::default().with_movement_speed(7).step(), 7);
    }
}
