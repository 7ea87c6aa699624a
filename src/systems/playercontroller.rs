//! Keyboard movement controller.
//!
//! Applies the frame's [`PlayerInput`] to every
//! [`InputControlled`] entity. Each active direction moves the entity by its
//! movement speed along that axis independently, so diagonal movement is the
//! plain sum of both axis moves and is faster than straight movement.
//! Positions are not clamped to the window.
use bevy_ecs::prelude::*;

use crate::components::facing::Facing;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::stats::Stats;
use crate::resources::playerinput::PlayerInput;

/// Move one entity according to `input` and update its facing.
///
/// Clears `input.movement` first and sets it again when any direction was
/// applied. Right turns a Left-facing entity right and Left turns a
/// Right-facing entity left; Up and Down never change facing.
pub fn apply_player_input(
    position: &mut MapPosition,
    facing: &mut Facing,
    stats: &Stats,
    input: &mut PlayerInput,
) {
    input.movement = false;
    let step = stats.step();

    if input.right {
        position.translate(step, 0);
        input.movement = true;
        if *facing == Facing::Left {
            *facing = Facing::Right;
        }
    }

    if input.left {
        position.translate(-step, 0);
        input.movement = true;
        if *facing == Facing::Right {
            *facing = Facing::Left;
        }
    }

    if input.up {
        position.translate(0, -step);
        input.movement = true;
    }

    if input.down {
        position.translate(0, step);
        input.movement = true;
    }
}

/// Update each input-controlled entity's position and facing.
pub fn player_input_controller(
    mut query: Query<(&mut MapPosition, &mut Facing, &Stats), With<InputControlled>>,
    mut input: ResMut<PlayerInput>,
) {
    let mut moved = false;
    for (mut position, mut facing, stats) in query.iter_mut() {
        apply_player_input(&mut position, &mut facing, stats, &mut input);
        moved |= input.movement;
    }
    input.movement = moved;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: PlayerInput, facing: Facing, speed: u32) -> (MapPosition, Facing, bool) {
        let mut position = MapPosition::new(0, 0);
        let mut facing = facing;
        let mut input = input;
        let stats = Stats::default().with_movement_speed(speed);
        apply_player_input(&mut position, &mut facing, &stats, &mut input);
        (position, facing, input.movement)
    }

    #[test]
    fn test_right_moves_and_reports_movement() {
        let input = PlayerInput {
            right: true,
            ..Default::default()
        };
        let (pos, facing, moved) = run(input, Facing::Right, 3);
        assert_eq!(pos, MapPosition::new(3, 0));
        assert_eq!(facing, Facing::Right);
        assert!(moved);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let input = PlayerInput {
            right: true,
            up: true,
            ..Default::default()
        };
        let (pos, _, _) = run(input, Facing::Right, 3);
        assert_eq!(pos, MapPosition::new(3, -3));
    }

    #[test]
    fn test_left_turns_right_facing() {
        let input = PlayerInput {
            left: true,
            ..Default::default()
        };
        let (pos, facing, _) = run(input, Facing::Right, 3);
        assert_eq!(pos, MapPosition::new(-3, 0));
        assert_eq!(facing, Facing::Left);
    }

    #[test]
    fn test_right_turns_left_facing() {
        let input = PlayerInput {
            right: true,
            ..Default::default()
        };
        let (_, facing, _) = run(input, Facing::Left, 3);
        assert_eq!(facing, Facing::Right);
    }

    #[test]
    fn test_vertical_never_changes_facing() {
        for start in [Facing::Up, Facing::Right, Facing::Down, Facing::Left] {
            let input = PlayerInput {
                up: true,
                down: true,
                ..Default::default()
            };
            let (pos, facing, moved) = run(input, start, 3);
            assert_eq!(facing, start);
            assert_eq!(pos, MapPosition::new(0, 0));
            assert!(moved);
        }
    }

    #[test]
    fn test_left_and_right_cancel_position_last_wins_facing() {
        let input = PlayerInput {
            left: true,
            right: true,
            ..Default::default()
        };
        let (pos, facing, moved) = run(input, Facing::Right, 3);
        assert_eq!(pos, MapPosition::new(0, 0));
        assert_eq!(facing, Facing::Left);
        assert!(moved);
    }

    #[test]
    fn test_no_input_clears_stale_movement() {
        let input = PlayerInput {
            movement: true,
            ..Default::default()
        };
        let (pos, _, moved) = run(input, Facing::Right, 3);
        assert_eq!(pos, MapPosition::new(0, 0));
        assert!(!moved);
    }

    #[test]
    fn test_controller_clears_stale_movement_without_players() {
        let mut world = World::new();
        world.insert_resource(PlayerInput {
            movement: true,
            right: true,
            ..Default::default()
        });

        let mut schedule = Schedule::default();
        schedule.add_systems(player_input_controller);
        schedule.run(&mut world);

        assert!(!world.resource::<PlayerInput>().movement);
    }
}
