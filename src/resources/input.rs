//! Per-frame keyboard input resource.
//!
//! Captures the keys the game reads and exposes them to systems via the
//! [`InputState`] resource. Bindings are fixed: WASD for movement and F11 to
//! toggle fullscreen.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held down this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }

    /// True for both a tap and a hold.
    ///
    /// raylib may report a very short tap only as a press edge, so movement
    /// accepts either signal.
    pub fn engaged(&self) -> bool {
        self.active || self.just_pressed
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the raw per-frame keyboard state.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_left: BoolState,
    pub direction_down: BoolState,
    pub direction_right: BoolState,
    pub fullscreen_toggle: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(KeyboardKey::KEY_W),
            direction_left: BoolState::bound_to(KeyboardKey::KEY_A),
            direction_down: BoolState::bound_to(KeyboardKey::KEY_S),
            direction_right: BoolState::bound_to(KeyboardKey::KEY_D),
            fullscreen_toggle: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Mutable access to every tracked key, for polling.
    pub fn keys_mut(&mut self) -> [&mut BoolState; 5] {
        [
            &mut self.direction_up,
            &mut self.direction_left,
            &mut self.direction_down,
            &mut self.direction_right,
            &mut self.fullscreen_toggle,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_engaged_on_press_or_hold() {
        let mut bs = BoolState::bound_to(KeyboardKey::KEY_D);
        assert!(!bs.engaged());
        bs.just_pressed = true;
        assert!(bs.engaged());
        bs.just_pressed = false;
        bs.active = true;
        assert!(bs.engaged());
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.direction_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.direction_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.direction_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.fullscreen_toggle.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_keys_mut_covers_all_bindings() {
        let mut input = InputState::default();
        for key in input.keys_mut() {
            key.active = true;
        }
        assert!(input.direction_up.active);
        assert!(input.direction_left.active);
        assert!(input.direction_down.active);
        assert!(input.direction_right.active);
        assert!(input.fullscreen_toggle.active);
    }
}
