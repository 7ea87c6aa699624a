//! Sprite-sheet animation state.
//!
//! [`AnimationFrame`] holds the column currently shown from a sprite sheet.
//! The valid range is `0..=max`, so a sheet with six columns has `max = 5`.
//! Stepping past `max` wraps back to the first column.

use bevy_ecs::prelude::Component;

pub const DEFAULT_MAX_FRAME: u32 = 5;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    current: u32,
    max: u32,
}

impl Default for AnimationFrame {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAME)
    }
}

impl AnimationFrame {
    /// Start at frame 0 of a sheet whose last column index is `max`.
    pub fn new(max: u32) -> Self {
        Self { current: 0, max }
    }

    /// Start at `current`, wrapping it into `0..=max` if it is out of range.
    pub fn starting_at(current: u32, max: u32) -> Self {
        Self {
            current: if current > max { 0 } else { current },
            max,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Number of distinct frames in the loop.
    pub fn frame_count(&self) -> u32 {
        self.max + 1
    }

    /// Step to the next frame, wrapping to 0 after `max`.
    pub fn advance(&mut self) {
        self.current += 1;
        if self.current > self.max {
            self.current = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_after_max() {
        let mut frame = AnimationFrame::new(5);
        for _ in 0..5 {
            frame.advance();
        }
        assert_eq!(frame.current(), 5);
        frame.advance();
        assert_eq!(frame.current(), 0);
    }

    #[test]
    fn test_six_advances_complete_a_loop() {
        let mut frame = AnimationFrame::new(5);
        for _ in 0..frame.frame_count() {
            frame.advance();
        }
        assert_eq!(frame.current(), 0);
    }

    #[test]
    fn test_single_frame_sheet_stays_on_zero() {
        let mut frame = AnimationFrame::new(0);
        frame.advance();
        frame.advance();
        assert_eq!(frame.current(), 0);
    }

    #[test]
    fn test_starting_at_out_of_range_resets() {
        assert_eq!(AnimationFrame::starting_at(9, 5).current(), 0);
        assert_eq!(AnimationFrame::starting_at(4, 5).current(), 4);
    }
}
