//! Animation cadence counter.
//!
//! Rendering runs at the window's target frame rate, while sprite sheets are
//! meant to play at a fixed number of steps per second. [`FrameCounter`]
//! counts rendered frames and reports when enough have passed for one
//! animation step.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCounter {
    count: u32,
    threshold: u32,
}

impl FrameCounter {
    /// Counter that fires every `threshold` frames. A threshold of 0 is
    /// treated as 1 (step every frame).
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold: threshold.max(1),
        }
    }

    /// Threshold for `steps_per_second` animation steps at `target_fps`.
    ///
    /// Uses integer division, so 60 fps at 10 steps gives one step every 6
    /// frames. Step rates faster than the frame rate clamp to every frame.
    pub fn from_rates(target_fps: u32, steps_per_second: u32) -> Self {
        Self::new(target_fps.checked_div(steps_per_second).unwrap_or(1))
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Count one rendered frame.
    ///
    /// Returns `true` when the threshold is reached; the counter is reset to
    /// 0 in that case.
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.threshold {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self::from_rates(60, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rates_divides() {
        assert_eq!(FrameCounter::from_rates(60, 10).threshold(), 6);
        assert_eq!(FrameCounter::from_rates(60, 8).threshold(), 7);
    }

    #[test]
    fn test_from_rates_clamps_to_one() {
        assert_eq!(FrameCounter::from_rates(30, 60).threshold(), 1);
        assert_eq!(FrameCounter::from_rates(60, 0).threshold(), 1);
    }

    #[test]
    fn test_tick_fires_and_resets() {
        let mut counter = FrameCounter::new(3);
        assert!(!counter.tick());
        assert!(!counter.tick());
        assert!(counter.tick());
        assert_eq!(counter.count(), 0);
        assert!(!counter.tick());
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_threshold_one_fires_every_frame() {
        let mut counter = FrameCounter::new(0);
        assert!(counter.tick());
        assert!(counter.tick());
    }
}
