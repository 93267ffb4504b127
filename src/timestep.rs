//! Fixed timestep accumulator
//!
//! Decouples simulation rate from the display's refresh rate.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Feed a frame delta (seconds) and return how many steps to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }

        // Drop the backlog instead of spiralling
        if substeps == self.max_substeps && self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator %= self.step;
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_whole_steps_and_carries_remainder() {
        let mut clock = FixedTimestep::new(0.01, 8);
        assert_eq!(clock.advance(0.025), 2);
        // 0.005 left over, so 0.004 more is still short of a step
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.004), 1);
    }

    #[test]
    fn test_fast_display_skips_steps_on_some_frames() {
        let mut clock = FixedTimestep::default();
        // 144 Hz display drives a 60 Hz simulation
        let steps: u32 = (0..144).map(|_| clock.advance(1.0 / 144.0)).sum();
        assert!((59..=60).contains(&steps));
    }

    #[test]
    fn test_substep_cap() {
        let mut clock = FixedTimestep::new(0.01, 4);
        assert_eq!(clock.advance(0.09), 4);
        // Backlog was dropped, nothing left to catch up on
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FixedTimestep::default();
        // A 2 second hitch counts as 0.1s, about 6 steps at 60 Hz
        let steps = clock.advance(2.0);
        assert!((5..=6).contains(&steps));
        assert_eq!(clock.advance(0.0), 0);
    }
}
