//! Fixed-timestep discipline.
//!
//! Real elapsed time is banked and released in whole ticks; the remainder
//! carries over across frames, so N tick-durations of wall time always
//! yield exactly N ticks no matter how they were chunked. The physics
//! world never advances by a variable or partial tick.

use std::time::Duration;

pub const SIM_FPS: u32 = 60;
pub const DT: f32 = 1.0 / SIM_FPS as f32;
pub const TICK: Duration = Duration::from_micros(1_000_000 / SIM_FPS as u64);

/// Solver passes per tick, in the tradition of rigid-body steppers.
pub const VELOCITY_ITERATIONS: u32 = 8;
pub const POSITION_ITERATIONS: u32 = 2;

#[derive(Debug, Default)]
pub struct TickAccumulator {
    banked: Duration,
}

impl TickAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank `elapsed` real time and return how many whole ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.banked += elapsed;
        let mut ticks = 0;
        while self.banked >= TICK {
            self.banked -= TICK;
            ticks += 1;
        }
        ticks
    }

    /// Time banked toward the next tick.
    pub fn pending(&self) -> Duration {
        self.banked
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_frames_accumulate() {
        let mut acc = TickAccumulator::new();
        // Two frames of half a tick: the second one completes it exactly
        assert_eq!(acc.advance(TICK / 2), 0);
        assert_eq!(acc.advance(TICK / 2), 1);
        assert_eq!(acc.pending(), Duration::ZERO);
    }

    #[test]
    fn long_frame_yields_multiple_ticks() {
        let mut acc = TickAccumulator::new();
        assert_eq!(acc.advance(TICK * 3 + TICK / 2), 3);
        assert_eq!(acc.pending(), TICK / 2);
    }

    #[test]
    fn irregular_chunks_sum_exactly() {
        // Durations summing to exactly 10 ticks, chunked arbitrarily
        let chunks = [
            TICK / 7,
            TICK * 2,
            TICK * 3 / 2,
            TICK / 3,
            TICK * 4,
            TICK * 10 - (TICK / 7 + TICK * 2 + TICK * 3 / 2 + TICK / 3 + TICK * 4),
        ];
        let mut acc = TickAccumulator::new();
        let total: u32 = chunks.iter().map(|&c| acc.advance(c)).sum();
        assert_eq!(total, 10);
        assert_eq!(acc.pending(), Duration::ZERO);
    }
}
