//! Simulation clock - fixed ticks split into physics and bullet phases
//!
//! Bullets move on every tick; the river, entities and the player only on
//! every [`PHYSICS_EVERY`]th. The clock owns the alternation.

use arrayvec::ArrayVec;

use crate::types::{PHYSICS_EVERY, TICK_MS};

/// Most ticks replayed after a stall; anything older is dropped.
pub const MAX_CATCH_UP_TICKS: usize = 8;

/// What a tick runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// River shift, spawning, player physics, then bullets.
    Physics,
    /// Bullets only.
    Bullet,
}

impl Phase {
    pub fn runs_physics(&self) -> bool {
        matches!(self, Phase::Physics)
    }
}

#[derive(Debug, Clone)]
pub struct SimulationClock {
    tick_ms: u32,
    accumulator_ms: u32,
    ticks: u64,
}

impl SimulationClock {
    pub fn new(tick_ms: u32) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            accumulator_ms: 0,
            ticks: 0,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Ticks handed out so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Phase of the next tick without consuming it.
    pub fn peek(&self) -> Phase {
        if self.ticks % PHYSICS_EVERY as u64 == 0 {
            Phase::Physics
        } else {
            Phase::Bullet
        }
    }

    /// Hand out the next tick.
    pub fn advance(&mut self) -> Phase {
        let phase = self.peek();
        self.ticks += 1;
        phase
    }

    /// Feed elapsed wall time; returns the ticks that became due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Phase, MAX_CATCH_UP_TICKS> {
        let mut due = ArrayVec::new();
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);

        while self.accumulator_ms >= self.tick_ms {
            self.accumulator_ms -= self.tick_ms;
            if due.is_full() {
                // Too far behind: forget the backlog instead of fast-forwarding.
                self.accumulator_ms %= self.tick_ms;
                break;
            }
            due.push(self.advance());
        }

        due
    }

    /// Milliseconds until the next tick is due.
    pub fn remaining_ms(&self) -> u32 {
        self.tick_ms - self.accumulator_ms.min(self.tick_ms)
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}
