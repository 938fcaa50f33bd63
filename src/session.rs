//! Session: the single-threaded game loop.
//!
//! Each frame renders the world, waits for input no longer than the time
//! left until the next tick, applies every command that arrived, then runs
//! the ticks that became due. The world has exactly one owner, so input
//! and simulation never race.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::debug;

use crate::core::{SimulationClock, StepReport, World};
use crate::input::InputSource;
use crate::term::{FrameBuffer, FrameSink, RiverView};

pub struct Session<I, S> {
    world: World,
    clock: SimulationClock,
    view: RiverView,
    fb: FrameBuffer,
    input: I,
    sink: S,
}

impl<I: InputSource, S: FrameSink> Session<I, S> {
    pub fn new(world: World, input: I, sink: S) -> Self {
        Self {
            world,
            clock: SimulationClock::default(),
            view: RiverView::default(),
            fb: FrameBuffer::new(0, 0),
            input,
            sink,
        }
    }

    pub fn with_clock(mut self, clock: SimulationClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_view(mut self, view: RiverView) -> Self {
        self.view = view;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Run until the player quits or the input source fails.
    pub fn run(&mut self) -> Result<()> {
        let mut last = Instant::now();
        loop {
            let keep_going = self.frame(|| {
                let now = Instant::now();
                let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
                last = now;
                elapsed
            })?;
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Run one frame with a fixed amount of elapsed time.
    ///
    /// Returns `Ok(false)` once the player has quit.
    pub fn frame_ms(&mut self, elapsed_ms: u32) -> Result<bool> {
        self.frame(|| elapsed_ms)
    }

    fn frame(&mut self, mut elapsed_ms: impl FnMut() -> u32) -> Result<bool> {
        let viewport = self.sink.viewport();
        self.view.render_into(&self.world, viewport, &mut self.fb);
        self.sink.present(&mut self.fb)?;

        let timeout = Duration::from_millis(self.clock.remaining_ms() as u64);
        for cmd in self.input.poll(timeout)? {
            self.world.apply(cmd);
        }
        if self.world.should_quit() {
            debug!(score = self.world.player().score, "session over");
            return Ok(false);
        }

        for phase in self.clock.update(elapsed_ms()) {
            let report = self.world.step(phase);
            trace_step(&report);
        }
        Ok(true)
    }
}

fn trace_step(report: &StepReport) {
    if report.kills > 0 || report.death.is_some() {
        debug!(kills = report.kills, death = ?report.death, "tick");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Location, RiverRow};
    use crate::input::ScriptedInput;
    use crate::term::{RecordingSink, Viewport};
    use crate::types::Command;

    fn session(commands: Vec<Command>) -> Session<ScriptedInput, RecordingSink> {
        let mut world = World::with_river(80, 20, 3, RiverRow::new(35, 45));
        world.player_mut().location = Location::new(40, 18);
        Session::new(
            world,
            ScriptedInput::new(commands),
            RecordingSink::new(Viewport::new(80, 23)),
        )
    }

    #[test]
    fn test_quit_ends_session_after_rendering() {
        let mut s = session(vec![Command::Quit]);
        assert!(!s.frame_ms(0).unwrap());
        assert_eq!(s.sink().frames().len(), 1);
    }

    #[test]
    fn test_ticks_follow_elapsed_time() {
        let mut s = session(vec![]);
        assert!(s.frame_ms(99).unwrap());
        assert_eq!(s.clock().ticks(), 0);
        assert!(s.frame_ms(1).unwrap());
        assert_eq!(s.clock().ticks(), 1);
        assert_eq!(s.world().player().fuel, 99);
    }

    #[test]
    fn test_input_failure_is_fatal() {
        let mut s = Session::new(
            World::new(80, 20, 1),
            ScriptedInput::new([]).then_fail("eof"),
            RecordingSink::new(Viewport::new(80, 23)),
        );
        assert!(s.run().is_err());
    }
}
