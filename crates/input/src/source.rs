//! Input sources: where commands come from.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Result};
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::Command;

/// Most commands returned by one poll; the rest wait for the next one.
pub const MAX_COMMANDS_PER_POLL: usize = 16;

pub type CommandBatch = ArrayVec<Command, MAX_COMMANDS_PER_POLL>;

/// An ordered stream of commands.
///
/// An `Err` is fatal: the game loop stops and returns it.
pub trait InputSource {
    /// Wait at most `timeout` for input, then return every command that is
    /// ready without blocking further.
    fn poll(&mut self, timeout: Duration) -> Result<CommandBatch>;
}

/// Commands from the terminal keyboard.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll(&mut self, timeout: Duration) -> Result<CommandBatch> {
        let mut batch = CommandBatch::new();
        if !event::poll(timeout)? {
            return Ok(batch);
        }

        loop {
            if let Event::Key(key) = event::read()? {
                // Repeats and releases are ignored; only presses act.
                if key.kind == KeyEventKind::Press {
                    if let Some(cmd) = handle_key_event(key) {
                        batch.push(cmd);
                    }
                }
            }
            if batch.is_full() || !event::poll(Duration::ZERO)? {
                break;
            }
        }

        Ok(batch)
    }
}

/// A fixed list of commands, handed out in order.
///
/// Each poll yields at most `per_poll` commands. Once drained it either keeps
/// returning empty batches or, with [`ScriptedInput::then_fail`], an error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Command>,
    per_poll: usize,
    failure: Option<String>,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
            per_poll: 1,
            failure: None,
        }
    }

    pub fn with_per_poll(mut self, per_poll: usize) -> Self {
        self.per_poll = per_poll.clamp(1, MAX_COMMANDS_PER_POLL);
        self
    }

    /// Fail with `message` once the script runs out.
    pub fn then_fail(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn push(&mut self, cmd: Command) {
        self.queue.push_back(cmd);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _timeout: Duration) -> Result<CommandBatch> {
        if self.queue.is_empty() {
            if let Some(msg) = &self.failure {
                return Err(anyhow!("input source failed: {msg}"));
            }
        }

        let mut batch = CommandBatch::new();
        while batch.len() < self.per_poll.max(1) {
            match self.queue.pop_front() {
                Some(cmd) => batch.push(cmd),
                None => break,
            }
        }
        Ok(batch)
    }
}
