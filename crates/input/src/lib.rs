//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s and exposes
//! them through the [`InputSource`] trait, so the game loop can be driven
//! by a real terminal or by a scripted command list.

pub mod map;
pub mod source;

pub use river_raid_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{CommandBatch, CrosstermInput, InputSource, ScriptedInput, MAX_COMMANDS_PER_POLL};
