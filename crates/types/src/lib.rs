//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be
//! shared by the simulation, the input layer and the terminal renderer.
//!
//! # Board
//!
//! The board is a grid of `width x height` cells. Row 0 is the top of the
//! screen (newest river row), row `height - 1` the bottom (oldest row,
//! nearest the player). The terminal keeps [`STATUS_BAR_ROWS`] extra rows
//! below the board for the status bar.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Clock tick; bullets move every tick |
//! | `PHYSICS_EVERY` | 2 | Physics (river, entities, player) runs every 2nd tick |
//!
//! # Examples
//!
//! ```
//! use river_raid_types::{Command, PlayerStatus, MAX_FUEL};
//!
//! let cmd = Command::from_str("fire").unwrap();
//! assert_eq!(cmd, Command::Fire);
//! assert_eq!(cmd.as_str(), "fire");
//!
//! assert!(PlayerStatus::Alive.is_alive());
//! assert_eq!(MAX_FUEL, 100);
//! ```

/// Minimum board width in cells.
pub const MIN_BOARD_WIDTH: i32 = 24;

/// Minimum board height in cells.
pub const MIN_BOARD_HEIGHT: i32 = 8;

/// Terminal rows reserved below the board for the status bar.
pub const STATUS_BAR_ROWS: u16 = 3;

/// Fixed clock tick in milliseconds.
pub const TICK_MS: u32 = 100;

/// Physics runs on one clock tick out of this many; bullets run on all of them.
pub const PHYSICS_EVERY: u32 = 2;

/// Fuel tank capacity.
pub const MAX_FUEL: i32 = 100;

/// Fuel per gauge segment; a tank holding less than one segment is empty.
pub const FUEL_SEGMENT: i32 = 10;

/// Fuel gained per physics tick while overlapping a pickup.
pub const FUEL_PICKUP_AMOUNT: i32 = 10;

/// Fuel burned per physics tick while alive.
pub const FUEL_BURN_PER_TICK: i32 = 1;

/// Score for destroying an enemy or a fuel pickup.
pub const POINTS_PER_KILL: u32 = 10;

/// Lives at the start of a session.
pub const STARTING_LIVES: u32 = 3;

/// Height of a fuel pickup sprite in rows.
pub const FUEL_SPRITE_HEIGHT: i32 = 4;

/// Glyphs of a live fuel pickup, top row first.
pub const FUEL_GLYPHS: [char; 4] = ['F', 'U', 'E', 'L'];

/// Glyphs of a destroyed fuel pickup, top row first.
pub const FUEL_WRECK_GLYPHS: [char; 4] = [' ', 'X', ' ', 'X'];

/// Player glyph while alive.
pub const PLAYER_GLYPH: char = 'A';

/// Glyph used for anything that has been destroyed.
pub const WRECK_GLYPH: char = 'X';

/// Enemy glyph while alive.
pub const ENEMY_GLYPH: char = 'E';

/// Bullet glyph.
pub const BULLET_GLYPH: char = '|';

/// Spawn rolls are `U(0, 9)`; an enemy spawns when the roll is above this.
pub const ENEMY_SPAWN_THRESHOLD: u32 = 5;

/// A fuel pickup spawns when its `U(0, 9)` roll is above this.
pub const FUEL_SPAWN_THRESHOLD: u32 = 8;

/// A retarget happens when its `U(0, 9)` roll is above this.
pub const RETARGET_THRESHOLD: u32 = 8;

/// Channel width at or below which the river always considers retargeting.
pub const MIN_CHANNEL_WIDTH: i32 = 10;

/// Half-width of the channel the river starts with.
pub const INITIAL_CHANNEL_HALF_WIDTH: i32 = 5;

/// Half-width of the first wander target band.
pub const INITIAL_TARGET_HALF_WIDTH: i32 = 10;

/// Maximum left/right shift of a new wander target.
pub const RETARGET_SHIFT: i32 = 20;

/// Widest wander target band.
pub const RETARGET_MAX_BAND: i32 = 50;

/// Random narrowing range applied to [`RETARGET_MAX_BAND`].
pub const RETARGET_BAND_JITTER: u32 = 40;

/// Discrete commands produced by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
    Pause,
    Quit,
}

impl Command {
    /// Parse a command from its name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" | "up" => Some(Command::MoveUp),
            "movedown" | "down" => Some(Command::MoveDown),
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "fire" => Some(Command::Fire),
            "pause" => Some(Command::Pause),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveUp => "moveUp",
            Command::MoveDown => "moveDown",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Fire => "fire",
            Command::Pause => "pause",
            Command::Quit => "quit",
        }
    }

    /// Movement delta `(dx, dy)` for movement commands.
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Command::MoveUp => Some((0, -1)),
            Command::MoveDown => Some((0, 1)),
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            _ => None,
        }
    }
}

/// Player lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    Alive,
    /// Just died; settled into `DeadBody` (or game over) by the next step.
    Dead,
    /// Waiting for a fire command to respawn.
    DeadBody,
    Paused,
    Quit,
}

impl PlayerStatus {
    pub fn is_alive(&self) -> bool {
        matches!(self, PlayerStatus::Alive)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Alive => "alive",
            PlayerStatus::Dead => "dead",
            PlayerStatus::DeadBody => "deadBody",
            PlayerStatus::Paused => "paused",
            PlayerStatus::Quit => "quit",
        }
    }
}

/// Two-phase destroy lifecycle shared by enemies and fuel pickups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThingStatus {
    #[default]
    Alive,
    /// Shown as wreckage for one tick.
    DeadBody,
    /// Removed on the next tick.
    Dead,
}

/// Why the player died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    Rock,
    Enemy,
    OutOfFuel,
}

impl DeathCause {
    pub fn message(&self) -> &'static str {
        match self {
            DeathCause::Rock => "hit by rock",
            DeathCause::Enemy => "hit by enemy",
            DeathCause::OutOfFuel => "out of fuel",
        }
    }
}

/// Whether the fire command that respawns the player also fires a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RespawnFire {
    /// Respawn and fire in one keypress.
    #[default]
    Fire,
    /// Respawn only; the next fire command shoots.
    Hold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_round_trip() {
        for cmd in [
            Command::MoveUp,
            Command::MoveDown,
            Command::MoveLeft,
            Command::MoveRight,
            Command::Fire,
            Command::Pause,
            Command::Quit,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("jump"), None);
    }

    #[test]
    fn only_movement_commands_have_deltas() {
        assert_eq!(Command::MoveUp.delta(), Some((0, -1)));
        assert_eq!(Command::MoveRight.delta(), Some((1, 0)));
        assert_eq!(Command::Fire.delta(), None);
        assert_eq!(Command::Quit.delta(), None);
    }

    #[test]
    fn death_messages() {
        assert_eq!(DeathCause::Rock.message(), "hit by rock");
        assert_eq!(DeathCause::Enemy.message(), "hit by enemy");
        assert_eq!(DeathCause::OutOfFuel.message(), "out of fuel");
    }

    #[test]
    fn fuel_sprite_matches_its_height() {
        assert_eq!(FUEL_GLYPHS.len() as i32, FUEL_SPRITE_HEIGHT);
        assert_eq!(FUEL_WRECK_GLYPHS.len() as i32, FUEL_SPRITE_HEIGHT);
    }
}
