//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains every game rule of the river: channel generation,
//! spawning, movement, collisions and the player lifecycle. It performs
//! no I/O; a frontend feeds it [`Command`](types::Command)s and clock
//! [`Phase`]s and reads the resulting [`World`] back.
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG used for every random roll
//! - [`river`]: scrolling channel rows and their wander targets
//! - [`entity`]: locations, bullets, enemies and fuel depots
//! - [`spawner`]: enemy and fuel spawn rolls on the top row
//! - [`motion`]: per-tick movement and wreckage ageing
//! - [`collision`]: bullet and player hit tests
//! - [`player`]: the player aggregate and its state machine
//! - [`clock`]: fixed ticks alternating physics and bullet phases
//! - [`world`]: the aggregate tying it all together
//!
//! # Tick Order
//!
//! A physics tick runs, in order: river shift (boundary step, retarget
//! roll), entity advance, spawn, fuel burn and player collisions, then the
//! bullet pass. A bullet tick runs only the bullet pass: wreckage ageing,
//! bullet advance, bullet collisions.
//!
//! # Example
//!
//! ```
//! use river_raid_core::{Phase, World};
//! use river_raid_types::{Command, MAX_FUEL};
//!
//! let mut world = World::new(80, 20, 12345);
//! world.apply(Command::Fire);
//! assert_eq!(world.bullets().len(), 1);
//!
//! world.step(Phase::Physics);
//! assert_eq!(world.player().fuel, MAX_FUEL - 1);
//! ```

pub mod clock;
pub mod collision;
pub mod entity;
pub mod motion;
pub mod player;
pub mod river;
pub mod rng;
pub mod spawner;
pub mod world;

pub use river_raid_types as types;

// Re-export commonly used types for convenience
pub use clock::{Phase, SimulationClock};
pub use entity::{Bullet, Enemy, FuelPickup, Location};
pub use player::{Player, Settle};
pub use river::{River, RiverRow};
pub use rng::SimpleRng;
pub use spawner::SpawnReport;
pub use world::{GameConfig, StepReport, World};
