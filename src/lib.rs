//! River Raid (workspace facade crate).
//!
//! Re-exports the workspace crates as `river_raid::{core,input,term,types}`
//! and provides the [`Session`] game loop that ties them together.

pub use river_raid_core as core;
pub use river_raid_input as input;
pub use river_raid_term as term;
pub use river_raid_types as types;

pub mod session;

pub use session::Session;
