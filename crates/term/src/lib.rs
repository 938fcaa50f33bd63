//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the world is painted into a
//! plain framebuffer by [`RiverView`], and a [`FrameSink`] presents it.
//! [`TerminalRenderer`] is the real sink; it flushes only the cell runs
//! that changed since the previous frame.
//!
//! Painting is pure and read-only with respect to the world, so the same
//! world always yields the same frame.

pub mod fb;
pub mod renderer;
pub mod river_view;
pub mod sink;

pub use river_raid_core as core;
pub use river_raid_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use river_view::{RiverView, Viewport};
pub use sink::{FrameSink, RecordingSink};
