//! Terminal River Raid runner (default binary).
//!
//! Fly up a winding river, shoot enemies and fuel depots, and fly over
//! depots to refuel. Diagnostics go to stderr via `RUST_LOG`.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use river_raid::core::World;
use river_raid::input::CrosstermInput;
use river_raid::term::{FrameSink, TerminalRenderer};
use river_raid::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    let viewport = term.viewport();
    let mut world = World::from_terminal_size(viewport.width, viewport.height, seed);
    world.warm_up();
    tracing::info!(seed, width = world.width(), height = world.height(), "new game");

    Session::new(world, CrosstermInput::new(), term).run()
}
