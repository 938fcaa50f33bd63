//! World - the single owner of all game state
//!
//! Commands from an input source are applied with [`World::apply`] and
//! clock ticks with [`World::step`]. Both take `&mut self`, so a single
//! owner serialises them; nothing else mutates the entity collections.

use tracing::{debug, info};

use crate::clock::Phase;
use crate::collision::{player_hazard, refuel_amount, resolve_bullets};
use crate::entity::{Bullet, Enemy, FuelPickup, Location};
use crate::motion::{advance_bullets, advance_things, age_wreckage};
use crate::player::{Player, Settle};
use crate::river::{River, RiverRow};
use crate::rng::SimpleRng;
use crate::spawner::{spawn, SpawnReport};
use crate::types::{
    Command, DeathCause, PlayerStatus, RespawnFire, FUEL_BURN_PER_TICK, MIN_BOARD_HEIGHT,
    MIN_BOARD_WIDTH, POINTS_PER_KILL, STARTING_LIVES, STATUS_BAR_ROWS,
};

/// Per-session tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub lives: u32,
    pub respawn_fire: RespawnFire,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lives: STARTING_LIVES,
            respawn_fire: RespawnFire::default(),
        }
    }
}

/// What happened during one [`World::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub kills: u32,
    pub retargeted: bool,
    pub spawned: SpawnReport,
    pub death: Option<DeathCause>,
    pub settled: Option<Settle>,
}

#[derive(Debug, Clone)]
pub struct World {
    player: Player,
    width: i32,
    height: i32,
    river: River,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    fuels: Vec<FuelPickup>,
    rng: SimpleRng,
    config: GameConfig,
}

impl World {
    /// A fresh board with a straight channel in the middle.
    pub fn new(width: i32, height: i32, seed: u32) -> Self {
        Self::with_config(width, height, seed, GameConfig::default())
    }

    pub fn with_config(width: i32, height: i32, seed: u32, config: GameConfig) -> Self {
        let width = width.max(MIN_BOARD_WIDTH);
        let height = height.max(MIN_BOARD_HEIGHT);
        let river = River::new(width, height);
        Self::assemble(width, height, seed, config, river)
    }

    /// A board sized for a terminal, leaving room for the status bar.
    pub fn from_terminal_size(cols: u16, rows: u16, seed: u32) -> Self {
        let height = rows.saturating_sub(STATUS_BAR_ROWS) as i32;
        Self::new(cols as i32, height, seed)
    }

    /// A board whose every row is `row`, with the targets at rest on it.
    ///
    /// Dimensions are taken as given. Useful for scripted scenarios.
    pub fn with_river(width: i32, height: i32, seed: u32, row: RiverRow) -> Self {
        let river = River::filled(width, height, row);
        Self::assemble(width, height.max(1), seed, GameConfig::default(), river)
    }

    fn assemble(width: i32, height: i32, seed: u32, config: GameConfig, river: River) -> Self {
        let start = Location::new(width / 2, (height - 2).max(0));
        Self {
            player: Player::new(start, config.lives),
            width,
            height,
            river,
            bullets: Vec::new(),
            enemies: Vec::new(),
            fuels: Vec::new(),
            rng: SimpleRng::new(seed),
            config,
        }
    }

    pub fn with_respawn_fire(mut self, respawn_fire: RespawnFire) -> Self {
        self.config.respawn_fire = respawn_fire;
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn status(&self) -> PlayerStatus {
        self.player.status
    }

    pub fn is_game_over(&self) -> bool {
        self.player.is_game_over()
    }

    pub fn should_quit(&self) -> bool {
        self.player.status == PlayerStatus::Quit
    }

    pub fn river(&self) -> &River {
        &self.river
    }

    pub fn river_mut(&mut self) -> &mut River {
        &mut self.river
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn fuels(&self) -> &[FuelPickup] {
        &self.fuels
    }

    pub fn push_bullet(&mut self, location: Location) {
        self.bullets.push(Bullet::new(location));
    }

    pub fn push_enemy(&mut self, location: Location) {
        self.enemies.push(Enemy::new(location));
    }

    pub fn push_fuel(&mut self, location: Location) {
        self.fuels.push(FuelPickup::new(location));
    }

    /// Scroll the river for two thirds of the board so play starts on a
    /// wandering channel, then wait paused for the first keypress.
    pub fn warm_up(&mut self) {
        for _ in 0..self.height * 2 / 3 {
            self.river.shift(&mut self.rng);
            advance_things(&mut self.enemies, &mut self.fuels, self.height);
            spawn(&mut self.rng, self.river.top(), &mut self.enemies, &mut self.fuels);
        }
        self.player.pause_into(PlayerStatus::Alive);
    }

    /// Apply one input command. Commands are not gated by ticks.
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => {
                debug!(score = self.player.score, "quit");
                self.player.quit();
            }
            Command::Pause => {
                self.player.toggle_pause();
                debug!(status = self.player.status.as_str(), "pause toggled");
            }
            Command::Fire => self.fire(),
            Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => {
                if !self.player.is_alive() {
                    return;
                }
                if let Some((dx, dy)) = cmd.delta() {
                    self.player.nudge(dx, dy, self.width - 1, self.height - 1);
                }
            }
        }
    }

    fn fire(&mut self) {
        self.player.unpause();

        match self.player.status {
            PlayerStatus::Alive => {}
            PlayerStatus::DeadBody => {
                let spot = self.respawn_point();
                self.player.respawn(spot);
                debug!(x = spot.x, y = spot.y, lives = self.player.lives, "respawn");
                if self.config.respawn_fire == RespawnFire::Hold {
                    return;
                }
            }
            _ => return,
        }

        self.bullets.push(Bullet::new(self.player.location));
    }

    /// Middle of the channel on the bottom row.
    pub fn respawn_point(&self) -> Location {
        Location::new(self.river.bottom().middle(), self.height - 1)
    }

    /// Run one clock tick.
    ///
    /// Only an alive player advances the world. A pending death is settled
    /// instead; every other state leaves the world frozen.
    pub fn step(&mut self, phase: Phase) -> StepReport {
        let mut report = StepReport::default();

        match self.player.status {
            PlayerStatus::Alive => {}
            PlayerStatus::Dead => {
                let settled = self.player.settle_death();
                if settled == Settle::LifeLost {
                    debug!(lives = self.player.lives, "life lost");
                }
                report.settled = Some(settled);
                return report;
            }
            _ => return report,
        }

        if phase.runs_physics() {
            report.retargeted = self.river.shift(&mut self.rng);
            advance_things(&mut self.enemies, &mut self.fuels, self.height);
            report.spawned = spawn(
                &mut self.rng,
                self.river.top(),
                &mut self.enemies,
                &mut self.fuels,
            );
            report.death = self.player_physics();
        }

        age_wreckage(&mut self.enemies, &mut self.fuels);
        advance_bullets(&mut self.bullets);
        report.kills = resolve_bullets(
            &mut self.bullets,
            &self.river,
            &mut self.enemies,
            &mut self.fuels,
            phase.runs_physics(),
        );
        self.player.score += report.kills * POINTS_PER_KILL;

        report
    }

    /// Fuel burn and pickup, then bank, then enemies.
    fn player_physics(&mut self) -> Option<DeathCause> {
        let gained = refuel_amount(self.player.location, &self.fuels);
        let cause = if self.player.burn_fuel(FUEL_BURN_PER_TICK, gained) {
            Some(DeathCause::OutOfFuel)
        } else {
            player_hazard(self.player.location, &self.river, &self.enemies)
        };

        if let Some(cause) = cause {
            self.player.kill(cause);
            debug!(
                cause = cause.message(),
                x = self.player.location.x,
                y = self.player.location.y,
                "player died"
            );
            if self.player.lives == 0 {
                info!(score = self.player.score, "game over");
            }
        }

        cause
    }
}
