//! Player aggregate and its lifecycle state machine
//!
//! ```text
//! Alive --(rock/enemy/fuel)--> Dead --(lives > 0, settle)--> DeadBody --(fire)--> Alive
//!                               \--(lives == 0)--> game over (only Quit leaves it)
//! any --(pause)--> Paused --(pause/fire)--> previous state
//! any --(quit)--> Quit
//! ```

use crate::entity::Location;
use crate::types::{
    DeathCause, PlayerStatus, FUEL_SEGMENT, MAX_FUEL, PLAYER_GLYPH, WRECK_GLYPH,
};

/// Outcome of settling a death.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// A life was spent; waiting for respawn.
    LifeLost,
    /// No lives left.
    GameOver,
    /// The player was not dead.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub symbol: char,
    pub location: Location,
    pub score: u32,
    pub fuel: i32,
    pub status: PlayerStatus,
    pub lives: u32,
    death: Option<DeathCause>,
    resume_to: PlayerStatus,
}

impl Player {
    pub fn new(location: Location, lives: u32) -> Self {
        Self {
            symbol: PLAYER_GLYPH,
            location,
            score: 0,
            fuel: MAX_FUEL,
            status: PlayerStatus::Alive,
            lives,
            death: None,
            resume_to: PlayerStatus::Alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }

    /// Dead with no lives left. Terminal apart from quitting.
    pub fn is_game_over(&self) -> bool {
        self.status == PlayerStatus::Dead && self.lives == 0
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death
    }

    /// Message describing the last death, empty if there was none.
    pub fn message(&self) -> &'static str {
        self.death.map_or("", |d| d.message())
    }

    /// State a pause will return to.
    pub fn resume_to(&self) -> PlayerStatus {
        self.resume_to
    }

    /// Alive -> Dead. Ignored unless alive.
    pub fn kill(&mut self, cause: DeathCause) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.status = PlayerStatus::Dead;
        self.symbol = WRECK_GLYPH;
        self.death = Some(cause);
        true
    }

    /// Burn `burned` and take on `gained` in the same tick. Returns true
    /// once the tank is empty.
    ///
    /// Ending below one gauge segment drains the tank to 0.
    pub fn burn_fuel(&mut self, burned: i32, gained: i32) -> bool {
        self.fuel = (self.fuel - burned + gained).min(MAX_FUEL);
        if self.fuel < FUEL_SEGMENT {
            self.fuel = 0;
        }
        self.fuel == 0
    }

    /// Dead -> DeadBody spending a life, or game over with none left.
    pub fn settle_death(&mut self) -> Settle {
        if self.status != PlayerStatus::Dead {
            return Settle::Unchanged;
        }
        if self.lives == 0 {
            return Settle::GameOver;
        }
        self.lives -= 1;
        self.status = PlayerStatus::DeadBody;
        Settle::LifeLost
    }

    /// DeadBody -> Alive at `location` with a full tank.
    pub fn respawn(&mut self, location: Location) -> bool {
        if self.status != PlayerStatus::DeadBody {
            return false;
        }
        self.symbol = PLAYER_GLYPH;
        self.fuel = MAX_FUEL;
        self.location = location;
        self.status = PlayerStatus::Alive;
        true
    }

    /// Enter or leave `Paused`, remembering the state it interrupted.
    pub fn toggle_pause(&mut self) {
        match self.status {
            PlayerStatus::Quit => {}
            PlayerStatus::Paused => self.status = self.resume_to,
            other => {
                self.resume_to = other;
                self.status = PlayerStatus::Paused;
            }
        }
    }

    /// Leave `Paused` if paused. Returns true if it was.
    pub fn unpause(&mut self) -> bool {
        if self.status != PlayerStatus::Paused {
            return false;
        }
        self.status = self.resume_to;
        true
    }

    /// Pause with `resume` as the state to return to.
    pub fn pause_into(&mut self, resume: PlayerStatus) {
        self.resume_to = resume;
        self.status = PlayerStatus::Paused;
    }

    pub fn quit(&mut self) {
        self.status = PlayerStatus::Quit;
    }

    /// Move by `(dx, dy)`, keeping `1 <= x <= max_x` and `1 <= y <= max_y`.
    pub fn nudge(&mut self, dx: i32, dy: i32, max_x: i32, max_y: i32) {
        let x = self.location.x + dx;
        let y = self.location.y + dy;
        if dx != 0 && (1..=max_x).contains(&x) {
            self.location.x = x;
        }
        if dy != 0 && (1..=max_y).contains(&y) {
            self.location.y = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Location::new(40, 18), 3)
    }

    #[test]
    fn test_new_player() {
        let p = player();
        assert!(p.is_alive());
        assert_eq!(p.fuel, MAX_FUEL);
        assert_eq!(p.symbol, PLAYER_GLYPH);
        assert_eq!(p.message(), "");
    }

    #[test]
    fn test_kill_only_from_alive() {
        let mut p = player();
        assert!(p.kill(DeathCause::Rock));
        assert_eq!(p.status, PlayerStatus::Dead);
        assert_eq!(p.symbol, WRECK_GLYPH);
        assert_eq!(p.message(), "hit by rock");

        assert!(!p.kill(DeathCause::Enemy));
        assert_eq!(p.death_cause(), Some(DeathCause::Rock));
    }

    #[test]
    fn test_fuel_is_clamped() {
        let mut p = player();
        assert!(!p.burn_fuel(1, 50));
        assert_eq!(p.fuel, MAX_FUEL);

        p.fuel = 11;
        assert!(!p.burn_fuel(1, 0));
        assert_eq!(p.fuel, 10);

        // Last segment gone: the tank reads empty.
        assert!(p.burn_fuel(1, 0));
        assert_eq!(p.fuel, 0);
        assert!(p.burn_fuel(1, 0));
        assert_eq!(p.fuel, 0);
    }

    #[test]
    fn test_pickup_counts_before_the_tank_reads_empty() {
        let mut p = player();
        p.fuel = 10;
        assert!(!p.burn_fuel(1, 10));
        assert_eq!(p.fuel, 19);
        assert!(p.is_alive());
    }

    #[test]
    fn test_settle_spends_lives_until_game_over() {
        let mut p = Player::new(Location::new(5, 5), 1);
        assert_eq!(p.settle_death(), Settle::Unchanged);

        p.kill(DeathCause::Enemy);
        assert_eq!(p.settle_death(), Settle::LifeLost);
        assert_eq!(p.status, PlayerStatus::DeadBody);
        assert_eq!(p.lives, 0);

        assert!(p.respawn(Location::new(6, 7)));
        p.kill(DeathCause::OutOfFuel);
        assert_eq!(p.settle_death(), Settle::GameOver);
        assert!(p.is_game_over());
        assert_eq!(p.status, PlayerStatus::Dead);
    }

    #[test]
    fn test_respawn_only_from_dead_body() {
        let mut p = player();
        assert!(!p.respawn(Location::new(1, 1)));

        p.kill(DeathCause::Rock);
        p.fuel = 3;
        p.settle_death();
        assert!(p.respawn(Location::new(30, 19)));
        assert!(p.is_alive());
        assert_eq!(p.fuel, MAX_FUEL);
        assert_eq!(p.location, Location::new(30, 19));
        assert_eq!(p.symbol, PLAYER_GLYPH);
    }

    #[test]
    fn test_pause_restores_previous_state() {
        let mut p = player();
        p.kill(DeathCause::Rock);
        p.settle_death();

        p.toggle_pause();
        assert_eq!(p.status, PlayerStatus::Paused);
        assert_eq!(p.resume_to(), PlayerStatus::DeadBody);

        p.toggle_pause();
        assert_eq!(p.status, PlayerStatus::DeadBody);
    }

    #[test]
    fn test_quit_is_terminal_for_pause() {
        let mut p = player();
        p.quit();
        p.toggle_pause();
        assert_eq!(p.status, PlayerStatus::Quit);
        assert!(!p.unpause());
    }

    #[test]
    fn test_nudge_is_bounded() {
        let mut p = Player::new(Location::new(1, 1), 3);
        p.nudge(-1, 0, 79, 19);
        p.nudge(0, -1, 79, 19);
        assert_eq!(p.location, Location::new(1, 1));

        p.location = Location::new(79, 19);
        p.nudge(1, 0, 79, 19);
        p.nudge(0, 1, 79, 19);
        assert_eq!(p.location, Location::new(79, 19));

        p.nudge(-1, 0, 79, 19);
        assert_eq!(p.location, Location::new(78, 19));
    }
}
