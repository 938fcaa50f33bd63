//! Collision resolution for bullets and the player
//!
//! Collections are walked back-to-front by index so removing the current
//! element never shifts one that is still to be visited.

use crate::entity::{Bullet, Enemy, FuelPickup, Location};
use crate::river::River;
use crate::types::{DeathCause, FUEL_PICKUP_AMOUNT};

/// Remove bullets that hit a bank, left the top of the board or hit
/// something, destroying what they hit. Returns the number of kills.
///
/// A bullet hits an enemy on its own cell or the cell above it. When
/// `enemies_advanced` is set (enemies moved down earlier this tick) an enemy
/// on the cell the bullet just left also counts, so the two cannot swap
/// places without colliding.
pub fn resolve_bullets(
    bullets: &mut Vec<Bullet>,
    river: &River,
    enemies: &mut [Enemy],
    fuels: &mut [FuelPickup],
    enemies_advanced: bool,
) -> u32 {
    let mut kills = 0;

    for i in (0..bullets.len()).rev() {
        let loc = bullets[i].location;

        let blocked = loc.y <= 0
            || river
                .row(loc.y)
                .map_or(true, |row| row.blocks_bullet(loc.x));
        if blocked {
            bullets.remove(i);
            continue;
        }

        let target = enemies
            .iter_mut()
            .rev()
            .find(|e| e.is_alive() && in_path(e.location, loc, enemies_advanced));
        if let Some(enemy) = target {
            enemy.destroy();
            kills += 1;
            bullets.remove(i);
            continue;
        }

        if let Some(fuel) = fuels.iter_mut().rev().find(|f| f.is_alive() && f.covers(loc)) {
            fuel.destroy();
            kills += 1;
            bullets.remove(i);
        }
    }

    kills
}

fn in_path(enemy: Location, bullet: Location, enemies_advanced: bool) -> bool {
    enemy == bullet || enemy == bullet.up() || (enemies_advanced && enemy == bullet.down())
}

/// What, if anything, kills a player standing at `loc`.
///
/// The bank is checked first, so a rock takes priority over an enemy.
pub fn player_hazard(loc: Location, river: &River, enemies: &[Enemy]) -> Option<DeathCause> {
    let on_water = river.row(loc.y).is_some_and(|row| row.contains(loc.x));
    if !on_water {
        return Some(DeathCause::Rock);
    }
    if enemies.iter().rev().any(|e| e.is_alive() && e.location == loc) {
        return Some(DeathCause::Enemy);
    }
    None
}

/// Fuel gained this tick at `loc`: one pickup's worth per depot overlapped.
pub fn refuel_amount(loc: Location, fuels: &[FuelPickup]) -> i32 {
    fuels
        .iter()
        .filter(|f| f.is_alive() && f.covers(loc))
        .count() as i32
        * FUEL_PICKUP_AMOUNT
}
