//! Spawner - introduces enemies and fuel depots at the top of the river

use crate::entity::{Enemy, FuelPickup, Location};
use crate::river::RiverRow;
use crate::rng::SimpleRng;
use crate::types::{ENEMY_SPAWN_THRESHOLD, FUEL_SPAWN_THRESHOLD};

/// What a spawn roll produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnReport {
    pub enemy: bool,
    pub fuel: bool,
}

/// Roll once for an enemy and once for a fuel depot on row 0.
///
/// Each spawns at a uniformly random column of `top`'s channel.
pub fn spawn(
    rng: &mut SimpleRng,
    top: RiverRow,
    enemies: &mut Vec<Enemy>,
    fuels: &mut Vec<FuelPickup>,
) -> SpawnReport {
    let mut report = SpawnReport::default();

    if rng.next_range(10) > ENEMY_SPAWN_THRESHOLD {
        if let Some(x) = channel_column(rng, top) {
            enemies.push(Enemy::new(Location::new(x, 0)));
            report.enemy = true;
        }
    }

    if rng.next_range(10) > FUEL_SPAWN_THRESHOLD {
        if let Some(x) = channel_column(rng, top) {
            fuels.push(FuelPickup::new(Location::new(x, 0)));
            report.fuel = true;
        }
    }

    report
}

fn channel_column(rng: &mut SimpleRng, row: RiverRow) -> Option<i32> {
    if row.width() <= 0 {
        return None;
    }
    Some(row.left + rng.next_range(row.width() as u32) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_inside_channel_on_top_row() {
        let mut rng = SimpleRng::new(11);
        let mut enemies = Vec::new();
        let mut fuels = Vec::new();
        let top = RiverRow::new(20, 30);

        for _ in 0..500 {
            spawn(&mut rng, top, &mut enemies, &mut fuels);
        }

        assert!(!enemies.is_empty());
        assert!(!fuels.is_empty());
        for e in &enemies {
            assert_eq!(e.location.y, 0);
            assert!(top.contains(e.location.x));
        }
        for f in &fuels {
            assert_eq!(f.location.y, 0);
            assert!(top.contains(f.location.x));
        }
    }

    #[test]
    fn test_spawn_rates_roughly_match_odds() {
        let mut rng = SimpleRng::new(2024);
        let mut enemies = Vec::new();
        let mut fuels = Vec::new();
        let rounds = 10_000;
        for _ in 0..rounds {
            spawn(&mut rng, RiverRow::new(0, 50), &mut enemies, &mut fuels);
        }
        // 4 in 10 for enemies, 1 in 10 for fuel.
        assert!((3_500..4_500).contains(&enemies.len()), "enemies {}", enemies.len());
        assert!((700..1_300).contains(&fuels.len()), "fuels {}", fuels.len());
    }

    #[test]
    fn test_closed_channel_spawns_nothing() {
        let mut rng = SimpleRng::new(1);
        let mut enemies = Vec::new();
        let mut fuels = Vec::new();
        for _ in 0..100 {
            spawn(&mut rng, RiverRow::new(10, 10), &mut enemies, &mut fuels);
        }
        assert!(enemies.is_empty());
        assert!(fuels.is_empty());
    }
}
