//! Motion - one-cell-per-tick movement of everything except the player

use crate::entity::{age_wreck, Bullet, Enemy, FuelPickup};

/// Move enemies and fuel depots one row down, dropping those already on
/// the bottom row. Nothing is scored for things that drift off the board.
pub fn advance_things(enemies: &mut Vec<Enemy>, fuels: &mut Vec<FuelPickup>, height: i32) {
    let bottom = height - 1;
    enemies.retain_mut(|e| {
        if e.location.y >= bottom {
            return false;
        }
        e.location.y += 1;
        true
    });
    fuels.retain_mut(|f| {
        if f.location.y >= bottom {
            return false;
        }
        f.location.y += 1;
        true
    });
}

/// Move every bullet one row up.
pub fn advance_bullets(bullets: &mut [Bullet]) {
    for b in bullets.iter_mut() {
        b.location.y -= 1;
    }
}

/// Step destroyed things along `DeadBody -> Dead -> removed`.
pub fn age_wreckage(enemies: &mut Vec<Enemy>, fuels: &mut Vec<FuelPickup>) {
    enemies.retain_mut(|e| age_wreck(&mut e.status));
    fuels.retain_mut(|f| age_wreck(&mut f.status));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Location;
    use crate::types::ThingStatus;

    #[test]
    fn test_things_fall_and_leave_at_bottom() {
        let mut enemies = vec![
            Enemy::new(Location::new(1, 0)),
            Enemy::new(Location::new(2, 9)),
            Enemy::new(Location::new(3, 8)),
        ];
        let mut fuels = vec![FuelPickup::new(Location::new(4, 9))];

        advance_things(&mut enemies, &mut fuels, 10);

        let ys: Vec<_> = enemies.iter().map(|e| (e.location.x, e.location.y)).collect();
        assert_eq!(ys, vec![(1, 1), (3, 9)]);
        assert!(fuels.is_empty());
    }

    #[test]
    fn test_bullets_rise() {
        let mut bullets = vec![Bullet::new(Location::new(5, 5)), Bullet::new(Location::new(6, 1))];
        advance_bullets(&mut bullets);
        assert_eq!(bullets[0].location, Location::new(5, 4));
        assert_eq!(bullets[1].location, Location::new(6, 0));
    }

    #[test]
    fn test_wreckage_lasts_two_steps_and_keeps_order() {
        let mut enemies = vec![
            Enemy::new(Location::new(1, 1)),
            Enemy::new(Location::new(2, 2)),
            Enemy::new(Location::new(3, 3)),
        ];
        enemies[1].destroy();
        let mut fuels = vec![FuelPickup::new(Location::new(4, 4))];
        fuels[0].destroy();

        age_wreckage(&mut enemies, &mut fuels);
        assert_eq!(enemies.len(), 3);
        assert_eq!(enemies[1].status, ThingStatus::Dead);
        assert_eq!(fuels[0].status, ThingStatus::Dead);

        age_wreckage(&mut enemies, &mut fuels);
        let xs: Vec<_> = enemies.iter().map(|e| e.location.x).collect();
        assert_eq!(xs, vec![1, 3]);
        assert!(fuels.is_empty());
    }
}
