//! End-to-end gameplay scenarios on a calm 80x20 river.

use river_raid::core::{Location, Phase, RiverRow, World};
use river_raid::types::{Command, PlayerStatus, ThingStatus, MAX_FUEL};

fn calm_world() -> World {
    let mut world = World::with_river(80, 20, 12345, RiverRow::new(35, 45));
    world.player_mut().location = Location::new(40, 18);
    world
}

#[test]
fn bullet_flies_to_the_top_and_disappears() {
    let mut world = calm_world();
    world.apply(Command::Fire);
    assert_eq!(world.bullets().len(), 1);
    assert_eq!(world.bullets()[0].location, Location::new(40, 18));

    for tick in 1..18 {
        world.step(Phase::Bullet);
        assert_eq!(world.bullets()[0].location.y, 18 - tick);
    }
    assert_eq!(world.bullets()[0].location, Location::new(40, 1));

    world.step(Phase::Bullet);
    assert!(world.bullets().is_empty());
    assert_eq!(world.player().score, 0);
}

#[test]
fn last_fuel_segment_runs_out_in_one_tick() {
    let mut world = calm_world();
    world.player_mut().fuel = 10;

    let report = world.step(Phase::Physics);

    assert_eq!(world.player().fuel, 0);
    assert_eq!(world.status(), PlayerStatus::Dead);
    assert_eq!(world.player().message(), "out of fuel");
    assert_eq!(report.death.map(|d| d.message()), Some("out of fuel"));
}

#[test]
fn depot_under_the_player_saves_the_last_segment() {
    let mut world = calm_world();
    world.player_mut().fuel = 10;
    world.push_fuel(Location::new(40, 17));

    world.step(Phase::Physics);

    assert_eq!(world.status(), PlayerStatus::Alive);
    assert_eq!(world.player().fuel, 19);
    assert_eq!(world.player().message(), "");
}

#[test]
fn out_of_fuel_takes_priority_over_rock() {
    let mut world = calm_world();
    world.player_mut().fuel = 10;
    world.player_mut().location.x = 30;
    world.step(Phase::Physics);
    assert_eq!(world.player().message(), "out of fuel");
}

#[test]
fn shot_enemy_explodes_then_vanishes() {
    let mut world = calm_world();
    world.push_enemy(Location::new(40, 10));
    world.push_bullet(Location::new(40, 11));

    world.step(Phase::Bullet);
    assert!(world.bullets().is_empty());
    assert_eq!(world.player().score, 10);
    assert_eq!(world.enemies()[0].status, ThingStatus::DeadBody);
    assert_eq!(world.enemies()[0].symbol, 'X');

    world.step(Phase::Bullet);
    assert_eq!(world.enemies()[0].status, ThingStatus::Dead);

    world.step(Phase::Bullet);
    assert!(world.enemies().is_empty());
    assert_eq!(world.player().score, 10);
}

#[test]
fn shot_fuel_depot_explodes_then_vanishes() {
    let mut world = calm_world();
    world.push_fuel(Location::new(41, 9));
    world.push_bullet(Location::new(41, 10));

    world.step(Phase::Bullet);
    assert_eq!(world.player().score, 10);
    assert_eq!(world.fuels()[0].status, ThingStatus::DeadBody);
    assert_eq!(world.fuels()[0].symbol, [' ', 'X', ' ', 'X']);

    world.step(Phase::Bullet);
    world.step(Phase::Bullet);
    assert!(world.fuels().is_empty());
}

#[test]
fn flying_onto_the_bank_is_fatal() {
    let mut world = calm_world();
    world.player_mut().location.x = 34;
    world.push_enemy(Location::new(34, 17));

    world.step(Phase::Physics);

    assert_eq!(world.status(), PlayerStatus::Dead);
    assert_eq!(world.player().message(), "hit by rock");
}

#[test]
fn fire_respawns_from_dead_body() {
    let mut world = calm_world();
    world.player_mut().location.x = 34;
    world.step(Phase::Physics);
    world.step(Phase::Bullet);
    assert_eq!(world.status(), PlayerStatus::DeadBody);
    assert_eq!(world.player().lives, 2);

    world.apply(Command::Fire);

    assert_eq!(world.status(), PlayerStatus::Alive);
    assert_eq!(world.player().fuel, MAX_FUEL);
    assert_eq!(world.player().location, Location::new(40, 19));
    assert_eq!(world.player().symbol, 'A');
    // Respawning fires by default.
    assert_eq!(world.bullets().len(), 1);
}

#[test]
fn dead_body_ignores_movement_until_respawn() {
    let mut world = calm_world();
    world.player_mut().location.x = 34;
    world.step(Phase::Physics);
    world.step(Phase::Physics);

    world.apply(Command::MoveRight);
    assert_eq!(world.player().location.x, 34);
}

#[test]
fn lives_run_out_into_game_over() {
    let mut world = calm_world();

    for _ in 0..3 {
        world.player_mut().location.x = 34;
        world.step(Phase::Physics);
        world.step(Phase::Physics);
        assert_eq!(world.status(), PlayerStatus::DeadBody);
        world.apply(Command::Fire);
    }
    assert_eq!(world.player().lives, 0);

    world.player_mut().location.x = 34;
    world.step(Phase::Physics);
    world.step(Phase::Physics);
    assert!(world.is_game_over());

    world.apply(Command::Fire);
    assert!(world.is_game_over());
}

#[test]
fn pause_remembers_dead_body() {
    let mut world = calm_world();
    world.player_mut().location.x = 34;
    world.step(Phase::Physics);
    world.step(Phase::Physics);

    world.apply(Command::Pause);
    assert_eq!(world.status(), PlayerStatus::Paused);
    world.apply(Command::Pause);
    assert_eq!(world.status(), PlayerStatus::DeadBody);
}

#[test]
fn quit_from_any_state() {
    let mut world = calm_world();
    world.apply(Command::Pause);
    world.apply(Command::Quit);
    assert!(world.should_quit());

    world.step(Phase::Physics);
    assert_eq!(world.status(), PlayerStatus::Quit);
}
