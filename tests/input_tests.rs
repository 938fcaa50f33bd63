use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use river_raid::core::{Location, RiverRow, World};
use river_raid::input::{handle_key_event, should_quit};
use river_raid::types::{Command, PlayerStatus};

fn press(code: KeyCode) -> Option<Command> {
    handle_key_event(KeyEvent::from(code))
}

#[test]
fn keys_drive_the_player() {
    let mut world = World::with_river(80, 20, 8, RiverRow::new(35, 45));
    world.player_mut().location = Location::new(40, 18);

    for code in [KeyCode::Char('a'), KeyCode::Left, KeyCode::Char('w'), KeyCode::Up] {
        if let Some(cmd) = press(code) {
            world.apply(cmd);
        }
    }
    assert_eq!(world.player().location, Location::new(38, 16));

    if let Some(cmd) = press(KeyCode::Char(' ')) {
        world.apply(cmd);
    }
    assert_eq!(world.bullets().len(), 1);

    if let Some(cmd) = press(KeyCode::Char('p')) {
        world.apply(cmd);
    }
    assert_eq!(world.status(), PlayerStatus::Paused);

    if let Some(cmd) = press(KeyCode::Esc) {
        world.apply(cmd);
    }
    assert!(world.should_quit());
}

#[test]
fn ctrl_c_quits_but_plain_c_does_nothing() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(ctrl_c));
    assert_eq!(handle_key_event(ctrl_c), Some(Command::Quit));
    assert_eq!(press(KeyCode::Char('c')), None);
}

#[test]
fn unmapped_keys_are_ignored() {
    assert_eq!(press(KeyCode::Enter), None);
    assert_eq!(press(KeyCode::Char('x')), None);
    assert_eq!(press(KeyCode::Tab), None);
}
