#![allow(clippy::unwrap_used)]

use combat_core::input::InputState;
use combat_core::world::GameCore;
use glam::Vec2;

const BLINK: usize = 1;

fn press(skill_q: bool, primary: bool, cursor: Vec2) -> InputState {
    InputState {
        skill_q,
        primary,
        cursor,
        ..Default::default()
    }
}

#[test]
fn armed_blink_pauses_cooldown_and_spends_on_valid_cursor() {
    let mut core = GameCore::with_defaults();
    let p1 = core.add_player();
    let id = core.spawn_assassin(p1, Vec2::new(5.0, 5.0));
    let total = core.unit(id).unwrap().skills[BLINK].time_total;

    // Arm. The cooldown re-arms immediately but holds while armed.
    core.set_input(p1, press(true, false, Vec2::new(5.0, 6.0)));
    core.tick();
    assert_eq!(core.unit(id).unwrap().skills[BLINK].time_remain, total);
    core.set_input(p1, press(false, false, Vec2::new(5.0, 6.0)));
    for _ in 0..5 {
        core.tick();
    }
    assert_eq!(core.unit(id).unwrap().skills[BLINK].time_remain, total);

    // Primary on a blocked cursor (the central pillar) keeps the charge.
    core.set_input(p1, press(false, true, Vec2::ZERO));
    core.tick();
    assert_eq!(core.unit(id).unwrap().pos, Vec2::new(5.0, 5.0));
    assert_eq!(core.unit(id).unwrap().skills[BLINK].time_remain, total);

    // Primary on a clear cursor teleports and releases the countdown.
    core.set_input(p1, press(false, true, Vec2::new(-5.0, -5.0)));
    core.tick();
    assert_eq!(core.unit(id).unwrap().pos, Vec2::new(-5.0, -5.0));
    core.set_input(p1, press(false, false, Vec2::new(-5.0, -4.0)));
    core.tick();
    assert_eq!(core.unit(id).unwrap().skills[BLINK].time_remain, total - 1);
}

#[test]
fn teleport_wins_over_held_movement_keys() {
    let mut core = GameCore::with_defaults();
    let p1 = core.add_player();
    let id = core.spawn_assassin(p1, Vec2::new(5.0, 5.0));

    core.set_input(p1, press(true, false, Vec2::new(5.0, 6.0)));
    core.tick();
    // Spend the charge while walking forward; the key-derived move must not
    // overwrite the teleport destination.
    core.set_input(
        p1,
        InputState {
            primary: true,
            move_forward: true,
            cursor: Vec2::new(-5.0, -5.0),
            ..Default::default()
        },
    );
    core.tick();
    assert_eq!(core.unit(id).unwrap().pos, Vec2::new(-5.0, -5.0));
}

#[test]
fn out_of_range_cursor_keeps_the_charge() {
    let mut core = GameCore::with_defaults();
    let p1 = core.add_player();
    let id = core.spawn_assassin(p1, Vec2::new(5.0, 5.0));

    core.set_input(p1, press(true, false, Vec2::new(5.0, 6.0)));
    core.tick();
    // Cursor outside the arena bounds.
    core.set_input(p1, press(false, true, Vec2::new(50.0, 50.0)));
    core.tick();
    assert_eq!(core.unit(id).unwrap().pos, Vec2::new(5.0, 5.0));
    let u = core.unit(id).unwrap();
    assert_eq!(u.skills[BLINK].time_remain, u.skills[BLINK].time_total);
}
