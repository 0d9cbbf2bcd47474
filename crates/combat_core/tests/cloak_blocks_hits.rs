#![allow(clippy::unwrap_used)]

use combat_core::input::InputState;
use combat_core::world::GameCore;
use glam::Vec2;

fn aim(cursor: Vec2, primary: bool, skill_e: bool) -> InputState {
    InputState {
        primary,
        skill_e,
        cursor,
        ..Default::default()
    }
}

#[test]
fn cloaked_target_is_untouchable_until_expiry() {
    let mut core = GameCore::with_defaults();
    let p1 = core.add_player();
    let p2 = core.add_player();
    let _attacker = core.spawn_assassin(p1, Vec2::new(0.0, 5.0));
    let target = core.spawn_assassin(p2, Vec2::new(0.0, 7.0));

    let up = Vec2::new(0.0, 20.0);

    // Target cloaks; give the status one tick to reach the world snapshot.
    core.set_input(p1, aim(up, false, false));
    core.set_input(p2, aim(up, false, true));
    core.tick();
    core.set_input(p2, aim(up, false, false));
    core.tick();
    assert!(core.unit(target).unwrap().status.invisible);

    // Sweep lands in the cone but the cloak eats it.
    core.set_input(p1, aim(up, true, false));
    core.tick();
    assert_eq!(core.unit(target).unwrap().health, 50.0);

    // Ride out the ten-second duration, then sweep again.
    core.set_input(p1, aim(up, false, false));
    for _ in 0..310 {
        core.tick();
    }
    assert!(!core.unit(target).unwrap().status.invisible);
    core.set_input(p1, aim(up, true, false));
    core.tick();
    assert_eq!(core.unit(target).unwrap().health, 49.0);
}

#[test]
fn projectiles_pass_through_cloaked_units() {
    let mut core = GameCore::with_defaults();
    let p1 = core.add_player();
    let p2 = core.add_player();
    let _hound = core.spawn_hound(p1, Vec2::new(5.0, -5.0));
    let target = core.spawn_assassin(p2, Vec2::new(5.0, -1.0));

    // Cloak first, then start the burst two ticks later.
    core.set_input(
        p2,
        InputState {
            skill_e: true,
            ..Default::default()
        },
    );
    core.tick();
    core.set_input(p2, InputState::default());
    core.tick();

    core.set_input(
        p1,
        InputState {
            primary: true,
            cursor: Vec2::new(5.0, 20.0),
            ..Default::default()
        },
    );
    core.tick();
    core.set_input(
        p1,
        InputState {
            cursor: Vec2::new(5.0, 20.0),
            ..Default::default()
        },
    );
    for _ in 0..36 {
        core.tick();
    }
    // Probe and payload both flew through; nothing was applied.
    assert_eq!(core.unit(target).unwrap().health, 50.0);
}
