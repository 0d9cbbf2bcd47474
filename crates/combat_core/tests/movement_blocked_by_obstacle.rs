#![allow(clippy::unwrap_used)]

use combat_core::input::InputState;
use combat_core::world::GameCore;
use glam::Vec2;

/// A move whose destination lands inside an obstacle is dropped whole; the
/// unit parks at the last clear position instead of sliding along the wall.
#[test]
fn blocked_candidate_drops_the_whole_move() {
    let mut core = GameCore::with_defaults();
    let p1 = core.add_player();
    // Just above the default central pillar, walking backwards into it at
    // 0.5 per tick.
    let id = core.spawn_assassin(p1, Vec2::new(0.0, 1.9));
    core.set_input(
        p1,
        InputState {
            move_back: true,
            cursor: Vec2::new(0.0, 20.0),
            ..Default::default()
        },
    );
    for _ in 0..5 {
        core.tick();
    }
    let u = core.unit(id).unwrap();
    assert_eq!(u.pos.x, 0.0);
    // One step to 1.4 succeeds; the step to 0.9 would enter the pillar.
    assert!((u.pos.y - 1.4).abs() < 1e-5, "pos.y = {}", u.pos.y);
}
