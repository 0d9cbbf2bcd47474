//! Headless duel harness: an assassin chases a hound for a fixed number of
//! ticks and logs the outcome. Mostly a smoke driver for the core.

use anyhow::Result;
use battle_arena::combat_core::input::InputState;
use battle_arena::combat_core::world::GameCore;
use battle_arena::combat_core::{TICKS_PER_SECOND, UnitId};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() -> Result<()> {
    // Telemetry owns logging end to end; its subscriber also bridges the
    // `log` records the core emits.
    let tcfg = battle_arena::data_specs::telemetry::TelemetryCfg::load_default()?;
    let _guard = battle_arena::telemetry::init_telemetry(&tcfg)?;

    let (specs, map) = battle_arena::load_specs()?;
    let mut core = GameCore::new(specs, &map);

    // Seeded so reruns reproduce the same fight.
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let p1 = core.add_player();
    let p2 = core.add_player();
    let a = core.spawn_assassin(p1, Vec2::new(-7.0 + rng.random_range(-1.0..1.0), -7.0));
    let h = core.spawn_hound(p2, Vec2::new(7.0, 7.0 + rng.random_range(-1.0..1.0)));

    let seconds = 60u32;
    for _ in 0..seconds * TICKS_PER_SECOND {
        let (Some(ap), Some(hp)) = (core.unit(a).map(|u| u.pos), core.unit(h).map(|u| u.pos))
        else {
            break;
        };
        // Assassin closes to dagger range then swings; occasionally cloaks.
        let dist = ap.distance(hp);
        core.set_input(
            p1,
            InputState {
                move_forward: dist > 2.0,
                primary: dist < 2.8,
                skill_e: rng.random_bool(0.01),
                cursor: hp,
                ..Default::default()
            },
        );
        // Hound holds the trigger with the muzzle tracking its prey.
        core.set_input(
            p2,
            InputState {
                primary: true,
                cursor: ap,
                ..Default::default()
            },
        );
        core.tick();
    }

    report(&core, a, "assassin");
    report(&core, h, "hound");
    log::info!(
        "duel finished after {} ticks, {} unit(s) standing",
        core.current_tick(),
        core.units().len()
    );
    Ok(())
}

fn report(core: &GameCore, id: UnitId, label: &str) {
    match core.unit(id) {
        Some(u) => log::info!("{label} survived at {:.1?} with {:.1} hp", u.pos, u.health),
        None => log::info!("{label} was slain"),
    }
}
