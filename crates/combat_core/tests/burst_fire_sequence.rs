#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use combat_core::input::InputState;
use combat_core::projectile::ProjKind;
use combat_core::world::GameCore;
use glam::Vec2;

#[test]
fn burst_is_probe_then_tracers_then_payload() {
    let mut core = GameCore::with_defaults();
    let p1 = core.add_player();
    let _hound = core.spawn_hound(p1, Vec2::new(-5.0, -5.0));

    let hold = InputState {
        primary: true,
        cursor: Vec2::new(-5.0, 20.0),
        ..Default::default()
    };
    let idle = InputState {
        cursor: Vec2::new(-5.0, 20.0),
        ..Default::default()
    };

    // Hold the trigger through one full burst window, then release.
    let mut seen: HashMap<u32, (u64, ProjKind)> = HashMap::new();
    core.set_input(p1, hold);
    for _ in 0..32 {
        core.tick();
        for p in core.projectiles() {
            seen.insert(p.id.0, (p.spawn_tick, p.kind));
        }
    }
    core.set_input(p1, idle);
    for _ in 0..8 {
        core.tick();
        for p in core.projectiles() {
            seen.insert(p.id.0, (p.spawn_tick, p.kind));
        }
    }

    let count = |k: ProjKind| seen.values().filter(|(_, kind)| *kind == k).count();
    assert_eq!(count(ProjKind::Probe), 1);
    assert_eq!(count(ProjKind::Tracer), 30);
    assert_eq!(count(ProjKind::Payload), 1);
    assert_eq!(seen.len(), 32);

    // The payload fires one tick after the last tracer.
    let last_tracer = seen
        .values()
        .filter(|(_, k)| *k == ProjKind::Tracer)
        .map(|(t, _)| *t)
        .max()
        .unwrap();
    let payload = seen
        .values()
        .find(|(_, k)| *k == ProjKind::Payload)
        .map(|(t, _)| *t)
        .unwrap();
    assert_eq!(payload, last_tracer + 1);
}

#[test]
fn payload_loadout_drives_the_closing_rounds() {
    let mut core = GameCore::with_defaults();
    let p1 = core.add_player();
    let hound = core.spawn_hound(p1, Vec2::new(-5.0, -5.0));
    // Double the declared payload count; the burst must honor it.
    core.unit_mut(hound).unwrap().skills[0].projectile =
        Some(combat_core::skill::ProjectileLoadout {
            kind: ProjKind::Payload,
            count: 2,
        });

    core.set_input(
        p1,
        InputState {
            primary: true,
            cursor: Vec2::new(-5.0, 20.0),
            ..Default::default()
        },
    );
    core.tick();
    core.set_input(
        p1,
        InputState {
            cursor: Vec2::new(-5.0, 20.0),
            ..Default::default()
        },
    );
    let mut seen: HashMap<u32, ProjKind> = HashMap::new();
    for _ in 0..40 {
        core.tick();
        for p in core.projectiles() {
            seen.insert(p.id.0, p.kind);
        }
    }
    assert_eq!(seen.values().filter(|k| **k == ProjKind::Payload).count(), 2);
    assert_eq!(seen.len(), 33);
}

#[test]
fn release_during_burst_does_not_cut_it_short() {
    let mut core = GameCore::with_defaults();
    let p1 = core.add_player();
    let _hound = core.spawn_hound(p1, Vec2::new(-5.0, -5.0));

    // Tap the trigger for a single tick.
    core.set_input(
        p1,
        InputState {
            primary: true,
            cursor: Vec2::new(-5.0, 20.0),
            ..Default::default()
        },
    );
    core.tick();
    core.set_input(
        p1,
        InputState {
            cursor: Vec2::new(-5.0, 20.0),
            ..Default::default()
        },
    );

    let mut seen: HashMap<u32, ProjKind> = HashMap::new();
    for p in core.projectiles() {
        seen.insert(p.id.0, p.kind);
    }
    for _ in 0..40 {
        core.tick();
        for p in core.projectiles() {
            seen.insert(p.id.0, p.kind);
        }
    }
    // The full burst still plays out: one probe, thirty tracers, one payload.
    assert_eq!(seen.len(), 32);
    assert_eq!(seen.values().filter(|k| **k == ProjKind::Payload).count(), 1);
}
