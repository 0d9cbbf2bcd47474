//! Ranged hound: tank-style body steering with an independent cursor-tracked
//! muzzle, firing a one-second burst per primary trigger.

use glam::Vec2;

use data_specs::units::HoundSpec;

use crate::events::EventQueue;
use crate::geom;
use crate::projectile::{ProjKind, ProjectileSpawn};
use crate::skill::{Skill, SkillKind};
use crate::status::{BaseStats, Status};
use crate::unit::{HitShape, Unit, UnitKind};
use crate::world::UpdateCtx;
use crate::{PlayerId, UnitId, SECONDS_PER_TICK, TICKS_PER_SECOND};

const BURST: usize = 0;

#[derive(Debug, Clone, Default)]
pub struct HoundState {
    /// Radians; tracks the cursor independently of the body.
    pub muzzle_rotation: f32,
    /// Ticks left in the current burst, including the payload tick.
    pub fire_count_down: u32,
    /// Tracer shots still owed within the burst window.
    pub tracer_ticks: u32,
    /// The closing payload shot has not fired yet.
    pub payload_pending: bool,
}

pub fn spawn(id: UnitId, player: PlayerId, pos: Vec2, spec: &HoundSpec) -> Unit {
    let base = BaseStats {
        max_health: spec.max_health,
        speed: spec.speed,
        damage_scale: spec.damage_scale,
        armor: spec.armor,
    };
    let skills = vec![Skill::new(
        "Burst fire",
        "One probe shot, a second of tracers, then a full-damage payload".to_string(),
        SkillKind::Primary,
        TICKS_PER_SECOND + 1,
    )
    .with_projectile(ProjKind::Payload, 1)];
    Unit {
        id,
        player,
        pos,
        rotation: 0.0,
        health: spec.max_health,
        base,
        status: Status::from_base(&base),
        effects: Vec::new(),
        skills,
        shape: HitShape::Rect {
            half_w: spec.hit_half_width,
            half_h: spec.hit_half_height,
        },
        last_hit_by: None,
        kind: UnitKind::Hound(HoundState::default()),
    }
}

pub fn update(
    u: &mut Unit,
    ctx: &UpdateCtx,
    queue: &mut EventQueue,
    spawns: &mut Vec<ProjectileSpawn>,
) {
    let spec = &ctx.specs.units.hound;
    let proj = &ctx.specs.projectiles;
    let input = ctx.input(u.player).copied();

    // Movement, steering and muzzle tracking are input-driven; a running
    // burst keeps firing even if the player record vanishes.
    if let Some(input) = &input {
        super::push_move_event(u, input, ctx, queue);

        // Body steering: A/D rotate the hull, speed effects scale turn rate.
        let mut turn = 0.0_f32;
        if input.rotate_left {
            turn += 1.0;
        }
        if input.rotate_right {
            turn -= 1.0;
        }
        if turn != 0.0 {
            let rate = spec.rotate_speed_deg.to_radians() * u.status.speed_scale;
            queue.push_rotate(u.id, u.rotation + turn * rate * SECONDS_PER_TICK);
        }
    }

    let pos = u.pos;
    let mut spawn_kind = None;
    let muzzle_rotation;
    {
        let UnitKind::Hound(st) = &mut u.kind else {
            return;
        };
        if let Some(input) = &input {
            st.muzzle_rotation = super::cursor_rotation(pos, st.muzzle_rotation, input.cursor);
        }
        muzzle_rotation = st.muzzle_rotation;
        if st.fire_count_down > 0 {
            st.fire_count_down -= 1;
            if st.tracer_ticks > 0 {
                st.tracer_ticks -= 1;
                spawn_kind = Some((ProjKind::Tracer, proj.tracer_scale, 1));
            } else if st.payload_pending {
                st.payload_pending = false;
                // The closing rounds come from the skill's declared loadout.
                let loadout = u.skills[BURST].projectile;
                let kind = loadout.map_or(ProjKind::Payload, |l| l.kind);
                let count = loadout.map_or(1, |l| l.count);
                spawn_kind = Some((kind, u.status.damage_scale, count));
            }
        } else if input.is_some_and(|i| i.primary) && u.skills[BURST].ready() {
            // The counter runs one tick past the tracer window so the payload
            // lands one tick after the last tracer.
            st.fire_count_down = TICKS_PER_SECOND + 1;
            st.tracer_ticks = TICKS_PER_SECOND;
            st.payload_pending = true;
            spawn_kind = Some((ProjKind::Probe, proj.probe_scale, 1));
        }
        // Surface the burst countdown where the HUD reads cooldowns.
        u.skills[BURST].time_remain = st.fire_count_down;
    }

    if let Some((kind, damage_scale, count)) = spawn_kind {
        let muzzle = pos + geom::rotate(Vec2::new(0.0, spec.muzzle_offset), muzzle_rotation);
        let vel = geom::facing(muzzle_rotation) * proj.speed;
        for _ in 0..count {
            spawns.push(ProjectileSpawn {
                player: u.player,
                pos: muzzle,
                vel,
                damage_scale,
                kind,
            });
        }
    }
}
