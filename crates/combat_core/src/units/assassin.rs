//! Melee assassin: dagger sweep, cloak, and an armable blink teleport.

use glam::Vec2;

use data_specs::units::AssassinSpec;

use crate::events::EventQueue;
use crate::geom;
use crate::skill::{Skill, SkillKind};
use crate::status::{self, ActiveEffect, BaseStats, EffectKind, Status};
use crate::unit::{HitShape, Unit, UnitKind};
use crate::world::UpdateCtx;
use crate::{PlayerId, UnitId, ticks};

const CLOAK: usize = 0;
const BLINK: usize = 1;
const DAGGER: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct AssassinState {
    /// Blink armed: the next valid primary press teleports to the cursor.
    /// The blink cooldown holds still while armed.
    pub teleport_armed: bool,
}

pub fn spawn(id: UnitId, player: PlayerId, pos: Vec2, spec: &AssassinSpec) -> Unit {
    let base = BaseStats {
        max_health: spec.max_health,
        speed: spec.speed,
        damage_scale: spec.damage_scale,
        armor: spec.armor,
    };
    let skills = vec![
        Skill::new(
            "Cloak",
            format!(
                "Cannot be hit for {:.0} s (cooldown {:.0} s)",
                spec.invisible_duration_s, spec.invisible_cooldown_s
            ),
            SkillKind::E,
            ticks(spec.invisible_cooldown_s),
        ),
        Skill::new(
            "Blink",
            format!(
                "Next primary press teleports to the cursor (cooldown {:.0} s)",
                spec.teleport_cooldown_s
            ),
            SkillKind::Q,
            ticks(spec.teleport_cooldown_s),
        ),
        Skill::new(
            "Dagger sweep",
            format!(
                "Small damage to every unit in the forward arc (cooldown {:.1} s)",
                spec.dagger_cooldown_s
            ),
            SkillKind::Primary,
            ticks(spec.dagger_cooldown_s),
        ),
    ];
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
        shape: HitShape::Circle {
            radius: spec.hit_radius,
        },
        last_hit_by: None,
        kind: UnitKind::Assassin(AssassinState::default()),
    }
}

pub fn update(u: &mut Unit, ctx: &UpdateCtx, queue: &mut EventQueue) {
    let spec = &ctx.specs.units.assassin;
    let input = ctx.input(u.player).copied();

    // Cooldowns run whether or not the player record exists; an armed blink
    // holds its countdown until the charge is spent.
    let armed = matches!(&u.kind, UnitKind::Assassin(s) if s.teleport_armed);
    u.skills[CLOAK].tick();
    u.skills[DAGGER].tick();
    if !armed {
        u.skills[BLINK].tick();
    }

    // Missing player: no input-driven behavior this tick.
    let Some(input) = input else { return };

    if input.skill_e && u.skills[CLOAK].ready() {
        u.skills[CLOAK].arm();
        status::apply_effect(
            &mut u.effects,
            ActiveEffect::new(
                u.player,
                ticks(spec.invisible_duration_s),
                EffectKind::Invisible,
            ),
        );
        log::debug!("sim: assassin {} cloaked", u.id.0);
    }

    let mut sweep = false;
    let mut teleported = false;
    {
        let UnitKind::Assassin(st) = &mut u.kind else {
            return;
        };
        if input.skill_q && !st.teleport_armed && u.skills[BLINK].ready() {
            st.teleport_armed = true;
            u.skills[BLINK].arm();
        }
        if input.primary {
            if st.teleport_armed {
                // The charge is only spent on a reachable cursor position.
                if !ctx.is_out_of_range(input.cursor) && !ctx.is_blocked_by_obstacles(input.cursor)
                {
                    queue.push_move(u.id, input.cursor);
                    st.teleport_armed = false;
                    teleported = true;
                }
            } else {
                sweep = true;
            }
        }
    }

    if sweep && u.skills[DAGGER].ready() {
        u.skills[DAGGER].arm();
        dagger_sweep(u, ctx, queue, spec);
    }

    // Move/rotate apply last-write-wins, so a key-derived move enqueued after
    // the teleport would overwrite it. The teleport owns this tick's position.
    if !teleported {
        super::push_move_event(u, &input, ctx, queue);
    }
    queue.push_rotate(u.id, super::cursor_rotation(u.pos, u.rotation, input.cursor));
}

/// Point-in-cone test with the attacker's rotation as axis: candidates in
/// the annular band whose normalized offset clears the half-angle cosine
/// take one damage event each.
fn dagger_sweep(u: &Unit, ctx: &UpdateCtx, queue: &mut EventQueue, spec: &AssassinSpec) {
    let fwd = geom::facing(u.rotation);
    for v in ctx.view.units() {
        if v.id == u.id || v.invisible {
            continue;
        }
        let diff = v.pos - u.pos;
        let len = diff.length();
        if len > spec.dagger_inner
            && len < spec.dagger_outer
            && fwd.dot(diff) / len > spec.dagger_cos_half_angle
        {
            queue.push_damage(v.id, u.player, spec.dagger_damage * u.status.damage_scale);
        }
    }
}
