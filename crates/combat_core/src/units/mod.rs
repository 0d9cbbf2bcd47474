//! Per-archetype update logic and the shared movement helpers.
//!
//! Each archetype runs a fixed per-tick sequence: attack resolution, skill
//! countdown/trigger, then movement and rotation — everything expressed as
//! deferred events, never direct mutation of world state.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::events::EventQueue;
use crate::geom;
use crate::input::InputState;
use crate::projectile::ProjectileSpawn;
use crate::status;
use crate::unit::{Unit, UnitKind};
use crate::world::UpdateCtx;
use crate::SECONDS_PER_TICK;

pub mod assassin;
pub mod hound;

pub use assassin::AssassinState;
pub use hound::HoundState;

/// Advance one unit for this tick. Recomputes the status snapshot first so
/// every decision below sees base stats plus active effects, folded in
/// attachment order.
pub fn update(
    u: &mut Unit,
    ctx: &UpdateCtx,
    queue: &mut EventQueue,
    spawns: &mut Vec<ProjectileSpawn>,
) {
    u.status = status::recompute(&u.base, &u.effects);
    if matches!(u.kind, UnitKind::Assassin(_)) {
        assassin::update(u, ctx, queue);
    } else {
        hound::update(u, ctx, queue, spawns);
    }
}

/// Forward/back movement along the current facing, scaled by effective
/// speed. A candidate position inside an obstacle is dropped whole — no
/// partial movement and no event.
pub(crate) fn push_move_event(
    u: &Unit,
    input: &InputState,
    ctx: &UpdateCtx,
    queue: &mut EventQueue,
) {
    let mut offset = Vec2::ZERO;
    if input.move_forward {
        offset.y += 1.0;
    }
    if input.move_back {
        offset.y -= 1.0;
    }
    offset *= SECONDS_PER_TICK * u.base.speed * u.status.speed_scale;
    let candidate = u.pos + geom::rotate(offset, u.rotation);
    if !ctx.is_blocked_by_obstacles(candidate) {
        queue.push_move(u.id, candidate);
    }
}

/// Rotation that aims at the cursor. Near-zero aim vectors retain the
/// previous rotation instead of producing an undefined angle.
pub(crate) fn cursor_rotation(pos: Vec2, prev: f32, cursor: Vec2) -> f32 {
    let diff = cursor - pos;
    if diff.length() < 1e-4 {
        prev
    } else {
        diff.y.atan2(diff.x) - FRAC_PI_2
    }
}
