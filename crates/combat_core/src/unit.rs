//! The unit entity: identity, transform, stats, effects, skills, and the
//! archetype-specific state driving its per-tick behavior.

use glam::Vec2;

use crate::geom;
use crate::skill::Skill;
use crate::status::{ActiveEffect, BaseStats, Status};
use crate::units::{AssassinState, HoundState};
use crate::{PlayerId, UnitId};

/// Local-space hit region. The core tests projectile positions against this
/// after transforming them into the unit's frame, so each archetype can keep
/// an arbitrary footprint without the world knowing the shape.
#[derive(Debug, Clone, Copy)]
pub enum HitShape {
    Circle { radius: f32 },
    Rect { half_w: f32, half_h: f32 },
}

impl HitShape {
    #[inline]
    pub fn contains(&self, local: Vec2) -> bool {
        match *self {
            HitShape::Circle { radius } => local.length() < radius,
            HitShape::Rect { half_w, half_h } => {
                local.x > -half_w && local.x < half_w && local.y > -half_h && local.y < half_h
            }
        }
    }
}

/// Archetype tag plus per-archetype mutable state. Closed set; dispatch is a
/// plain match in the update systems.
#[derive(Debug, Clone)]
pub enum UnitKind {
    Assassin(AssassinState),
    Hound(HoundState),
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub id: UnitId,
    pub player: PlayerId,
    pub pos: Vec2,
    /// Radians; 0 faces +Y.
    pub rotation: f32,
    pub health: f32,
    pub base: BaseStats,
    /// This tick's effective stats; recomputed at the start of the unit's
    /// own update from `base` plus `effects`.
    pub status: Status,
    pub effects: Vec<ActiveEffect>,
    pub skills: Vec<Skill>,
    pub shape: HitShape,
    /// Player credited if this unit dies; set by damage application.
    pub last_hit_by: Option<PlayerId>,
    pub kind: UnitKind,
}

impl Unit {
    pub fn alive(&self) -> bool {
        self.health > 0.0
    }

    /// Test a world-space point against the unit's local hit region.
    pub fn hit_test(&self, world_point: Vec2) -> bool {
        self.shape
            .contains(geom::world_to_local(world_point, self.pos, self.rotation))
    }

    pub fn archetype_name(&self) -> &'static str {
        match self.kind {
            UnitKind::Assassin(_) => "assassin",
            UnitKind::Hound(_) => "hound",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rect_shape_respects_rotation() {
        let shape = HitShape::Rect {
            half_w: 0.8,
            half_h: 1.0,
        };
        // Point 0.9 ahead of a unit facing +Y is inside the tall axis.
        assert!(shape.contains(Vec2::new(0.0, 0.9)));
        // Same offset to the side misses the narrow axis.
        assert!(!shape.contains(Vec2::new(0.9, 0.0)));
        // Rotating the unit a quarter turn swings the tall axis onto +X, so
        // the sideways world point now lands inside.
        let local = geom::world_to_local(Vec2::new(0.9, 0.0), Vec2::ZERO, FRAC_PI_2);
        assert!(shape.contains(local));
    }

    #[test]
    fn circle_shape_is_rotation_invariant() {
        let shape = HitShape::Circle { radius: 1.0 };
        assert!(shape.contains(Vec2::new(0.5, 0.5)));
        assert!(!shape.contains(Vec2::new(1.0, 0.5)));
    }
}
