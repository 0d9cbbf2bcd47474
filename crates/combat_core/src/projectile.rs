//! Short-lived spawned entities resolved against obstacles and units.

use glam::Vec2;

use crate::{PlayerId, ProjectileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjKind {
    /// Low-damage opening shot of a burst.
    Probe,
    /// Zero-damage burst filler; pierces through units.
    Tracer,
    /// The single full-damage shot closing a burst.
    Payload,
}

impl ProjKind {
    /// Whether a unit hit consumes the projectile.
    #[inline]
    pub fn pierces(&self) -> bool {
        matches!(self, ProjKind::Tracer)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub id: ProjectileId,
    /// Owning player; the projectile never strikes this player's own units.
    pub player: PlayerId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage_scale: f32,
    pub spawn_tick: u64,
    pub kind: ProjKind,
}

/// Spawn request buffered during the unit-update phase and admitted by the
/// core before projectile resolution.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSpawn {
    pub player: PlayerId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage_scale: f32,
    pub kind: ProjKind,
}
