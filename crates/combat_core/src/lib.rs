//! Deterministic tick-based arena combat core.
//!
//! One [`world::GameCore::tick`] call is one atomic simulation step: unit
//! updates observe a frozen snapshot of the pre-tick world and request
//! mutation through a deferred event queue, which the core applies after all
//! units have decided. Rendering and input collaborators sit outside the
//! simulation contract: input arrives as an already-decoded per-player
//! snapshot and draw output is a one-way command list.

pub mod events;
pub mod geom;
pub mod input;
pub mod projectile;
pub mod render;
pub mod skill;
pub mod status;
pub mod unit;
pub mod units;
pub mod world;

/// Fixed simulation rate.
pub const TICKS_PER_SECOND: u32 = 30;
pub const SECONDS_PER_TICK: f32 = 1.0 / TICKS_PER_SECOND as f32;

/// Stable unit identifier; never reused while the world lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileId(pub u32);

/// Convert a duration in seconds to whole simulation ticks.
#[inline]
pub fn ticks(seconds: f32) -> u32 {
    (seconds * TICKS_PER_SECOND as f32).round() as u32
}
