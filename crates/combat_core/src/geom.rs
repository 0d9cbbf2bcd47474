//! Local/world frame transforms and small geometry helpers.
//!
//! Convention carried through the whole core: rotation 0 faces +Y, so a
//! unit's forward vector is `(-sin θ, cos θ)`.

use glam::Vec2;

/// Rotate `v` counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

/// Forward direction for a given rotation.
#[inline]
pub fn facing(rotation: f32) -> Vec2 {
    rotate(Vec2::Y, rotation)
}

/// Transform a world-space point into the local frame at `origin`/`rotation`.
#[inline]
pub fn world_to_local(p: Vec2, origin: Vec2, rotation: f32) -> Vec2 {
    rotate(p - origin, -rotation)
}

/// Transform a local-space point back into world space.
#[inline]
pub fn local_to_world(p: Vec2, origin: Vec2, rotation: f32) -> Vec2 {
    origin + rotate(p, rotation)
}

/// Axis-aligned obstacle footprint.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
