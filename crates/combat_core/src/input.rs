//! Per-player input snapshot consumed by the simulation.
//!
//! The core never polls devices; collaborators write an [`InputState`]
//! between ticks and `GameCore` snapshots all of them at tick start.

use glam::Vec2;

use crate::PlayerId;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_forward: bool,
    pub move_back: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub skill_q: bool,
    pub skill_e: bool,
    /// Primary trigger (attack / confirm).
    pub primary: bool,
    /// World-space cursor position.
    pub cursor: Vec2,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub input: InputState,
    pub color: [f32; 4],
}
