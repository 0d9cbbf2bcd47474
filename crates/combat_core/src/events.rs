//! Deferred mutation requests.
//!
//! Units decide against a frozen snapshot and enqueue these; `GameCore`
//! applies the whole queue after every unit has updated. Same-kind events on
//! the same entity apply in enqueue order (last write wins for move/rotate);
//! damage amounts are independent subtractions.

use glam::Vec2;

use crate::{PlayerId, UnitId};

#[derive(Debug, Clone, Copy)]
pub enum Event {
    MoveUnit {
        id: UnitId,
        to: Vec2,
    },
    RotateUnit {
        id: UnitId,
        to: f32,
    },
    DealDamage {
        target: UnitId,
        src_player: PlayerId,
        amount: f32,
    },
}

#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    pub fn push_move(&mut self, id: UnitId, to: Vec2) {
        self.events.push(Event::MoveUnit { id, to });
    }

    pub fn push_rotate(&mut self, id: UnitId, to: f32) {
        self.events.push(Event::RotateUnit { id, to });
    }

    pub fn push_damage(&mut self, target: UnitId, src_player: PlayerId, amount: f32) {
        self.events.push(Event::DealDamage {
            target,
            src_player,
            amount,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take everything queued this tick, leaving the queue clear.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
