//! Renderer-facing output types: model registry, per-frame draw commands,
//! and the built-in unit meshes.
//!
//! The core never draws anything itself; it emits `DrawCmd`s against models
//! a frontend registered once at startup.

use glam::Vec2;
use std::collections::HashMap;

use crate::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId(pub u32);

#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

#[derive(Debug, Clone)]
pub struct Model {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Texture slot a frontend binds when executing a draw command. The core
/// only names the slot; what image backs it is the frontend's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Texture {
    AssassinVisible,
    AssassinInvisible,
    AssassinDagger,
    SweepRange,
    HoundBody,
    HoundMuzzle,
    RoundShot,
}

/// One instanced draw: model, world transform, texture slot, tint.
#[derive(Debug, Clone, Copy)]
pub struct DrawCmd {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub model: ModelId,
    pub texture: Texture,
    pub tint: [f32; 4],
}

/// Name-keyed model store. Registration is idempotent so every unit of an
/// archetype shares the same mesh ids.
#[derive(Default)]
pub struct AssetRegistry {
    by_name: HashMap<String, ModelId>,
    models: Vec<Model>,
}

impl AssetRegistry {
    pub fn register_model(&mut self, name: &str, build: impl FnOnce() -> Model) -> ModelId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = ModelId(self.models.len() as u32);
        self.models.push(build());
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id.0 as usize)
    }
}

/// Mesh ids for everything the core's render pass emits.
#[derive(Debug, Clone, Copy)]
pub struct UnitAssets {
    pub assassin_body: ModelId,
    pub assassin_dagger: ModelId,
    pub sweep_range: ModelId,
    pub hound_body: ModelId,
    pub hound_muzzle: ModelId,
    pub round_shot: ModelId,
}

impl UnitAssets {
    pub fn register(reg: &mut AssetRegistry) -> Self {
        Self {
            assassin_body: reg.register_model("unit/assassin_body", || circle(1.0, 24)),
            assassin_dagger: reg.register_model("unit/assassin_dagger", || quad(0.2, 1.0)),
            sweep_range: reg.register_model("unit/sweep_range", || quad(1.0, 1.0)),
            hound_body: reg.register_model("unit/hound_body", || quad(0.8, 1.0)),
            hound_muzzle: reg.register_model("unit/hound_muzzle", || {
                // Narrow barrel protruding from the hull toward +Y.
                quad_at(0.1, 0.6, Vec2::new(0.0, 0.6))
            }),
            round_shot: reg.register_model("projectile/round_shot", || circle(0.1, 12)),
        }
    }
}

/// Fixed palette cycled by player id, so colors are stable across runs.
pub fn player_color(id: PlayerId) -> [f32; 4] {
    const PALETTE: [[f32; 4]; 6] = [
        [0.9, 0.25, 0.2, 1.0],
        [0.2, 0.5, 0.9, 1.0],
        [0.25, 0.8, 0.3, 1.0],
        [0.9, 0.75, 0.2, 1.0],
        [0.7, 0.3, 0.85, 1.0],
        [0.2, 0.8, 0.8, 1.0],
    ];
    PALETTE[(id.0 as usize) % PALETTE.len()]
}

fn quad(half_w: f32, half_h: f32) -> Model {
    quad_at(half_w, half_h, Vec2::ZERO)
}

fn quad_at(half_w: f32, half_h: f32, center: Vec2) -> Model {
    let white = [1.0, 1.0, 1.0, 1.0];
    Model {
        vertices: vec![
            Vertex {
                pos: [center.x - half_w, center.y - half_h],
                color: white,
            },
            Vertex {
                pos: [center.x + half_w, center.y - half_h],
                color: white,
            },
            Vertex {
                pos: [center.x + half_w, center.y + half_h],
                color: white,
            },
            Vertex {
                pos: [center.x - half_w, center.y + half_h],
                color: white,
            },
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

fn circle(radius: f32, segments: u32) -> Model {
    let white = [1.0, 1.0, 1.0, 1.0];
    let mut vertices = vec![Vertex {
        pos: [0.0, 0.0],
        color: white,
    }];
    let mut indices = Vec::new();
    for i in 0..segments {
        let theta = (i as f32) / (segments as f32) * std::f32::consts::TAU;
        vertices.push(Vertex {
            pos: [radius * theta.cos(), radius * theta.sin()],
            color: white,
        });
        indices.extend_from_slice(&[0, 1 + i, 1 + (i + 1) % segments]);
    }
    Model { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_idempotent_by_name() {
        let mut reg = AssetRegistry::default();
        let a = reg.register_model("m", || quad(1.0, 1.0));
        let b = reg.register_model("m", || quad(2.0, 2.0));
        assert_eq!(a, b);
        // Second closure never ran.
        let m = reg.model(a).unwrap();
        assert_eq!(m.vertices[2].pos, [1.0, 1.0]);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(player_color(PlayerId(1)), player_color(PlayerId(7)));
        assert_ne!(player_color(PlayerId(1)), player_color(PlayerId(2)));
    }
}
