//! Game core: exclusive owner of all persistent simulation state and the
//! driver of the per-tick pipeline.
//!
//! Tick order: (1) freeze per-player input, (2) update every unit against a
//! snapshot captured before any update ran, (3) admit spawned projectiles
//! and resolve all projectiles, (4) apply the deferred event queue, (5) tick
//! and prune effects, (6) prune dead units. The snapshot plus deferred queue
//! is the sole concurrency mechanism; nothing here may be reordered into
//! direct mutation during the update pass.

use std::collections::HashMap;

use glam::Vec2;

use data_specs::map::MapSpec;
use data_specs::projectiles::ProjectileSpecDb;
use data_specs::units::UnitSpecDb;

use crate::events::{Event, EventQueue};
use crate::geom::Aabb;
use crate::input::{InputState, Player};
use crate::projectile::{ProjKind, Projectile, ProjectileSpawn};
use crate::render::{self, DrawCmd, Texture, UnitAssets};
use crate::status::{self, ActiveEffect, EffectKind};
use crate::unit::{Unit, UnitKind};
use crate::units;
use crate::{PlayerId, ProjectileId, SECONDS_PER_TICK, UnitId, geom, ticks};

/// Bundled gameplay parameter tables.
#[derive(Debug, Clone, Default)]
pub struct Specs {
    pub units: UnitSpecDb,
    pub projectiles: ProjectileSpecDb,
}

/// Read-only copy of one unit's observable state at tick start.
#[derive(Debug, Clone, Copy)]
pub struct UnitView {
    pub id: UnitId,
    pub player: PlayerId,
    pub pos: Vec2,
    pub rotation: f32,
    pub health: f32,
    pub invisible: bool,
}

/// Frozen world observed by every unit during the update pass.
#[derive(Debug, Clone)]
pub struct WorldView {
    pub tick: u64,
    units: Vec<UnitView>,
}

impl WorldView {
    fn capture(tick: u64, units: &[Unit]) -> Self {
        let units = units
            .iter()
            .map(|u| UnitView {
                id: u.id,
                player: u.player,
                pos: u.pos,
                rotation: u.rotation,
                health: u.health,
                invisible: u.status.invisible,
            })
            .collect();
        Self { tick, units }
    }

    pub fn units(&self) -> &[UnitView] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitView> {
        self.units.iter().find(|u| u.id == id)
    }
}

/// Everything a unit may read while deciding its tick.
pub struct UpdateCtx<'a> {
    pub view: &'a WorldView,
    inputs: &'a HashMap<PlayerId, InputState>,
    obstacles: &'a [Aabb],
    half_extent: f32,
    pub specs: &'a Specs,
}

impl UpdateCtx<'_> {
    pub fn input(&self, player: PlayerId) -> Option<&InputState> {
        self.inputs.get(&player)
    }

    pub fn is_blocked_by_obstacles(&self, p: Vec2) -> bool {
        self.obstacles.iter().any(|o| o.contains(p))
    }

    pub fn is_out_of_range(&self, p: Vec2) -> bool {
        p.x.abs() > self.half_extent || p.y.abs() > self.half_extent
    }
}

pub struct GameCore {
    tick: u64,
    players: Vec<Player>,
    units: Vec<Unit>,
    projectiles: Vec<Projectile>,
    queue: EventQueue,
    spawn_buf: Vec<ProjectileSpawn>,
    input_snapshot: HashMap<PlayerId, InputState>,
    obstacles: Vec<Aabb>,
    half_extent: f32,
    specs: Specs,
    next_unit_id: u32,
    next_projectile_id: u32,
    next_player_id: u32,
}

impl GameCore {
    pub fn new(specs: Specs, map: &MapSpec) -> Self {
        let obstacles = map
            .obstacles
            .iter()
            .map(|o| Aabb {
                min: Vec2::from(o.min),
                max: Vec2::from(o.max),
            })
            .collect();
        Self {
            tick: 0,
            players: Vec::new(),
            units: Vec::new(),
            projectiles: Vec::new(),
            queue: EventQueue::default(),
            spawn_buf: Vec::new(),
            input_snapshot: HashMap::new(),
            obstacles,
            half_extent: map.half_extent,
            specs,
            next_unit_id: 1,
            next_projectile_id: 1,
            next_player_id: 1,
        }
    }

    /// World built entirely from compiled-in defaults; used by tests.
    pub fn with_defaults() -> Self {
        Self::new(Specs::default(), &MapSpec::default())
    }

    // ---- players ----------------------------------------------------------

    pub fn add_player(&mut self) -> PlayerId {
        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        self.players.push(Player {
            id,
            input: InputState::default(),
            color: render::player_color(id),
        });
        id
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_color(&self, id: PlayerId) -> [f32; 4] {
        self.player(id)
            .map(|p| p.color)
            .unwrap_or([1.0, 1.0, 1.0, 1.0])
    }

    /// Write a player's input for the next tick. Has no effect on the tick
    /// currently being simulated; inputs are snapshotted at tick start.
    pub fn set_input(&mut self, id: PlayerId, input: InputState) {
        if let Some(p) = self.players.iter_mut().find(|p| p.id == id) {
            p.input = input;
        } else {
            log::warn!("sim: input for unknown player {}", id.0);
        }
    }

    // ---- spawning ---------------------------------------------------------

    fn next_unit_id(&mut self) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        id
    }

    pub fn spawn_assassin(&mut self, player: PlayerId, pos: Vec2) -> UnitId {
        let id = self.next_unit_id();
        let u = units::assassin::spawn(id, player, pos, &self.specs.units.assassin);
        log::info!("sim: spawned assassin {} for player {}", id.0, player.0);
        self.units.push(u);
        id
    }

    pub fn spawn_hound(&mut self, player: PlayerId, pos: Vec2) -> UnitId {
        let id = self.next_unit_id();
        let u = units::hound::spawn(id, player, pos, &self.specs.units.hound);
        log::info!("sim: spawned hound {} for player {}", id.0, player.0);
        self.units.push(u);
        id
    }

    // ---- queries ----------------------------------------------------------

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn is_blocked_by_obstacles(&self, p: Vec2) -> bool {
        self.obstacles.iter().any(|o| o.contains(p))
    }

    pub fn is_out_of_range(&self, p: Vec2) -> bool {
        p.x.abs() > self.half_extent || p.y.abs() > self.half_extent
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn specs(&self) -> &Specs {
        &self.specs
    }

    /// Round reset: drop all units and projectiles, keep players.
    pub fn reset(&mut self) {
        log::info!("sim: round reset");
        self.units.clear();
        self.projectiles.clear();
        self.spawn_buf.clear();
        let _ = self.queue.drain();
    }

    // ---- tick pipeline ----------------------------------------------------

    /// One atomic simulation step.
    pub fn tick(&mut self) {
        let t0 = std::time::Instant::now();

        // 1) Freeze input.
        self.input_snapshot.clear();
        for p in &self.players {
            self.input_snapshot.insert(p.id, p.input);
        }

        // 2) Update every unit against the pre-tick snapshot. Units enqueue
        //    events and projectile spawns; they never touch world state.
        let view = WorldView::capture(self.tick, &self.units);
        let ctx = UpdateCtx {
            view: &view,
            inputs: &self.input_snapshot,
            obstacles: &self.obstacles,
            half_extent: self.half_extent,
            specs: &self.specs,
        };
        for u in self.units.iter_mut() {
            units::update(u, &ctx, &mut self.queue, &mut self.spawn_buf);
        }
        drop(ctx);

        // 3) Admit this tick's spawns, then integrate and resolve.
        let spawns = std::mem::take(&mut self.spawn_buf);
        for s in spawns {
            self.admit_projectile(s);
        }
        self.step_projectiles();

        // 4) Apply the deferred queue.
        self.apply_events();

        // 5) Effect bookkeeping.
        for u in &mut self.units {
            status::tick_effects(&mut u.effects);
        }

        // 6) Prune the dead.
        self.prune_dead();

        self.tick += 1;
        metrics::histogram!("tick.ms").record(t0.elapsed().as_secs_f64() * 1000.0);
    }

    fn admit_projectile(&mut self, s: ProjectileSpawn) {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id = self.next_projectile_id.wrapping_add(1);
        self.projectiles.push(Projectile {
            id,
            player: s.player,
            pos: s.pos,
            vel: s.vel,
            damage_scale: s.damage_scale,
            spawn_tick: self.tick,
            kind: s.kind,
        });
        metrics::counter!("sim.projectiles_spawned").increment(1);
    }

    /// Move every projectile one tick and resolve it against obstacles,
    /// bounds and unit hit regions. Unit damage goes through the queue;
    /// consumption follows the per-kind hit policy.
    fn step_projectiles(&mut self) {
        let Self {
            projectiles,
            units,
            queue,
            obstacles,
            half_extent,
            specs,
            ..
        } = self;
        let he = *half_extent;
        projectiles.retain_mut(|p| {
            p.pos += p.vel * SECONDS_PER_TICK;
            if p.pos.x.abs() > he || p.pos.y.abs() > he {
                return false;
            }
            if obstacles.iter().any(|o| o.contains(p.pos)) {
                return false;
            }
            let mut consumed = false;
            for u in units.iter_mut() {
                // Own units and invisible targets cannot be struck.
                if u.player == p.player || u.status.invisible || !u.alive() {
                    continue;
                }
                if u.hit_test(p.pos) {
                    let amount = specs.projectiles.base_damage * p.damage_scale;
                    if amount > 0.0 {
                        queue.push_damage(u.id, p.player, amount);
                    }
                    if p.kind == ProjKind::Payload {
                        status::apply_effect(
                            &mut u.effects,
                            ActiveEffect::new(
                                p.player,
                                ticks(specs.projectiles.payload_slow_duration_s),
                                EffectKind::Slow {
                                    factor: specs.projectiles.payload_slow_factor,
                                },
                            ),
                        );
                    }
                    if !p.kind.pierces() {
                        consumed = true;
                        break;
                    }
                }
            }
            !consumed
        });
    }

    /// Apply the queue in enqueue order. Move/rotate are last-write-wins by
    /// construction; damage amounts are independent subtractions. Events for
    /// ids pruned earlier in the tick are dropped silently.
    fn apply_events(&mut self) {
        for ev in self.queue.drain() {
            match ev {
                Event::MoveUnit { id, to } => {
                    if let Some(u) = self.units.iter_mut().find(|u| u.id == id) {
                        u.pos = to;
                    } else {
                        log::debug!("sim: dropping move for missing unit {}", id.0);
                    }
                }
                Event::RotateUnit { id, to } => {
                    if let Some(u) = self.units.iter_mut().find(|u| u.id == id) {
                        u.rotation = to;
                    } else {
                        log::debug!("sim: dropping rotate for missing unit {}", id.0);
                    }
                }
                Event::DealDamage {
                    target,
                    src_player,
                    amount,
                } => {
                    if let Some(u) = self.units.iter_mut().find(|u| u.id == target) {
                        let applied = amount / u.status.armor_scale.max(1e-3);
                        u.health -= applied;
                        u.last_hit_by = Some(src_player);
                    } else {
                        log::debug!("sim: dropping damage for missing unit {}", target.0);
                    }
                }
            }
        }
    }

    fn prune_dead(&mut self) {
        self.units.retain(|u| {
            if u.alive() {
                return true;
            }
            match u.last_hit_by {
                Some(p) => log::info!(
                    "sim: {} {} of player {} slain by player {}",
                    u.archetype_name(),
                    u.id.0,
                    u.player.0,
                    p.0
                ),
                None => log::info!(
                    "sim: {} {} of player {} died",
                    u.archetype_name(),
                    u.id.0,
                    u.player.0
                ),
            }
            metrics::counter!("sim.unit_deaths").increment(1);
            false
        });
    }

    // ---- render output ----------------------------------------------------

    /// Build this frame's draw command list from settled post-tick state.
    /// Purely an output; nothing here feeds back into the simulation.
    pub fn render(&self, assets: &UnitAssets) -> Vec<DrawCmd> {
        let mut out = Vec::new();
        for u in &self.units {
            let color = self.player_color(u.player);
            match &u.kind {
                UnitKind::Assassin(st) => {
                    let (texture, tint) = if u.status.invisible {
                        (
                            Texture::AssassinInvisible,
                            [color[0], color[1], color[2], 0.5],
                        )
                    } else {
                        (Texture::AssassinVisible, color)
                    };
                    out.push(DrawCmd {
                        position: u.pos,
                        rotation: u.rotation,
                        scale: Vec2::ONE,
                        model: assets.assassin_body,
                        texture,
                        tint,
                    });
                    if st.teleport_armed {
                        // Ghost preview at the cursor while the blink is armed.
                        if let Some(p) = self.player(u.player) {
                            let cur = p.input.cursor;
                            if !self.is_out_of_range(cur) && !self.is_blocked_by_obstacles(cur) {
                                out.push(DrawCmd {
                                    position: cur,
                                    rotation: u.rotation,
                                    scale: Vec2::ONE,
                                    model: assets.assassin_body,
                                    texture: Texture::AssassinInvisible,
                                    tint: [1.0, 1.0, 1.0, 0.5],
                                });
                            }
                        }
                    } else {
                        let fwd = geom::facing(u.rotation);
                        out.push(DrawCmd {
                            position: u.pos + (std::f32::consts::SQRT_2 * 1.5) * fwd,
                            rotation: u.rotation + 135f32.to_radians(),
                            scale: Vec2::splat(0.5),
                            model: assets.assassin_dagger,
                            texture: Texture::AssassinDagger,
                            tint: color,
                        });
                        out.push(DrawCmd {
                            position: u.pos + 2.0 * fwd,
                            rotation: u.rotation - 45f32.to_radians(),
                            scale: Vec2::splat(std::f32::consts::SQRT_2),
                            model: assets.sweep_range,
                            texture: Texture::SweepRange,
                            tint: [1.0, 1.0, 1.0, 0.1],
                        });
                    }
                }
                UnitKind::Hound(st) => {
                    out.push(DrawCmd {
                        position: u.pos,
                        rotation: u.rotation,
                        scale: Vec2::ONE,
                        model: assets.hound_body,
                        texture: Texture::HoundBody,
                        tint: color,
                    });
                    out.push(DrawCmd {
                        position: u.pos,
                        rotation: st.muzzle_rotation,
                        scale: Vec2::ONE,
                        model: assets.hound_muzzle,
                        texture: Texture::HoundMuzzle,
                        tint: color,
                    });
                }
            }
        }
        for p in &self.projectiles {
            let tint = match p.kind {
                ProjKind::Tracer => [1.0, 1.0, 1.0, 0.3],
                _ => self.player_color(p.player),
            };
            out.push(DrawCmd {
                position: p.pos,
                rotation: 0.0,
                scale: Vec2::ONE,
                model: assets.round_shot,
                texture: Texture::RoundShot,
                tint,
            });
        }
        out
    }
}
