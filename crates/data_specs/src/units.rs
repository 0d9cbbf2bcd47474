//! Per-archetype unit stat tables.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Stats for the melee assassin archetype.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssassinSpec {
    pub max_health: f32,
    /// Forward movement speed in world units per second.
    pub speed: f32,
    pub damage_scale: f32,
    pub armor: f32,
    /// Local-space hit circle radius.
    pub hit_radius: f32,
    pub invisible_cooldown_s: f32,
    pub invisible_duration_s: f32,
    pub teleport_cooldown_s: f32,
    pub dagger_cooldown_s: f32,
    /// Base damage per dagger sweep hit, before the attacker's damage scale.
    pub dagger_damage: f32,
    /// Annular band for the dagger sweep, inner/outer radius.
    pub dagger_inner: f32,
    pub dagger_outer: f32,
    /// Cosine of the sweep half-angle against the facing direction.
    pub dagger_cos_half_angle: f32,
}

impl Default for AssassinSpec {
    fn default() -> Self {
        Self {
            max_health: 50.0,
            speed: 15.0,
            damage_scale: 1.0,
            armor: 0.0,
            hit_radius: 1.0,
            invisible_cooldown_s: 40.0,
            invisible_duration_s: 10.0,
            teleport_cooldown_s: 120.0,
            dagger_cooldown_s: 0.1,
            dagger_damage: 1.0,
            dagger_inner: std::f32::consts::SQRT_2,
            dagger_outer: 2.0 * std::f32::consts::SQRT_2,
            dagger_cos_half_angle: std::f32::consts::SQRT_2 / 2.0,
        }
    }
}

/// Stats for the ranged burst-fire hound archetype.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HoundSpec {
    pub max_health: f32,
    pub speed: f32,
    pub damage_scale: f32,
    pub armor: f32,
    /// Local-space hit rectangle half extents.
    pub hit_half_width: f32,
    pub hit_half_height: f32,
    /// Body rotation rate in degrees per second.
    pub rotate_speed_deg: f32,
    /// Muzzle tip offset along the muzzle direction.
    pub muzzle_offset: f32,
}

impl Default for HoundSpec {
    fn default() -> Self {
        Self {
            max_health: 50.0,
            speed: 3.0,
            damage_scale: 0.8,
            armor: 0.0,
            hit_half_width: 0.8,
            hit_half_height: 1.0,
            rotate_speed_deg: 180.0,
            muzzle_offset: 1.2,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UnitSpecDb {
    pub assassin: AssassinSpec,
    pub hound: HoundSpec,
}

impl UnitSpecDb {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/units.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let db: Self = toml::from_str(&txt).context("parse units TOML")?;
            Ok(db)
        } else {
            Ok(Self::default())
        }
    }
}
