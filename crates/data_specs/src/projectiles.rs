//! Projectile parameter table shared by all spawners.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectileSpecDb {
    /// Muzzle speed in world units per second.
    pub speed: f32,
    /// Damage applied on hit is `base_damage * damage_scale` of the round.
    pub base_damage: f32,
    /// Damage scale of the low-damage probe round.
    pub probe_scale: f32,
    /// Damage scale of tracer rounds. Tracers pierce and deal no damage.
    pub tracer_scale: f32,
    /// Slow applied to a victim of the full-damage payload round.
    pub payload_slow_factor: f32,
    pub payload_slow_duration_s: f32,
}

impl Default for ProjectileSpecDb {
    fn default() -> Self {
        Self {
            speed: 30.0,
            base_damage: 10.0,
            probe_scale: 0.02,
            tracer_scale: 0.0,
            payload_slow_factor: 0.7,
            payload_slow_duration_s: 1.0,
        }
    }
}

impl ProjectileSpecDb {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/projectiles.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let db: Self = toml::from_str(&txt).context("parse projectiles TOML")?;
            Ok(db)
        } else {
            Ok(Self::default())
        }
    }
}
