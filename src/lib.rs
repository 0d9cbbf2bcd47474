//! Harness crate: telemetry bootstrap and data loading around the
//! simulation core in `combat_core`.

use anyhow::Result;

pub use combat_core;
pub use data_specs;

pub mod telemetry;

/// Load gameplay parameter tables and the arena layout from `data/config/`,
/// falling back to compiled-in defaults where files are absent.
pub fn load_specs() -> Result<(combat_core::world::Specs, data_specs::map::MapSpec)> {
    let specs = combat_core::world::Specs {
        units: data_specs::units::UnitSpecDb::load_default()?,
        projectiles: data_specs::projectiles::ProjectileSpecDb::load_default()?,
    };
    let map = data_specs::map::MapSpec::load_default()?;
    Ok((specs, map))
}
