//! Gameplay parameter tables.
//!
//! Every table ships compiled-in defaults and optionally overrides them from
//! a TOML file under the workspace `data/config/` directory, so tests and
//! tools can run from any crate without staging data files.

use std::path::PathBuf;

pub mod map;
pub mod projectiles;
pub mod telemetry;
pub mod units;

/// Resolve the workspace `data/` directory, falling back to a crate-local one.
pub(crate) fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}
