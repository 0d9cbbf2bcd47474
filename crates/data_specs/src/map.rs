//! Arena layout: world bounds and static obstacle footprints.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ObstacleSpec {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapSpec {
    /// Positions with |x| or |y| beyond this are out of range.
    pub half_extent: f32,
    pub obstacles: Vec<ObstacleSpec>,
}

impl Default for MapSpec {
    fn default() -> Self {
        Self {
            half_extent: 10.0,
            // A single central pillar; enough to exercise movement blocking.
            obstacles: vec![ObstacleSpec {
                min: [-1.0, -1.0],
                max: [1.0, 1.0],
            }],
        }
    }
}

impl MapSpec {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/map.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let spec: Self = toml::from_str(&txt).context("parse map TOML")?;
            Ok(spec)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_map_has_bounds_and_pillar() {
        let m = MapSpec::load_default().expect("load");
        assert!(m.half_extent > 0.0);
        assert!(!m.obstacles.is_empty());
    }
}
