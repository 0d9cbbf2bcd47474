//! Harness telemetry configuration.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelemetryCfg {
    /// EnvFilter directive, e.g. "info" or "combat_core=debug".
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
    /// Optional Prometheus exporter listen address, e.g. "127.0.0.1:9100".
    pub metrics_addr: Option<String>,
}

impl TelemetryCfg {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/telemetry.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let cfg: Self = toml::from_str(&txt).context("parse telemetry TOML")?;
            Ok(cfg)
        } else {
            Ok(Self::default())
        }
    }
}
