// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and restores the SDMNet hyper-parameters as JSON so a
// network with the same architecture can be rebuilt later.
//
// File layout:
//   <dir>/
//     sdmnet_config.json   ← in_features, num_classes, num_filts, ...
//
// Learned weights are not stored here.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::ml::model::SdmNetConfig;

const CONFIG_FILE: &str = "sdmnet_config.json";

/// Reads and writes the network config inside one directory.
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Write the config as pretty JSON, creating the directory if needed.
    pub fn save(&self, cfg: &SdmNetConfig) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create config directory '{}'", self.dir.display()))?;

        let path = self.path();
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved network config to '{}'", path.display());
        Ok(path)
    }

    pub fn load(&self) -> Result<SdmNetConfig> {
        let path = self.path();
        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config from '{}'. Run 'init-config' first.",
                path.display()
            )
        })?;

        let cfg: SdmNetConfig = serde_json::from_str(&json)
            .with_context(|| format!("Malformed config in '{}'", path.display()))?;
        tracing::debug!("Loaded network config from '{}'", path.display());
        Ok(cfg)
    }
}
