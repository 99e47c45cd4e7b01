use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// TOML configuration file: just the source/destination path pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl TomlConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
