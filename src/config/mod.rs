pub mod file;

use crate::domain::ports::StoreConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "svgstore")]
#[command(about = "Compile a directory of SVG icons into a single symbol store")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: StoreCommand,

    #[arg(long, global = true, default_value = "./svgstore")]
    pub source: PathBuf,

    #[arg(long, global = true, default_value = "./svgstore.svg")]
    pub destination: PathBuf,

    #[arg(long, global = true, help = "Read source/destination from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print the build result as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum StoreCommand {
    /// Create or update the store file from the source directory
    Create,
    /// Check whether the store file exists
    Exists,
    /// Remove the store file
    Remove,
}

impl CliConfig {
    /// Applies the optional TOML config file on top of the CLI arguments.
    pub fn resolved(mut self) -> Result<Self> {
        if let Some(path) = &self.config {
            let file = file::TomlConfig::load(path)?;
            self.source = file.source;
            self.destination = file.destination;
        }
        Ok(self)
    }
}

impl StoreConfig for CliConfig {
    fn source_dir(&self) -> &Path {
        &self.source
    }

    fn destination_file(&self) -> &Path {
        &self.destination
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source", &self.source)?;
        validate_path("destination", &self.destination)?;
        validate_file_name("destination", &self.destination)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            command: StoreCommand::Create,
            source: PathBuf::from("./svgstore"),
            destination: PathBuf::from("./svgstore.svg"),
            config: None,
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_defaults_validate() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut config = base_config();
        config.source = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolved_without_file_is_identity() {
        let config = base_config().resolved().unwrap();
        assert_eq!(config.source, PathBuf::from("./svgstore"));
        assert_eq!(config.destination, PathBuf::from("./svgstore.svg"));
    }
}
