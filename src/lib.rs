pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{file::TomlConfig, CliConfig, StoreCommand};
pub use crate::core::builder::StoreBuilder;
pub use crate::core::store::StoreRepository;
pub use crate::core::{render, walker};
pub use crate::domain::model::{BuildResult, IconDocument, IconElement, RemoveOutcome};
pub use crate::domain::ports::StoreConfig;
pub use crate::utils::error::{Result, SvgstoreError};
