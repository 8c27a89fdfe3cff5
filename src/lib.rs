pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, Settings};
pub use core::etl::EtlEngine;
pub use domain::model::{ChipRecord, Collection, InputRow, RecordHash, RunSummary};
pub use utils::error::{EtlError, Result};
