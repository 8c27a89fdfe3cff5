#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{DEFAULT_COLLECTION_NAME, DEFAULT_SERIES_TOTAL};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_dir_name, validate_non_empty_string, validate_path, validate_positive_number,
    Validate,
};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_RECORDS_DIR: &str = "chips";

/// 執行一次轉換所需的完整設定
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input_path: PathBuf,
    pub team_name: String,
    pub output_root: PathBuf,
    pub records_dir: String,
    pub collection_name: String,
    pub series_total: u64,
    pub hash_header: bool,
    pub utf8_json: bool,
}

impl Settings {
    pub fn new(input_path: impl Into<PathBuf>, team_name: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            team_name: team_name.into(),
            output_root: PathBuf::from("."),
            records_dir: DEFAULT_RECORDS_DIR.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            series_total: DEFAULT_SERIES_TOTAL,
            hash_header: false,
            utf8_json: false,
        }
    }

    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    pub fn apply_file(mut self, file: &TomlConfig) -> Self {
        if let Some(root) = &file.output.root {
            self.output_root = root.clone();
        }
        if let Some(records_dir) = &file.output.records_dir {
            self.records_dir = records_dir.clone();
        }
        if let Some(hash_header) = file.output.hash_header {
            self.hash_header = hash_header;
        }
        if let Some(utf8_json) = file.output.utf8_json {
            self.utf8_json = utf8_json;
        }
        if let Some(name) = &file.collection.name {
            self.collection_name = name.clone();
        }
        if let Some(total) = file.collection.series_total {
            self.series_total = total;
        }
        self
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.input_path.to_string_lossy())?;
        // 隊名原樣寫入 minting_tool，只擋掉無法成為路徑的值
        validate_path("team", &self.team_name)?;
        validate_path("output_dir", &self.output_root.to_string_lossy())?;
        validate_dir_name("records_dir", &self.records_dir)?;
        validate_positive_number("series_total", self.series_total, 1)?;
        validate_non_empty_string("collection_name", &self.collection_name)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn team_name(&self) -> &str {
        &self.team_name
    }

    fn output_root(&self) -> &Path {
        &self.output_root
    }

    fn records_dir_name(&self) -> &str {
        &self.records_dir
    }

    fn collection_name(&self) -> &str {
        &self.collection_name
    }

    fn series_total(&self) -> u64 {
        self.series_total
    }

    fn hash_header(&self) -> bool {
        self.hash_header
    }

    fn utf8_json(&self) -> bool {
        self.utf8_json
    }
}
