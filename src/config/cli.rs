use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "chip-etl")]
#[command(about = "Convert a CSV of NFT tickets into CHIP-0007 JSON records and a hashed output table")]
pub struct CliConfig {
    /// CSV file to read
    #[arg(short, long)]
    pub file: PathBuf,

    /// Team name (written as minting_tool; also the output directory name)
    #[arg(short, long)]
    pub team: String,

    /// Directory under which the team directory is created
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Name of the subdirectory holding one JSON file per row
    #[arg(long)]
    pub records_dir: Option<String>,

    /// collection.name written into every record
    #[arg(long)]
    pub collection_name: Option<String>,

    /// series_total written into every record
    #[arg(long)]
    pub series_total: Option<u64>,

    /// Append a "Hash" column name to the output header
    #[arg(long)]
    pub hash_header: bool,

    /// Write non-ASCII characters as UTF-8 instead of \u escapes
    #[arg(long)]
    pub utf8_json: bool,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入設定檔（若有指定）、合併命令列參數並驗證；失敗一律為設定錯誤
    pub fn resolve(self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let settings = self.into_settings(file_config.as_ref());
        settings.validate()?;
        Ok(settings)
    }

    /// 命令列 > 設定檔 > 預設值
    pub fn into_settings(self, file: Option<&TomlConfig>) -> Settings {
        let mut settings = Settings::new(self.file, self.team);

        if let Some(file) = file {
            settings = settings.apply_file(file);
        }

        if let Some(root) = self.output_dir {
            settings.output_root = root;
        }
        if let Some(records_dir) = self.records_dir {
            settings.records_dir = records_dir;
        }
        if let Some(name) = self.collection_name {
            settings.collection_name = name;
        }
        if let Some(total) = self.series_total {
            settings.series_total = total;
        }
        if self.hash_header {
            settings.hash_header = true;
        }
        if self.utf8_json {
            settings.utf8_json = true;
        }

        settings
    }
}
