use crate::core::json;
use crate::domain::model::{ChipRecord, RecordHash};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::hashing::sha256_hex;
use std::path::{Path, PathBuf};

pub const RECORD_FILE_SUFFIX: &str = "output.json";

/// 每筆紀錄寫成 `<name>output.json`，再讀回檔案計算雜湊
pub struct RecordWriter<'a, S: Storage> {
    storage: &'a S,
    records_dir: PathBuf,
    escape_non_ascii: bool,
}

impl<'a, S: Storage> RecordWriter<'a, S> {
    pub fn new(storage: &'a S, records_dir: impl Into<PathBuf>, escape_non_ascii: bool) -> Self {
        Self {
            storage,
            records_dir: records_dir.into(),
            escape_non_ascii,
        }
    }

    pub fn records_dir(&self) -> &Path {
        &self.records_dir
    }

    pub fn record_path(&self, record: &ChipRecord) -> PathBuf {
        self.records_dir
            .join(format!("{}{}", record.name, RECORD_FILE_SUFFIX))
    }

    pub fn write(&self, record: &ChipRecord) -> Result<RecordHash> {
        self.storage.create_dir_all(&self.records_dir)?;

        let bytes = json::to_pretty_bytes(record, self.escape_non_ascii)?;
        let path = self.record_path(record);
        self.storage.write_file(&path, &bytes)?;

        // 以實際落地的位元組計算雜湊
        let persisted = self.storage.read_file(&path)?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), persisted.len());

        Ok(RecordHash::new(sha256_hex(&persisted)))
    }
}
