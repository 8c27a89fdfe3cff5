use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub const CHIP_FORMAT: &str = "CHIP-0007";
pub const DEFAULT_COLLECTION_NAME: &str = "Zuri NFT Tickets for Free Lunch";
pub const DEFAULT_SERIES_TOTAL: u64 = 400;

/// 輸入表格的一列；欄位順序與表頭相同
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    columns: Arc<[String]>,
    values: Vec<String>,
    line: u64,
}

impl InputRow {
    pub fn new(columns: Arc<[String]>, values: Vec<String>, line: u64) -> Self {
        Self {
            columns,
            values,
            line,
        }
    }

    pub fn get(&self, column: &str) -> Result<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
            .ok_or_else(|| EtlError::MissingColumnError {
                column: column.to_string(),
                line: self.line,
            })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn line(&self) -> u64 {
        self.line
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    pub id: String,
    pub attributes: Vec<serde_json::Value>,
}

/// CHIP-0007 紀錄；欄位宣告順序即輸出 JSON 的鍵順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipRecord {
    pub format: String,
    pub name: String,
    pub description: String,
    pub minting_tool: String,
    pub sensitive_content: bool,
    pub series_number: String,
    pub series_total: u64,
    pub attributes: Vec<serde_json::Value>,
    pub collection: Collection,
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl ChipRecord {
    /// 空白模板，尚未填入任何列資料
    pub fn template(collection_name: &str, series_total: u64) -> Self {
        Self {
            format: CHIP_FORMAT.to_string(),
            name: String::new(),
            description: String::new(),
            minting_tool: String::new(),
            sensitive_content: false,
            series_number: String::new(),
            series_total,
            attributes: Vec::new(),
            collection: Collection {
                name: collection_name.to_string(),
                id: String::new(),
                attributes: Vec::new(),
            },
            data: serde_json::Map::new(),
        }
    }
}

impl Default for ChipRecord {
    fn default() -> Self {
        Self::template(DEFAULT_COLLECTION_NAME, DEFAULT_SERIES_TOTAL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordHash(String);

impl RecordHash {
    pub fn new(hex_digest: String) -> Self {
        Self(hex_digest)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_processed: usize,
    pub records_dir: PathBuf,
    pub output_table: PathBuf,
}
