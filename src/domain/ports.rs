use crate::utils::error::Result;
use std::io::{Read, Write};
use std::path::Path;

/// 檔案系統介面；所有讀寫都經過這裡，測試時可換成記憶體實作
pub trait Storage {
    fn open_reader(&self, path: &Path) -> Result<Box<dyn Read>>;
    fn create_writer(&self, path: &Path) -> Result<Box<dyn Write>>;
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn team_name(&self) -> &str;
    fn output_root(&self) -> &Path;
    fn records_dir_name(&self) -> &str;
    fn collection_name(&self) -> &str;
    fn series_total(&self) -> u64;
    fn hash_header(&self) -> bool;
    fn utf8_json(&self) -> bool;
}
