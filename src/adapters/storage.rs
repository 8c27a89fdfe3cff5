use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// 本機檔案系統；路徑一律由呼叫端給出完整位置，不依賴目前工作目錄之外的狀態
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn open_reader(&self, path: &Path) -> Result<Box<dyn Read>> {
        let file = File::open(path).map_err(|e| EtlError::file_access(path, e))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn create_writer(&self, path: &Path) -> Result<Box<dyn Write>> {
        let file = File::create(path).map_err(|e| EtlError::file_access(path, e))?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| EtlError::file_access(path, e))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|e| EtlError::file_access(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| EtlError::file_access(path, e))
    }
}
