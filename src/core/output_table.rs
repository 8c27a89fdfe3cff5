use crate::domain::model::{InputRow, RecordHash};
use crate::utils::error::{EtlError, Result};
use std::io::{self, Write};

pub const HASH_COLUMN: &str = "Hash";
pub const OUTPUT_TABLE_SUFFIX: &str = ".output.csv";

/// 輸出表格：原始欄位照原順序寫出，最後附加雜湊值。
/// 輸入已有 `Hash` 欄時，直接覆寫該欄的值，不再附加
pub struct OutputTableWriter<W: Write> {
    writer: csv::Writer<W>,
    hash_header: bool,
    hash_index: Option<usize>,
    rows_written: usize,
}

impl<W: Write> OutputTableWriter<W> {
    pub fn new(sink: W, hash_header: bool) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(sink);

        Self {
            writer,
            hash_header,
            hash_index: None,
            rows_written: 0,
        }
    }

    pub fn write_header(&mut self, columns: &[String]) -> Result<()> {
        self.hash_index = columns.iter().position(|c| c == HASH_COLUMN);

        if self.hash_index.is_some() {
            tracing::info!("Input already has a '{}' column; its values will be replaced", HASH_COLUMN);
            self.writer.write_record(columns)?;
        } else if self.hash_header {
            let header = columns.iter().map(String::as_str).chain([HASH_COLUMN]);
            self.writer.write_record(header)?;
        } else {
            tracing::warn!(
                "Output header keeps the original {} columns; rows carry an extra trailing hash field (use --hash-header to name it)",
                columns.len()
            );
            self.writer.write_record(columns)?;
        }
        Ok(())
    }

    pub fn write_row(&mut self, row: &InputRow, hash: &RecordHash) -> Result<()> {
        match self.hash_index {
            Some(index) => {
                let fields = row
                    .values()
                    .iter()
                    .enumerate()
                    .map(|(i, v)| if i == index { hash.as_str() } else { v.as_str() });
                self.writer.write_record(fields)?;
            }
            None => {
                let fields = row
                    .values()
                    .iter()
                    .map(String::as_str)
                    .chain([hash.as_str()]);
                self.writer.write_record(fields)?;
            }
        }
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| EtlError::IoError(io::Error::new(e.error().kind(), e.error().to_string())))
    }
}
