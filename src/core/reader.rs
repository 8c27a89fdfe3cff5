use crate::domain::model::InputRow;
use crate::utils::error::Result;
use std::io::Read;
use std::sync::Arc;

/// 逐列讀取輸入 CSV；第一列為表頭，只能走訪一次
pub struct RowReader<R: Read> {
    columns: Arc<[String]>,
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> RowReader<R> {
    pub fn new(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(source);

        let columns: Arc<[String]> = reader.headers()?.iter().map(str::to_string).collect();

        Ok(Self {
            columns,
            records: reader.into_records(),
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_header(&self) -> bool {
        !self.columns.is_empty()
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<InputRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let values = record.iter().map(str::to_string).collect();

        Some(Ok(InputRow::new(Arc::clone(&self.columns), values, line)))
    }
}
