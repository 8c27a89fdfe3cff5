use crate::core::output_table::{OutputTableWriter, OUTPUT_TABLE_SUFFIX};
use crate::core::reader::RowReader;
use crate::core::record_writer::RecordWriter;
use crate::core::template::TemplateBuilder;
use crate::domain::model::RunSummary;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;
use std::path::PathBuf;

pub struct EtlEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> EtlEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn team_dir(&self) -> PathBuf {
        self.config.output_root().join(self.config.team_name())
    }

    pub fn records_dir(&self) -> PathBuf {
        self.team_dir().join(self.config.records_dir_name())
    }

    /// `<team_dir>/<輸入檔名去掉副檔名>.output.csv`
    pub fn output_table_path(&self) -> Result<PathBuf> {
        let input = self.config.input_path();
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| EtlError::ConfigError {
                message: format!("Input path has no usable file name: {}", input.display()),
            })?;

        Ok(self
            .team_dir()
            .join(format!("{}{}", stem, OUTPUT_TABLE_SUFFIX)))
    }

    pub fn run(&self) -> Result<RunSummary> {
        let input_path = self.config.input_path();
        tracing::info!(
            "Starting conversion of {} for team '{}'",
            input_path.display(),
            self.config.team_name()
        );

        let team_dir = self.team_dir();
        self.storage.create_dir_all(&team_dir)?;
        // 即使沒有任何資料列，紀錄目錄也要存在
        self.storage.create_dir_all(&self.records_dir())?;
        let output_path = self.output_table_path()?;

        let rows = RowReader::new(self.storage.open_reader(input_path)?)?;
        if !rows.has_header() {
            return Err(EtlError::EmptyInputError {
                path: input_path.to_path_buf(),
            });
        }
        tracing::debug!("Input columns: {:?}", rows.columns());

        let mut table = OutputTableWriter::new(
            self.storage.create_writer(&output_path)?,
            self.config.hash_header(),
        );
        table.write_header(rows.columns())?;

        let builder = TemplateBuilder::new(
            self.config.team_name(),
            self.config.collection_name(),
            self.config.series_total(),
        );
        let records = RecordWriter::new(&self.storage, self.records_dir(), !self.config.utf8_json());
        let mut seen_names = HashSet::new();

        for row in rows {
            let row = row?;
            let record = builder.build(&row)?;

            if !seen_names.insert(record.name.clone()) {
                tracing::warn!(
                    "Record name '{}' on line {} repeats an earlier row; {} will be overwritten",
                    record.name,
                    row.line(),
                    records.record_path(&record).display()
                );
            }

            let hash = records.write(&record)?;
            tracing::debug!("Line {}: {} -> {}", row.line(), record.name, hash);
            table.write_row(&row, &hash)?;
        }

        let rows_processed = table.rows_written();
        table.finish()?;

        tracing::info!(
            "Converted {} rows; records in {}, table at {}",
            rows_processed,
            records.records_dir().display(),
            output_path.display()
        );

        Ok(RunSummary {
            rows_processed,
            records_dir: records.records_dir().to_path_buf(),
            output_table: output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::test_support::MockStorage;
    use crate::utils::hashing::sha256_hex;
    use std::path::Path;

    const INPUT: &str = "Series Number,Filename,Description,Gender,UUID\n\
                         1,ticket1,Free Lunch,Male,abc-123\n\
                         2,ticket2,Free Dinner,Female,def-456\n";

    fn settings(input: &str) -> Settings {
        Settings::new(input, "teamA").with_output_root("out")
    }

    #[test]
    fn test_run_writes_records_and_table() {
        let storage = MockStorage::new();
        storage.insert("data/chips.csv", INPUT.as_bytes());

        let engine = EtlEngine::new(storage.clone(), settings("data/chips.csv"));
        let summary = engine.run().unwrap();

        assert_eq!(summary.rows_processed, 2);
        assert_eq!(summary.records_dir, Path::new("out/teamA/chips"));
        assert_eq!(summary.output_table, Path::new("out/teamA/chips.output.csv"));
        assert!(storage.has_dir("out/teamA"));
        assert_eq!(
            storage.file_names_in("out/teamA/chips"),
            vec!["ticket1output.json", "ticket2output.json"]
        );

        let table = String::from_utf8(storage.get_file("out/teamA/chips.output.csv").unwrap()).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Series Number,Filename,Description,Gender,UUID");

        let ticket1 = storage.get_file("out/teamA/chips/ticket1output.json").unwrap();
        assert_eq!(
            lines[1],
            format!("1,ticket1,Free Lunch,Male,abc-123,{}", sha256_hex(&ticket1))
        );
    }

    #[test]
    fn test_missing_input_fails() {
        let storage = MockStorage::new();
        let engine = EtlEngine::new(storage, settings("missing.csv"));

        assert!(matches!(
            engine.run(),
            Err(EtlError::FileAccessError { .. })
        ));
    }

    #[test]
    fn test_empty_input_fails() {
        let storage = MockStorage::new();
        storage.insert("empty.csv", b"");
        let engine = EtlEngine::new(storage, settings("empty.csv"));

        assert!(matches!(engine.run(), Err(EtlError::EmptyInputError { .. })));
    }

    #[test]
    fn test_header_only_input_still_creates_records_dir() {
        let storage = MockStorage::new();
        storage.insert("header.csv", b"Series Number,Filename,Description,UUID\n");

        let summary = EtlEngine::new(storage.clone(), settings("header.csv")).run().unwrap();

        assert_eq!(summary.rows_processed, 0);
        assert!(storage.has_dir("out/teamA/chips"));
        assert!(storage.file_names_in("out/teamA/chips").is_empty());
        assert_eq!(
            storage.get_file("out/teamA/header.output.csv").unwrap(),
            b"Series Number,Filename,Description,UUID\n"
        );
    }

    #[test]
    fn test_missing_column_aborts_run() {
        let storage = MockStorage::new();
        storage.insert("bad.csv", b"Series Number,Filename,Description\n1,a,x\n");

        match EtlEngine::new(storage.clone(), settings("bad.csv")).run() {
            Err(EtlError::MissingColumnError { column, line }) => {
                assert_eq!(column, "UUID");
                assert_eq!(line, 2);
            }
            other => panic!("expected missing column, got {:?}", other),
        }
        assert!(storage.file_names_in("out/teamA/chips").is_empty());
    }

    #[test]
    fn test_empty_values_are_copied_verbatim() {
        let storage = MockStorage::new();
        storage.insert("blank.csv", b"Series Number,Filename,Description,UUID\n1,a,,\n");

        let summary = EtlEngine::new(storage.clone(), settings("blank.csv")).run().unwrap();
        assert_eq!(summary.rows_processed, 1);

        let json = storage.get_file("out/teamA/chips/aoutput.json").unwrap();
        let record: crate::domain::model::ChipRecord = serde_json::from_slice(&json).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.collection.id, "");
    }

    #[test]
    fn test_duplicate_names_overwrite_but_keep_all_rows() {
        let storage = MockStorage::new();
        storage.insert(
            "dups.csv",
            b"Series Number,Filename,Description,UUID\n1,same,first,id-1\n2,same,second,id-2\n",
        );

        let summary = EtlEngine::new(storage.clone(), settings("dups.csv")).run().unwrap();

        assert_eq!(summary.rows_processed, 2);
        assert_eq!(
            storage.file_names_in("out/teamA/chips"),
            vec!["sameoutput.json"]
        );
        let table = String::from_utf8(storage.get_file("out/teamA/dups.output.csv").unwrap()).unwrap();
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn test_output_table_name_strips_only_final_extension() {
        let engine = EtlEngine::new(MockStorage::new(), settings("nft.batch.csv"));
        assert_eq!(
            engine.output_table_path().unwrap(),
            Path::new("out/teamA/nft.batch.output.csv")
        );
    }
}
