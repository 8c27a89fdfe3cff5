pub mod etl;
pub mod json;
pub mod output_table;
pub mod reader;
pub mod record_writer;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{ChipRecord, InputRow, RecordHash, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
