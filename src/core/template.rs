use crate::domain::model::{ChipRecord, InputRow};
use crate::utils::error::Result;

pub const FILENAME_COLUMN: &str = "Filename";
pub const SERIES_NUMBER_COLUMN: &str = "Series Number";
pub const DESCRIPTION_COLUMN: &str = "Description";
pub const UUID_COLUMN: &str = "UUID";

#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    team_name: String,
    collection_name: String,
    series_total: u64,
}

impl TemplateBuilder {
    pub fn new(team_name: &str, collection_name: &str, series_total: u64) -> Self {
        Self {
            team_name: team_name.to_string(),
            collection_name: collection_name.to_string(),
            series_total,
        }
    }

    /// 以模板建立紀錄，並從該列填入 name / series_number / description / collection.id
    pub fn build(&self, row: &InputRow) -> Result<ChipRecord> {
        let mut record = ChipRecord::template(&self.collection_name, self.series_total);

        record.name = row.get(FILENAME_COLUMN)?.to_string();
        record.series_number = row.get(SERIES_NUMBER_COLUMN)?.to_string();
        record.minting_tool = self.team_name.clone();
        record.description = row.get(DESCRIPTION_COLUMN)?.to_string();
        record.collection.id = row.get(UUID_COLUMN)?.to_string();

        Ok(record)
    }
}
