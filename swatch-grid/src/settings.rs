use serde::{Deserialize, Serialize};

use crate::selection::SelectionGranularity;

const DEFAULT_COLUMN_COUNT: usize = 16;

/// Layout and selection options of a palette grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub column_count: usize,
    /// Fixed cell side in pixels; `0` fits cells to the available area.
    pub block_size: u32,
    pub granularity: SelectionGranularity,
    pub show_indexes: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            block_size: 0,
            granularity: SelectionGranularity::default(),
            show_indexes: false,
        }
    }
}

impl GridSettings {
    pub fn with_column_count(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_granularity(mut self, granularity: SelectionGranularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_show_indexes(mut self, show_indexes: bool) -> Self {
        self.show_indexes = show_indexes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sixteen_column_auto_fit_grid() {
        let settings = GridSettings::default();
        assert_eq!(settings.column_count, 16);
        assert_eq!(settings.block_size, 0);
        assert_eq!(settings.granularity, SelectionGranularity::None);
        assert!(!settings.show_indexes);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings: GridSettings =
            serde_json::from_str(r#"{ "granularity": "unit4", "block_size": 12 }"#)
                .expect("settings should parse");
        assert_eq!(
            settings,
            GridSettings::default()
                .with_granularity(SelectionGranularity::Unit4)
                .with_block_size(12)
        );
    }

    #[test]
    fn unknown_granularity_is_rejected() {
        let parsed =
            serde_json::from_str::<GridSettings>(r#"{ "granularity": "unit8" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn builders_set_every_field() {
        let settings = GridSettings::default()
            .with_column_count(32)
            .with_block_size(8)
            .with_granularity(SelectionGranularity::Unit16)
            .with_show_indexes(true);
        let json = serde_json::to_value(&settings).expect("serializable");
        assert_eq!(json["column_count"], 32);
        assert_eq!(json["block_size"], 8);
        assert_eq!(json["granularity"], "unit16");
        assert_eq!(json["show_indexes"], true);
    }
}
