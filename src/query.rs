use crate::models::{SpaceRecord, TypeFilter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceQuery {
    pub search_term: String,
    pub filter_type: TypeFilter,
}

impl SpaceQuery {
    pub fn new(search_term: impl Into<String>, filter_type: TypeFilter) -> Self {
        Self {
            search_term: search_term.into(),
            filter_type,
        }
    }

    pub fn apply(&self, records: &[SpaceRecord]) -> Vec<SpaceRecord> {
        visible(records, &self.search_term, self.filter_type)
    }
}

pub fn visible(records: &[SpaceRecord], search_term: &str, filter_type: TypeFilter) -> Vec<SpaceRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| matches_search(record, &needle))
        .filter(|record| filter_type.admits(record.space_type))
        .cloned()
        .collect()
}

fn matches_search(record: &SpaceRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [record.name.as_str(), record.building.as_str(), record.space_type.as_str()]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(needle))
}
