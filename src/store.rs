use crate::errors::AppResult;
use crate::models::{DraftRecord, SpaceId, SpaceRecord};
use crate::validation::{validate_draft, RequiredFields};

// Ids come from a monotonic counter and are never reused after a delete.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<SpaceRecord>,
    last_id: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, draft: &DraftRecord) -> AppResult<SpaceRecord> {
        let required = validate_draft(draft)?;
        let id = self.allocate_id();
        let record = build_record(id, draft, required);
        self.records.push(record.clone());
        tracing::info!(space_id = %id, name = %record.name, "space created");
        Ok(record)
    }

    /// Replaces the fields of an existing record, keeping its id. Returns
    /// `Ok(None)` without touching the store when the id is unknown.
    pub fn update(&mut self, id: SpaceId, draft: &DraftRecord) -> AppResult<Option<SpaceRecord>> {
        let required = validate_draft(draft)?;
        let Some(slot) = self.records.iter_mut().find(|record| record.id == id) else {
            tracing::debug!(space_id = %id, "update skipped, space not found");
            return Ok(None);
        };
        *slot = build_record(id, draft, required);
        tracing::info!(space_id = %id, name = %slot.name, "space updated");
        Ok(Some(slot.clone()))
    }

    pub fn delete(&mut self, id: SpaceId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() < before;
        if removed {
            tracing::info!(space_id = %id, "space deleted");
        } else {
            tracing::debug!(space_id = %id, "delete skipped, space not found");
        }
        removed
    }

    pub fn get(&self, id: SpaceId) -> Option<&SpaceRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[SpaceRecord] {
        &self.records
    }

    pub fn list(&self) -> Vec<SpaceRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn allocate_id(&mut self) -> SpaceId {
        self.last_id += 1;
        SpaceId::new(self.last_id)
    }
}

fn build_record(id: SpaceId, draft: &DraftRecord, required: RequiredFields) -> SpaceRecord {
    SpaceRecord {
        id,
        name: draft.name.clone(),
        space_type: required.space_type,
        building: draft.building.clone(),
        floor: draft.normalized_floor(),
        capacity: required.capacity,
        facilities: draft.facility_list(),
        status: draft.status,
    }
}
