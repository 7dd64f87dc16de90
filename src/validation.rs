use crate::errors::{AppError, AppResult};
use crate::models::{DraftRecord, SpaceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFields {
    pub space_type: SpaceType,
    pub capacity: i64,
}

pub fn missing_required_fields(draft: &DraftRecord) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if draft.name.is_empty() {
        missing.push("name");
    }
    if draft.space_type.is_none() {
        missing.push("type");
    }
    if draft.building.is_empty() {
        missing.push("building");
    }
    // Any present capacity is accepted, zero and negatives included.
    if draft.capacity.is_none() {
        missing.push("capacity");
    }
    missing
}

pub fn validate_draft(draft: &DraftRecord) -> AppResult<RequiredFields> {
    let missing = missing_required_fields(draft);
    match (draft.space_type, draft.capacity) {
        (Some(space_type), Some(capacity)) if missing.is_empty() => Ok(RequiredFields { space_type, capacity }),
        _ => Err(AppError::Validation(format!(
            "Please fill in all required fields (missing: {})",
            missing.join(", ")
        ))),
    }
}
