use crate::errors::{AppError, AppResult};
use crate::models::{DraftRecord, EditMode, RegistryChange, SessionSnapshot, SpaceId, SpaceRecord};
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Created(SpaceRecord),
    Updated(SpaceRecord),
    // Record under edit was deleted before commit.
    Skipped(SpaceId),
}

impl CommitOutcome {
    pub fn into_change(self) -> Option<RegistryChange> {
        match self {
            Self::Created(space) => Some(RegistryChange::Created { space }),
            Self::Updated(space) => Some(RegistryChange::Updated { space }),
            Self::Skipped(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    mode: EditMode,
    draft: DraftRecord,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            draft: self.draft.clone(),
        }
    }

    pub fn start_create(&mut self) {
        self.mode = EditMode::Creating;
        self.draft = DraftRecord::default();
    }

    /// Opens the record for editing. Returns `false` and keeps the current
    /// state when the id is unknown.
    pub fn start_edit(&mut self, store: &RecordStore, id: SpaceId) -> bool {
        let Some(record) = store.get(id) else {
            tracing::debug!(space_id = %id, "edit skipped, space not found");
            return false;
        };
        self.draft = DraftRecord::from_record(record);
        self.mode = EditMode::Editing(id);
        true
    }

    pub fn update_draft(&mut self, draft: DraftRecord) -> AppResult<()> {
        if self.mode == EditMode::Idle {
            return Err(AppError::InvalidState("No space form is open".to_string()));
        }
        self.draft = draft;
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    pub fn commit(&mut self, store: &mut RecordStore) -> AppResult<CommitOutcome> {
        let outcome = match self.mode {
            EditMode::Idle => {
                return Err(AppError::InvalidState("No space form is open".to_string()));
            }
            EditMode::Creating => CommitOutcome::Created(store.create(&self.draft)?),
            EditMode::Editing(id) => match store.update(id, &self.draft)? {
                Some(record) => CommitOutcome::Updated(record),
                None => CommitOutcome::Skipped(id),
            },
        };
        self.reset();
        Ok(outcome)
    }

    fn reset(&mut self) {
        self.mode = EditMode::Idle;
        self.draft = DraftRecord::default();
    }
}
