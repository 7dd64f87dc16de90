use crate::config::RegistrySettings;
use crate::errors::AppResult;
use crate::models::{
    CommandResponse, DraftRecord, RegistryChange, RegistryView, SpaceId, SpaceRecord, TypeFilter,
};
use crate::query::SpaceQuery;
use crate::session::EditSession;
use crate::store::RecordStore;

#[derive(Debug, Default)]
pub struct SpaceRegistry {
    store: RecordStore,
    session: EditSession,
    query: SpaceQuery,
}

impl SpaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &RegistrySettings) -> Self {
        Self {
            query: SpaceQuery::new(String::new(), settings.default_filter_type),
            ..Self::default()
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn query(&self) -> &SpaceQuery {
        &self.query
    }

    pub fn list(&self) -> Vec<SpaceRecord> {
        self.store.list()
    }

    pub fn visible(&self) -> Vec<SpaceRecord> {
        self.query.apply(self.store.records())
    }

    pub fn view(&self) -> RegistryView {
        let visible = self.visible();
        tracing::debug!(
            visible = visible.len(),
            total = self.store.len(),
            search_term = %self.query.search_term,
            filter_type = %self.query.filter_type,
            "registry view computed"
        );
        RegistryView {
            visible,
            search_term: self.query.search_term.clone(),
            filter_type: self.query.filter_type,
            total_count: self.store.len(),
            session: self.session.snapshot(),
        }
    }

    pub fn start_create(&mut self) -> RegistryView {
        self.session.start_create();
        self.view()
    }

    pub fn start_edit(&mut self, id: SpaceId) -> RegistryView {
        self.session.start_edit(&self.store, id);
        self.view()
    }

    pub fn update_draft(&mut self, draft: DraftRecord) -> AppResult<RegistryView> {
        self.session.update_draft(draft)?;
        Ok(self.view())
    }

    pub fn cancel(&mut self) -> RegistryView {
        self.session.cancel();
        self.view()
    }

    pub fn commit(&mut self) -> AppResult<CommandResponse> {
        let outcome = self.session.commit(&mut self.store).map_err(|error| {
            tracing::warn!(error = %error, mode = ?self.session.mode(), "space commit rejected");
            error
        })?;
        Ok(CommandResponse {
            view: self.view(),
            change: outcome.into_change(),
        })
    }

    pub fn delete(&mut self, id: SpaceId) -> CommandResponse {
        let change = self
            .store
            .delete(id)
            .then_some(RegistryChange::Deleted { space_id: id });
        CommandResponse {
            view: self.view(),
            change,
        }
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) -> RegistryView {
        self.query.search_term = search_term.into();
        self.view()
    }

    pub fn set_filter_type(&mut self, filter_type: TypeFilter) -> RegistryView {
        self.query.filter_type = filter_type;
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::SpaceRegistry;
    use crate::config::RegistrySettings;
    use crate::models::{DraftRecord, EditMode, RegistryChange, SpaceType, TypeFilter};

    fn draft(name: &str, space_type: SpaceType, building: &str) -> DraftRecord {
        DraftRecord {
            name: name.to_string(),
            space_type: Some(space_type),
            building: building.to_string(),
            capacity: Some(20),
            ..DraftRecord::default()
        }
    }

    fn add(registry: &mut SpaceRegistry, draft: DraftRecord) -> RegistryChange {
        registry.start_create();
        registry.update_draft(draft).expect("draft bound");
        registry.commit().expect("commit").change.expect("change")
    }

    #[test]
    fn view_follows_query_changes() {
        let mut registry = SpaceRegistry::new();
        add(&mut registry, draft("Room A", SpaceType::Classroom, "Main"));
        add(&mut registry, draft("Lab B", SpaceType::Laboratory, "Annex"));

        let view = registry.set_search_term("lab");
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.visible[0].name, "Lab B");
        assert_eq!(view.total_count, 2);

        let view = registry.set_search_term("");
        assert_eq!(view.visible.len(), 2);

        let view = registry.set_filter_type(TypeFilter::Only(SpaceType::Classroom));
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.visible[0].name, "Room A");
        assert_eq!(view.filter_type, TypeFilter::Only(SpaceType::Classroom));
    }

    #[test]
    fn delete_reports_change_only_when_something_was_removed() {
        let mut registry = SpaceRegistry::new();
        let created = add(&mut registry, draft("Room A", SpaceType::Classroom, "Main"));
        let id = created.space_id();

        let response = registry.delete(id);
        assert_eq!(response.change, Some(RegistryChange::Deleted { space_id: id }));
        assert!(response.view.visible.is_empty());

        let again = registry.delete(id);
        assert!(again.change.is_none());
        assert_eq!(again.view.total_count, 0);
    }

    #[test]
    fn rejected_commit_surfaces_error_and_keeps_session() {
        let mut registry = SpaceRegistry::new();
        registry.start_create();
        let mut incomplete = draft("", SpaceType::Classroom, "Main");
        incomplete.space_type = None;
        registry.update_draft(incomplete).expect("draft bound");

        let error = registry.commit().expect_err("must reject");
        assert!(error.to_string().contains("Please fill in all required fields"));
        assert_eq!(registry.session().mode(), EditMode::Creating);
        assert!(registry.list().is_empty());
    }

    #[test]
    fn settings_choose_initial_filter() {
        let settings = RegistrySettings {
            default_filter_type: TypeFilter::Only(SpaceType::LectureHall),
            ..RegistrySettings::default()
        };
        let registry = SpaceRegistry::from_settings(&settings);
        assert_eq!(registry.query().filter_type, TypeFilter::Only(SpaceType::LectureHall));
        assert!(registry.query().search_term.is_empty());
    }
}
