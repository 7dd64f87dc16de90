use space_registry_lib::models::{EditMode, RegistryChange};
use space_registry_lib::{DraftRecord, SpaceRegistry, SpaceType, TypeFilter};

fn draft(name: &str, space_type: SpaceType, building: &str, facilities: &str) -> DraftRecord {
    DraftRecord {
        name: name.to_string(),
        space_type: Some(space_type),
        building: building.to_string(),
        floor: Some("1".to_string()),
        capacity: Some(30),
        facilities: facilities.to_string(),
        ..DraftRecord::default()
    }
}

fn create(registry: &mut SpaceRegistry, draft: DraftRecord) -> RegistryChange {
    registry.start_create();
    registry.update_draft(draft).expect("draft bound");
    registry
        .commit()
        .expect("commit")
        .change
        .expect("create produces a change")
}

#[test]
fn create_search_edit_and_delete_flow() {
    let mut registry = SpaceRegistry::new();
    assert!(registry.view().visible.is_empty());

    let room = create(&mut registry, draft("Room A", SpaceType::Classroom, "Main", "Projector, Whiteboard"));
    let lab = create(&mut registry, draft("Lab B", SpaceType::Laboratory, "Annex", "Fume hood"));
    assert_ne!(room.space_id(), lab.space_id());
    assert_eq!(registry.list().len(), 2);

    let view = registry.set_search_term("lab");
    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.visible[0].id, lab.space_id());

    registry.set_search_term("");
    let view = registry.set_filter_type(TypeFilter::Only(SpaceType::Classroom));
    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.visible[0].facilities, vec!["Projector", "Whiteboard"]);
    registry.set_filter_type(TypeFilter::All);

    let view = registry.start_edit(room.space_id());
    assert_eq!(view.session.mode, EditMode::Editing(room.space_id()));
    assert_eq!(view.session.draft.facilities, "Projector, Whiteboard");

    let mut edited = view.session.draft.clone();
    edited.name = "Room A (renovated)".to_string();
    edited.facilities = "Projector, Whiteboard, Projector".to_string();
    registry.update_draft(edited).expect("draft bound");
    let response = registry.commit().expect("commit edit");
    let Some(RegistryChange::Updated { space }) = response.change else {
        panic!("expected update change");
    };
    assert_eq!(space.id, room.space_id());
    assert_eq!(space.facilities, vec!["Projector", "Whiteboard", "Projector"]);
    assert_eq!(response.view.total_count, 2);
    assert_eq!(response.view.session.mode, EditMode::Idle);

    let response = registry.delete(lab.space_id());
    assert!(response.change.is_some());
    assert!(registry.list().iter().all(|record| record.id != lab.space_id()));

    let before = registry.list();
    let response = registry.delete(lab.space_id());
    assert!(response.change.is_none());
    assert_eq!(registry.list(), before);
}

#[test]
fn cancelled_edit_does_not_touch_store() {
    let mut registry = SpaceRegistry::new();
    let room = create(&mut registry, draft("Room A", SpaceType::Classroom, "Main", ""));
    let before = registry.list();

    registry.start_edit(room.space_id());
    let mut edited = registry.session().draft().clone();
    edited.building = "Elsewhere".to_string();
    registry.update_draft(edited).expect("draft bound");
    let view = registry.cancel();

    assert_eq!(view.session.mode, EditMode::Idle);
    assert_eq!(registry.list(), before);
}

#[test]
fn incomplete_drafts_never_reach_the_store() {
    let mut registry = SpaceRegistry::new();
    let complete = draft("Room A", SpaceType::Classroom, "Main", "");
    let mut variants = Vec::new();

    let mut no_name = complete.clone();
    no_name.name.clear();
    variants.push(no_name);
    let mut no_type = complete.clone();
    no_type.space_type = None;
    variants.push(no_type);
    let mut no_building = complete.clone();
    no_building.building.clear();
    variants.push(no_building);
    let mut no_capacity = complete;
    no_capacity.capacity = None;
    variants.push(no_capacity);

    for variant in variants {
        registry.start_create();
        registry.update_draft(variant).expect("draft bound");
        assert!(registry.commit().is_err());
        assert_eq!(registry.session().mode(), EditMode::Creating);
        assert!(registry.list().is_empty());
    }
}

#[test]
fn view_serializes_for_the_presentation_layer() {
    let mut registry = SpaceRegistry::new();
    create(&mut registry, draft("Quiet Corner", SpaceType::StudyArea, "Library", "Wifi"));
    let view = serde_json::to_value(registry.view()).expect("serialize view");

    assert_eq!(view["filterType"], "All");
    assert_eq!(view["totalCount"], 1);
    assert_eq!(view["visible"][0]["type"], "Study Area");
    assert_eq!(view["visible"][0]["status"], "Available");
    assert_eq!(view["session"]["mode"]["state"], "idle");
}
