use crate::config::load_settings;
use crate::errors::{AppError, AppResult};
use crate::models::{ChangeEnvelope, CommandResponse, DraftRecord, RegistryView, SpaceId, SpaceType, TypeFilter};
use crate::registry::SpaceRegistry;
use crate::telemetry::init_tracing;
use std::sync::{Arc, Mutex, MutexGuard};
use tauri::{AppHandle, Emitter, Manager};

pub const REGISTRY_EVENT: &str = "registry_event";

#[derive(Clone)]
struct AppState {
    registry: Arc<Mutex<SpaceRegistry>>,
}

impl AppState {
    fn lock(&self) -> AppResult<MutexGuard<'_, SpaceRegistry>> {
        self.registry
            .lock()
            .map_err(|_| AppError::Internal("Space registry lock poisoned".to_string()))
    }
}

fn publish(app: &AppHandle, response: CommandResponse) -> RegistryView {
    if let Some(change) = response.change {
        let envelope = ChangeEnvelope::new(change);
        if let Err(error) = app.emit(REGISTRY_EVENT, envelope) {
            tracing::warn!(error = %error, "failed to emit registry event");
        }
    }
    response.view
}

#[tauri::command]
fn registry_view(state: tauri::State<'_, AppState>) -> Result<RegistryView, String> {
    Ok(state.lock().map_err(to_client_error)?.view())
}

#[tauri::command]
fn space_types_list() -> Vec<SpaceType> {
    SpaceType::ALL.to_vec()
}

#[tauri::command]
fn start_create(state: tauri::State<'_, AppState>) -> Result<RegistryView, String> {
    Ok(state.lock().map_err(to_client_error)?.start_create())
}

#[tauri::command]
fn start_edit(state: tauri::State<'_, AppState>, space_id: SpaceId) -> Result<RegistryView, String> {
    Ok(state.lock().map_err(to_client_error)?.start_edit(space_id))
}

#[tauri::command]
fn update_draft(state: tauri::State<'_, AppState>, draft: DraftRecord) -> Result<RegistryView, String> {
    state
        .lock()
        .map_err(to_client_error)?
        .update_draft(draft)
        .map_err(to_client_error)
}

#[tauri::command]
fn cancel_edit(state: tauri::State<'_, AppState>) -> Result<RegistryView, String> {
    Ok(state.lock().map_err(to_client_error)?.cancel())
}

#[tauri::command]
fn commit_draft(app: AppHandle, state: tauri::State<'_, AppState>) -> Result<RegistryView, String> {
    let response = state.lock().map_err(to_client_error)?.commit().map_err(to_client_error)?;
    Ok(publish(&app, response))
}

#[tauri::command]
fn delete_space(app: AppHandle, state: tauri::State<'_, AppState>, space_id: SpaceId) -> Result<RegistryView, String> {
    let response = state.lock().map_err(to_client_error)?.delete(space_id);
    Ok(publish(&app, response))
}

#[tauri::command]
fn set_search_term(state: tauri::State<'_, AppState>, search_term: String) -> Result<RegistryView, String> {
    Ok(state.lock().map_err(to_client_error)?.set_search_term(search_term))
}

#[tauri::command]
fn set_filter_type(state: tauri::State<'_, AppState>, filter_type: String) -> Result<RegistryView, String> {
    let filter_type = filter_type.parse::<TypeFilter>().map_err(to_client_error)?;
    Ok(state.lock().map_err(to_client_error)?.set_filter_type(filter_type))
}

pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let config_dir = app.path().app_config_dir().map_err(|error| error.to_string())?;
            let app_data_dir = app.path().app_data_dir().map_err(|error| error.to_string())?;
            std::fs::create_dir_all(&app_data_dir).map_err(|error| error.to_string())?;

            let settings = load_settings(&config_dir).map_err(|error| error.to_string())?;
            init_tracing(&app_data_dir, &settings).map_err(|error| error.to_string())?;
            tracing::info!(filter_type = %settings.default_filter_type, "space registry starting");

            app.manage(AppState {
                registry: Arc::new(Mutex::new(SpaceRegistry::from_settings(&settings))),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            registry_view,
            space_types_list,
            start_create,
            start_edit,
            update_draft,
            cancel_edit,
            commit_draft,
            delete_space,
            set_search_term,
            set_filter_type
        ])
        .run(tauri::generate_context!())
        .expect("failed to run tauri app");
}

fn to_client_error(error: impl std::fmt::Display) -> String {
    error.to_string()
}
