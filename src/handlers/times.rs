use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::services::time_slots::{update_times, TimesAction};
use crate::state::AppState;

fn lock_times(
    state: &AppState,
) -> Result<std::sync::MutexGuard<'_, Vec<String>>, AppError> {
    state
        .available_times
        .lock()
        .map_err(|e| AppError::Persistence(e.to_string()))
}

// GET /api/times
pub async fn get_times(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, AppError> {
    let times = lock_times(&state)?;
    Ok(Json(times.clone()))
}

// POST /api/times
pub async fn dispatch_times(
    State(state): State<Arc<AppState>>,
    Json(action): Json<TimesAction>,
) -> Result<Json<Vec<String>>, AppError> {
    let mut times = lock_times(&state)?;
    *times = update_times(&times, &action);
    Ok(Json(times.clone()))
}

pub(crate) fn current_times(state: &AppState) -> Result<Vec<String>, AppError> {
    Ok(lock_times(state)?.clone())
}
