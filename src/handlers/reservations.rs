use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::times::current_times;
use crate::errors::AppError;
use crate::models::{Booking, FormField, SubmitEvent};
use crate::services::booking_form::{BookingForm, SubmitOutcome, BOOKINGS_KEY, CONFIRMED_PATH};
use crate::services::navigation::RecordingNavigator;
use crate::state::AppState;

// POST /api/reservations
#[derive(Deserialize)]
pub struct ReservationRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default = "default_guests")]
    pub guests: String,
    #[serde(default)]
    pub occasion: Option<String>,
}

fn default_guests() -> String {
    "1".to_string()
}

pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReservationRequest>,
) -> Result<Response, AppError> {
    let mut form = BookingForm::new();
    // The refreshed list is only for rendering; shared state changes via /api/times.
    let times = current_times(&state)?;
    let times = form.set_field(FormField::Date, &req.date, &times)?;
    form.set_field(FormField::Time, &req.time, &times)?;
    form.set_field(FormField::Guests, &req.guests, &times)?;
    if let Some(occasion) = &req.occasion {
        form.set_field(FormField::Occasion, occasion, &times)?;
    }

    let navigator = RecordingNavigator::new();
    let mut event = SubmitEvent::new();
    match form.submit(&mut event, state.store.as_ref(), &navigator)? {
        SubmitOutcome::Invalid(errors) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "errors": errors })),
        )
            .into_response()),
        SubmitOutcome::Submitted(booking) => {
            let location = navigator.last().unwrap_or_else(|| CONFIRMED_PATH.to_string());
            Ok((
                StatusCode::SEE_OTHER,
                [(header::LOCATION, location)],
                Json(booking),
            )
                .into_response())
        }
    }
}

// GET /confirmed
pub async fn get_confirmed(State(state): State<Arc<AppState>>) -> Result<Json<Booking>, AppError> {
    let raw = state
        .store
        .get(BOOKINGS_KEY)?
        .ok_or_else(|| AppError::NotFound("no confirmed booking".to_string()))?;
    let booking: Booking = serde_json::from_str(&raw)?;
    Ok(Json(booking))
}
