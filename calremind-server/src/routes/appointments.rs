//! Appointment endpoints

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use calremind_core::{Appointment, NewAppointment};

use crate::routes::{AppError, parse_body};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/appointments",
        get(list_appointments).post(create_appointment),
    )
}

/// GET /api/appointments?date=YYYY-MM-DD - List appointments, optionally for one date
///
/// The query is read as raw pairs: a repeated `date` uses the first value and
/// undecodable bytes are replaced rather than rejected.
async fn list_appointments(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Appointment>> {
    let date = pairs
        .iter()
        .find(|(key, _)| key == "date")
        .map(|(_, value)| value.as_str());

    let appointments = match date {
        Some(date) if !date.is_empty() => state.store().on_date(date),
        _ => state.store().load(),
    };

    Json(appointments)
}

/// Request body for creating an appointment
#[derive(Deserialize)]
pub struct CreateAppointmentRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl CreateAppointmentRequest {
    fn into_new_appointment(self) -> Option<NewAppointment> {
        Some(NewAppointment {
            title: self.title?,
            date: self.date?,
            time: self.time?,
            description: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
        })
    }
}

/// POST /api/appointments - Create a new appointment
async fn create_appointment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let req: CreateAppointmentRequest = parse_body(&body)?;
    let new = req
        .into_new_appointment()
        .ok_or_else(|| AppError::bad_request("Missing fields"))?;

    let appointment = state.store().add(new)?;
    log::info!("Created appointment {} ({})", appointment.id, appointment.title);

    Ok((StatusCode::CREATED, Json(appointment)))
}
