//! Reminder endpoints

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use calremind_core::{Appointment, reminder};

use crate::routes::{AppError, parse_body};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reminders", post(set_reminder))
        .route("/api/reminders/due", get(due_reminders))
}

/// GET /api/reminders/due - Appointments whose reminder window is open now
async fn due_reminders(State(state): State<AppState>) -> Json<Vec<Appointment>> {
    Json(reminder::check_due(state.store()))
}

/// Request body for setting a reminder
#[derive(Deserialize)]
pub struct SetReminderRequest {
    pub appointment_id: Option<String>,
    pub reminder_time: Option<String>,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// POST /api/reminders - Attach a reminder to an appointment
async fn set_reminder(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusResponse>, AppError> {
    let req: SetReminderRequest = parse_body(&body)?;
    let (Some(appointment_id), Some(reminder_time)) = (req.appointment_id, req.reminder_time)
    else {
        return Err(AppError::bad_request("Missing fields"));
    };

    match reminder::set_reminder(state.store(), &appointment_id, &reminder_time) {
        Ok(appt) => {
            log::info!("Reminder for {} set to {}", appt.id, appt.reminder_time);
            Ok(Json(StatusResponse { status: "ok" }))
        }
        Err(e) if e.is_rejection() => {
            log::debug!("Rejected reminder for {}: {}", appointment_id, e);
            Err(AppError::bad_request("Failed to set reminder"))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::*;
    use axum::http::StatusCode;
    use calremind_core::NewAppointment;
    use chrono::{Duration, Local};

    #[tokio::test]
    async fn set_reminder_returns_ok_and_persists() {
        let (_dir, store, app) = app();
        let appt = store.add(NewAppointment::new("Dentist", "2024-09-01", "10:00")).unwrap();

        let body = format!(
            r#"{{"appointment_id": "{}", "reminder_time": "2024-09-01 08:00"}}"#,
            appt.id
        );
        let (status, json) = send(&app, post("/api/reminders", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"status": "ok"}));

        let stored = store.get(&appt.id).unwrap();
        assert!(stored.reminder_set);
        assert_eq!(stored.reminder_time, "2024-09-01 08:00");
    }

    #[tokio::test]
    async fn set_reminder_failures_are_400() {
        let (_dir, store, app) = app();
        let appt = store.add(NewAppointment::new("Dentist", "2024-09-01", "10:00")).unwrap();

        let bad_time = format!(
            r#"{{"appointment_id": "{}", "reminder_time": "2024/09/01 8am"}}"#,
            appt.id
        );
        let (status, json) = send(&app, post("/api/reminders", bad_time)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Failed to set reminder");

        let unknown = r#"{"appointment_id": "nope", "reminder_time": "2024-09-01 08:00"}"#;
        let (status, json) = send(&app, post("/api/reminders", unknown)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Failed to set reminder");

        assert!(!store.get(&appt.id).unwrap().reminder_set);
    }

    #[tokio::test]
    async fn set_reminder_requires_both_fields() {
        let (_dir, _store, app) = app();

        let (status, json) = send(&app, post("/api/reminders", r#"{"appointment_id": "x"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing fields");

        let (status, json) = send(&app, post("/api/reminders", "oops")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid JSON");
    }

    #[tokio::test]
    async fn due_lists_open_reminder_windows() {
        let (_dir, store, app) = app();
        let now = Local::now().naive_local();
        let soon = now + Duration::hours(3);

        let upcoming = store
            .add(NewAppointment::new(
                "Upcoming",
                soon.format("%Y-%m-%d").to_string(),
                soon.format("%H:%M").to_string(),
            ))
            .unwrap();
        let later = store.add(NewAppointment::new("Later", "2999-01-01", "10:00")).unwrap();

        let reminder = (now - Duration::hours(1)).format("%Y-%m-%d %H:%M").to_string();
        calremind_core::reminder::set_reminder(&store, &upcoming.id, &reminder).unwrap();
        calremind_core::reminder::set_reminder(&store, &later.id, "2999-01-01 09:00").unwrap();

        let (status, body) = send(&app, get("/api/reminders/due")).await;
        assert_eq!(status, StatusCode::OK);

        let due = body.as_array().unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0]["id"], upcoming.id.as_str());
    }

    #[tokio::test]
    async fn due_is_empty_array_when_nothing_is_due() {
        let (_dir, _store, app) = app();
        let (status, body) = send(&app, get("/api/reminders/due")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }
}
