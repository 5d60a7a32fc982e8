pub mod appointments;
pub mod reminders;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::state::AppState;

/// All API routes, with a JSON 404 for anything unmatched.
///
/// A known path hit with the wrong method is unmatched too, so it gets the
/// same 404 body rather than a bare 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(appointments::router())
        .merge(reminders::router())
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::new(StatusCode::NOT_FOUND, "Not Found")
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An error rendered as `{"error": "..."}` with a status code.
///
/// Anything convertible to `anyhow::Error` becomes a 500.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        AppError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("{}", self.message);
        }
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.into().to_string())
    }
}

/// Decode a JSON object request body.
///
/// An empty body counts as `{}`, so required-field checks report it as
/// missing fields rather than malformed JSON.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let value: Value = if body.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(body).map_err(|_| AppError::bad_request("Invalid JSON"))?
    };

    if !value.is_object() {
        return Err(AppError::bad_request("Invalid JSON"));
    }

    serde_json::from_value(value).map_err(|_| AppError::bad_request("Invalid fields"))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[derive(serde::Deserialize, Debug)]
    struct NameBody {
        name: Option<String>,
    }

    #[test]
    fn empty_body_is_an_empty_object() {
        let body: NameBody = parse_body(b"").unwrap();
        assert!(body.name.is_none());
    }

    #[test]
    fn malformed_body_is_invalid_json() {
        let err = parse_body::<NameBody>(b"{not json").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid JSON");

        let err = parse_body::<NameBody>(b"[1, 2]").unwrap_err();
        assert_eq!(err.message, "Invalid JSON");

        let err = parse_body::<NameBody>(br#""abc""#).unwrap_err();
        assert_eq!(err.message, "Invalid JSON");
    }

    #[test]
    fn wrongly_typed_field_is_rejected() {
        let err = parse_body::<NameBody>(br#"{"name": 5}"#).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid fields");
    }

    #[tokio::test]
    async fn unknown_path_is_json_404() {
        let (_dir, _store, app) = app();

        let (status, body) = send(&app, get("/api/nothing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");

        let (status, body) = send(&app, post("/api/nothing", "{}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
    }

    #[tokio::test]
    async fn wrong_method_on_known_path_is_json_404() {
        let (_dir, _store, app) = app();

        let (status, body) = send(&app, get("/api/reminders")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");

        let (status, body) = send(&app, post("/api/reminders/due", "{}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
    }
}
