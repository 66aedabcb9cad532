use crate::models::campus::LocationsResponse;
use crate::models::iso_timestamp;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub async fn timetable(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "timetable": state.directory.timetable(),
        "lastUpdated": iso_timestamp(state.directory.loaded_at())
    }))
}

pub async fn contacts(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "faculty": state.directory.faculty(),
        "note": "Sample faculty data - replace with real data"
    }))
}

pub async fn locations(State(state): State<AppState>) -> impl IntoResponse {
    Json(LocationsResponse {
        success: true,
        locations: state.directory.locations(),
    })
    .into_response()
}
