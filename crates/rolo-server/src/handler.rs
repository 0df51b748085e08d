use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use rolo_types::Contact;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::request::{decode_ids, decode_query, json_body, non_empty_list};
use crate::state::AppState;

type JsonPayload = Result<Json<Value>, JsonRejection>;

/// Service description and endpoint listing.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": state.info.name,
        "version": state.info.version,
        "endpoints": {
            "create": "POST /create",
            "update": "PUT /update",
            "delete": "DELETE /delete",
            "search": "POST /search",
            "list": "GET /contacts",
            "get": "GET /contacts/{id}",
            "health": "GET /health",
        },
    }))
}

/// Health check handler.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": state.info.name,
        "version": state.info.version,
    }))
}

pub async fn create_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> ApiResult<(StatusCode, Json<Vec<Contact>>)> {
    let items = non_empty_list(json_body(payload)?)?;
    let created = state.service.create_contacts_json(items)?;
    tracing::info!(count = created.len(), "created contacts");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> ApiResult<Json<Vec<Contact>>> {
    let items = non_empty_list(json_body(payload)?)?;
    let updated = state.service.update_contacts_json(items)?;
    tracing::info!(count = updated.len(), "updated contacts");
    Ok(Json(updated))
}

pub async fn delete_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> ApiResult<Json<Value>> {
    let ids = decode_ids(non_empty_list(json_body(payload)?)?)?;
    let deleted = state.service.delete_contacts(&ids);
    tracing::info!(deleted, "deleted contacts");
    Ok(Json(json!({ "deleted": deleted })))
}

pub async fn search_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> ApiResult<Json<Vec<Contact>>> {
    let query = decode_query(json_body(payload)?)?;
    let results = state.service.search_contacts(&query);
    tracing::info!(%query, hits = results.len(), "searched contacts");
    Ok(Json(results))
}

pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<Contact>> {
    Json(state.service.list_contacts())
}

pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Contact>> {
    state
        .service
        .get_contact(&id)
        .map(Json)
        .map_err(|e| ApiError::not_found(e.to_string()))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("Endpoint not found")
}

/// Give axum's bodiless 405 responses the same JSON error shape.
pub async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
    } else {
        response
    }
}
