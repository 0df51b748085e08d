//! Request body decoding.
//!
//! Bodies are taken as raw JSON and only their outer shape is checked here.
//! Batch items are decoded one at a time by the service as it applies them.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Unwrap the JSON extractor, mapping every rejection to a client error.
pub fn json_body(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => Err(
            ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"),
        ),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "unreadable JSON body");
            Err(ApiError::bad_request("Request must be JSON"))
        }
    }
}

/// A non-empty JSON array.
pub fn non_empty_list(body: Value) -> ApiResult<Vec<Value>> {
    match body {
        Value::Array(items) if items.is_empty() => {
            Err(ApiError::bad_request("Request body cannot be empty"))
        }
        Value::Array(items) => Ok(items),
        _ => Err(ApiError::bad_request("Request body must be a list")),
    }
}

pub fn decode_ids(items: Vec<Value>) -> ApiResult<Vec<String>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(id) => Ok(id),
            _ => Err(ApiError::bad_request("All contact IDs must be strings")),
        })
        .collect()
}

pub fn decode_query(body: Value) -> ApiResult<String> {
    let Value::Object(mut fields) = body else {
        return Err(ApiError::bad_request("Request body must be an object"));
    };
    match fields.remove("query") {
        None => Err(ApiError::bad_request("Missing 'query' field")),
        Some(Value::String(query)) => Ok(query),
        Some(_) => Err(ApiError::bad_request("'query' must be a string")),
    }
}
