//! Records API endpoints

use api_types::{
    record::{Record, StatusResponse},
    summary::{CategorySummary, RecordsTotal},
};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::Value;

use crate::{ServerError, server::ServerState};

const REQUIRED_FIELDS: [&str; 3] = ["date", "category", "amount"];

/// Handle requests for the whole record collection
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Record>>, ServerError> {
    Ok(Json(state.store.load().await?))
}

/// Append a record at the end of the collection.
///
/// The body is checked in two steps so that malformed JSON and missing keys
/// are reported separately from values of the wrong type. A `null` amount is
/// accepted and stored as-is.
pub async fn create(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>), ServerError> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|_| ServerError::BadRequest("Invalid JSON".to_string()))?;

    let has_fields = value
        .as_object()
        .is_some_and(|obj| REQUIRED_FIELDS.iter().all(|key| obj.contains_key(*key)));
    if !has_fields {
        return Err(ServerError::BadRequest("missing fields".to_string()));
    }

    let record: Record = serde_json::from_value(value)
        .map_err(|err| ServerError::BadRequest(format!("invalid record: {err}")))?;

    let count = state.store.append(record).await?;
    tracing::debug!("record stored, {count} total");

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse {
            status: "ok".to_string(),
        }),
    ))
}

pub async fn total(State(state): State<ServerState>) -> Result<Json<RecordsTotal>, ServerError> {
    let records = state.store.load().await?;
    let total = records
        .iter()
        .filter_map(|record| record.amount)
        .try_fold(0i64, i64::checked_add)
        .ok_or(ServerError::Overflow)?;

    Ok(Json(RecordsTotal { total }))
}

/// Sum amounts per category. A `null` amount counts as zero.
pub async fn summary(
    State(state): State<ServerState>,
) -> Result<Json<CategorySummary>, ServerError> {
    let records = state.store.load().await?;

    let mut summary = CategorySummary::new();
    for record in records {
        let amount = record.amount.unwrap_or(0);
        let sum = summary.entry(record.category).or_insert(0);
        *sum = sum.checked_add(amount).ok_or(ServerError::Overflow)?;
    }

    Ok(Json(summary))
}

pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
