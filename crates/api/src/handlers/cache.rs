use crate::{
    dto::{CachedResponse, NameQuery, StoreRecordRequest},
    errors::ApiError,
    state::CacheState,
};
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
    Json,
};
use tolldns_domain::{Answer, Name};
use tracing::{debug, instrument, warn};

#[instrument(skip(state), name = "api_get_cached")]
pub async fn get_cached(
    State(state): State<CacheState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Answer>, ApiError> {
    let params = NameQuery::from_raw(query.as_deref())
        .map_err(|e| ApiError::bad_request(format!("Invalid query string: {e}")))?;
    let raw = params
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing name"))?;
    let name = Name::parse(raw)?;

    match state.cache.get(&name) {
        Some(answer) => Ok(Json(answer)),
        None => {
            debug!(
                name = %name,
                hit_rate = state.cache.metrics().hit_rate(),
                "Cache miss"
            );
            Err(ApiError::not_found("Not found"))
        }
    }
}

/// `POST /cache` with `{name, record}`. The body is parsed by hand so that
/// malformed JSON gets the same `{error}` shape as missing fields.
#[instrument(skip(state, body), name = "api_store_cached")]
pub async fn store_cached(
    State(state): State<CacheState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CachedResponse>), ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("Missing body"));
    }
    let request: StoreRecordRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Rejected cache write with invalid JSON");
        ApiError::bad_request(format!("Invalid JSON: {e}"))
    })?;
    let (name, answer) = request.into_entry()?;

    state.cache.put(name.clone(), answer);
    debug!(name = %name, entries = state.cache.size(), "Cache entry stored");

    Ok((
        StatusCode::CREATED,
        Json(CachedResponse {
            cached: name.to_string(),
        }),
    ))
}
