use crate::{dto::StoredReceiptResponse, errors::ApiError, state::ReceiptState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tolldns_domain::ReceiptTicket;
use tracing::{debug, error, info, instrument, warn};

#[instrument(skip(state, body), name = "api_submit_receipt")]
pub async fn submit_receipt(
    State(state): State<ReceiptState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ReceiptTicket>), ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("Missing body"));
    }
    let record: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))?;
    if record.is_null() {
        return Err(ApiError::bad_request("Missing body"));
    }

    match state.signer.submit(record).await {
        Ok(ticket) => {
            info!(receipt_id = %ticket.id, location = %ticket.location, "Receipt stored");
            Ok((StatusCode::CREATED, Json(ticket)))
        }
        Err(e) => {
            error!(error = %e, "Failed to store receipt");
            Err(e.into())
        }
    }
}

#[instrument(skip(state), name = "api_get_receipt")]
pub async fn get_receipt(
    State(state): State<ReceiptState>,
    Path(id): Path<String>,
) -> Result<Json<StoredReceiptResponse>, ApiError> {
    let Some(receipt) = state.signer.fetch(&id).await? else {
        debug!(receipt_id = %id, "Receipt not found");
        return Err(ApiError::not_found("Not found"));
    };

    let verified = state.signer.verify(&receipt);
    if !verified {
        warn!(receipt_id = %id, "Stored receipt fails signature check");
    }
    Ok(Json(StoredReceiptResponse { receipt, verified }))
}
