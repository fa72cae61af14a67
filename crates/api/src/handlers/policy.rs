use crate::{errors::ApiError, state::PolicyServiceState};
use axum::{extract::State, Json};
use tolldns_domain::PolicyDecision;
use tracing::{error, instrument};

/// Serves the policy file, re-read on every request.
#[instrument(skip(state), name = "api_get_policy")]
pub async fn get_policy(
    State(state): State<PolicyServiceState>,
) -> Result<Json<PolicyDecision>, ApiError> {
    state.source.load().await.map(Json).map_err(|e| {
        error!(path = %state.source.path().display(), error = %e, "Policy file unusable");
        ApiError::from(e)
    })
}
