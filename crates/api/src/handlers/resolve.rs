use crate::{dto::NameQuery, errors::ApiError, state::ResolverState};
use axum::{
    extract::{RawQuery, State},
    Json,
};
use tolldns_domain::ResolutionResult;
use tracing::{debug, error, instrument};

/// `GET /resolve` and `GET /dns-query`.
///
/// A missing, empty or malformed `name` resolves the configured default
/// name instead of failing the request. A repeated `name` uses the first.
#[instrument(skip(state), name = "api_resolve_name")]
pub async fn resolve_name(
    State(state): State<ResolverState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ResolutionResult>, ApiError> {
    let name = NameQuery::lenient(query.as_deref()).or_default(&state.default_name);
    debug!(name = %name, "Resolving name");

    match state.resolve.execute(&name).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!(name = %name, error = %e, "Resolution failed");
            Err(e.into())
        }
    }
}
