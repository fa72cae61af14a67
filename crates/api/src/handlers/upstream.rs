use crate::{dto::NameQuery, state::UpstreamState};
use axum::{
    extract::{RawQuery, State},
    Json,
};
use tolldns_domain::UpstreamAnswer;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_query_upstream")]
pub async fn query_upstream(
    State(state): State<UpstreamState>,
    RawQuery(query): RawQuery,
) -> Json<UpstreamAnswer> {
    let name = NameQuery::lenient(query.as_deref()).or_default(&state.default_name);
    let reply = state.upstream.query(&name);
    debug!(
        name = %name,
        required = reply.quorum.required,
        responded = reply.quorum.responded,
        "Upstream quorum answered"
    );
    Json(reply)
}
