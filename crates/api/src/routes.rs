use crate::handlers;
use crate::state::{CacheState, PolicyServiceState, ReceiptState, ResolverState, UpstreamState};
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

fn with_common<S>(router: Router<S>, state: S) -> Router
where
    S: Clone + Send + Sync + 'static,
{
    router
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn resolve_route() -> MethodRouter<ResolverState> {
    get(handlers::resolve_name)
}

/// DoH-style front door over the resolution pipeline.
pub fn create_resolver_routes(state: ResolverState) -> Router {
    let router = Router::new()
        .route("/resolve", resolve_route())
        .route("/dns-query", resolve_route());
    with_common(router, state)
}

pub fn create_cache_routes(state: CacheState) -> Router {
    let router = Router::new().route(
        "/cache",
        get(handlers::get_cached).post(handlers::store_cached),
    );
    with_common(router, state)
}

pub fn create_upstream_routes(state: UpstreamState) -> Router {
    with_common(
        Router::new().route("/query", get(handlers::query_upstream)),
        state,
    )
}

pub fn create_receipt_routes(state: ReceiptState) -> Router {
    with_common(
        Router::new()
            .route("/receipt", post(handlers::submit_receipt))
            .route("/receipt/{id}", get(handlers::get_receipt)),
        state,
    )
}

pub fn create_policy_routes(state: PolicyServiceState) -> Router {
    with_common(
        Router::new().route("/policy", get(handlers::get_policy)),
        state,
    )
}
