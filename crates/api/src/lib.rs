pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use routes::{
    create_cache_routes, create_policy_routes, create_receipt_routes, create_resolver_routes,
    create_upstream_routes,
};
pub use state::{CacheState, PolicyServiceState, ReceiptState, ResolverState, UpstreamState};
