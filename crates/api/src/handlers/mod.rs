pub mod cache;
pub mod fallback;
pub mod health;
pub mod policy;
pub mod receipt;
pub mod resolve;
pub mod upstream;

pub use cache::{get_cached, store_cached};
pub use fallback::{method_not_allowed, not_found};
pub use health::health_check;
pub use policy::get_policy;
pub use receipt::{get_receipt, submit_receipt};
pub use resolve::resolve_name;
pub use upstream::query_upstream;
