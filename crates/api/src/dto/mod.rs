pub mod cache;
pub mod error;
pub mod query;
pub mod receipt;

pub use cache::{CachedResponse, StoreRecordRequest};
pub use error::ErrorResponse;
pub use query::NameQuery;
pub use receipt::StoredReceiptResponse;
