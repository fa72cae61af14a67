//! TollDNS Domain Layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod name;
pub mod policy;
pub mod receipt;
pub mod resolution;
pub mod validators;

pub use answer::{Answer, QuorumTally, UpstreamAnswer};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use name::Name;
pub use policy::{PolicyDecision, PolicyState};
pub use receipt::{ReceiptPayload, ReceiptTicket, SignedReceipt};
pub use resolution::{ResolutionResult, ResolutionSource};
