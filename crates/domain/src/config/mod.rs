//! Configuration module for TollDNS
//!
//! Structures are grouped by the service they configure:
//! - `root`: main configuration, environment overlay and CLI overrides
//! - `server`: listening ports and bind address
//! - `resolver`: collaborator URLs, timeouts and the default query name
//! - `upstream`: canned upstream answer and quorum settings
//! - `receipt`: signing secret and ledger directory
//! - `policy`: policy document location
//! - `logging`: log level
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod policy;
pub mod receipt;
pub mod resolver;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use policy::PolicyConfig;
pub use receipt::ReceiptConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
