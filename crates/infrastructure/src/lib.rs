//! TollDNS Infrastructure Layer
//!
//! Concrete engines behind the application ports (cache, quorum upstream,
//! receipt signer, policy sources), HTTP clients for running them as remote
//! services, and the DoT-style stream listener.
pub mod cache;
pub mod dot;
pub mod http;
pub mod policy;
pub mod receipt;
pub mod upstream;

pub use cache::{CacheMetrics, ResolutionCache};
pub use dot::{DotEnvelope, DotServer};
pub use policy::{FilePolicySource, StaticPolicyGate};
pub use receipt::{
    FileReceiptLedger, MemoryReceiptLedger, ReceiptLedger, ReceiptSigner, SigningSecret,
};
pub use upstream::QuorumUpstream;
