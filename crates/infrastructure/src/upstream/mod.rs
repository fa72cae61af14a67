pub mod quorum;

pub use quorum::QuorumUpstream;
