//! DoT-style front door.
//!
//! A plain TCP stub standing in for DNS-over-TLS: no TLS, no DNS framing.
//! Each connection gets one read and one JSON line back.

pub mod envelope;
pub mod server;

pub use envelope::DotEnvelope;
pub use server::DotServer;
