//! TollDNS Application Layer
//!
//! Ports describe the collaborators of the resolution pipeline; use cases
//! compose them.
pub mod ports;
pub mod use_cases;
