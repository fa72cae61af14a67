pub mod file_source;
pub mod static_gate;

pub use file_source::FilePolicySource;
pub use static_gate::StaticPolicyGate;
