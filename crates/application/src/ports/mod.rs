mod answer_cache;
mod policy_gate;
mod receipt_sink;
mod upstream_resolver;

pub use answer_cache::AnswerCache;
pub use policy_gate::PolicyGate;
pub use receipt_sink::ReceiptSink;
pub use upstream_resolver::UpstreamResolver;
