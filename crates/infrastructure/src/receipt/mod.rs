pub mod canonical;
pub mod ledger;
pub mod secret;
pub mod signer;

pub use canonical::canonical_bytes;
pub use ledger::{FileReceiptLedger, MemoryReceiptLedger, ReceiptLedger};
pub use secret::SigningSecret;
pub use signer::{sign_bytes, ReceiptSigner};
