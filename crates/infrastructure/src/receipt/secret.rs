use ring::rand::{SecureRandom, SystemRandom};
use std::fmt;
use tolldns_domain::DomainError;

const GENERATED_SECRET_LEN: usize = 32;

/// Where the HMAC secret came from. Immutable once built.
///
/// Two processes with `GeneratedEphemeral` secrets produce signatures that
/// cannot verify each other's receipts.
#[derive(Clone)]
pub enum SigningSecret {
    Configured(Vec<u8>),
    GeneratedEphemeral(Vec<u8>),
}

impl SigningSecret {
    /// Uses `configured` when present and non-empty, otherwise generates.
    pub fn from_config(configured: Option<&str>) -> Result<Self, DomainError> {
        match configured {
            Some(s) if !s.is_empty() => Ok(Self::Configured(s.as_bytes().to_vec())),
            _ => Self::generate(),
        }
    }

    pub fn generate() -> Result<Self, DomainError> {
        let mut bytes = vec![0u8; GENERATED_SECRET_LEN];
        SystemRandom::new().fill(&mut bytes).map_err(|_| {
            DomainError::ReceiptStorage("system RNG unavailable for secret generation".into())
        })?;
        Ok(Self::GeneratedEphemeral(bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Configured(b) | Self::GeneratedEphemeral(b) => b,
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::GeneratedEphemeral(_))
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Configured(_) => "Configured",
            Self::GeneratedEphemeral(_) => "GeneratedEphemeral",
        };
        write!(f, "SigningSecret::{kind}(<redacted>)")
    }
}
