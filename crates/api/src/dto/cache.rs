use serde::{Deserialize, Serialize};
use serde_json::Value;
use tolldns_domain::{Answer, DomainError, Name};

/// `POST /cache` body. Fields stay loose so a missing one is reported as a
/// validation error rather than a parse failure.
#[derive(Deserialize, Debug)]
pub struct StoreRecordRequest {
    pub name: Option<String>,
    pub record: Option<Value>,
}

impl StoreRecordRequest {
    pub fn into_entry(self) -> Result<(Name, Answer), DomainError> {
        let (Some(name), Some(record)) = (self.name, self.record) else {
            return Err(DomainError::InvalidRequest("Missing name or record".into()));
        };
        if record.is_null() {
            return Err(DomainError::InvalidRequest("Missing name or record".into()));
        }
        let name = Name::parse(&name)?;
        let answer: Answer = serde_json::from_value(record)
            .map_err(|e| DomainError::InvalidRequest(format!("Invalid record: {e}")))?;
        Ok((name, answer))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CachedResponse {
    pub cached: String,
}
