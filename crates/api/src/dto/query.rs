use serde::Deserialize;
use tolldns_domain::Name;

/// `name` from a query string. Repeated keys keep the first value.
#[derive(Deserialize, Debug, Default)]
pub struct NameQuery {
    pub name: Option<String>,
}

impl NameQuery {
    /// Parses a raw query string; only an undecodable string is an error.
    pub fn from_raw(raw: Option<&str>) -> Result<Self, serde_urlencoded::de::Error> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)?;
        let name = pairs
            .into_iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value);
        Ok(Self { name })
    }

    /// Like [`NameQuery::from_raw`], but an undecodable string reads as no name.
    pub fn lenient(raw: Option<&str>) -> Self {
        Self::from_raw(raw).unwrap_or_default()
    }

    /// The requested name when present and valid.
    pub fn parsed(&self) -> Option<Name> {
        self.name.as_deref().and_then(|n| Name::parse(n).ok())
    }

    /// The requested name, or `fallback` when missing or invalid.
    pub fn or_default(&self, fallback: &Name) -> Name {
        self.parsed().unwrap_or_else(|| fallback.clone())
    }
}
