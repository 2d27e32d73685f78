use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource type tag (`TRK`, `VW`, `DEV`, ...) used to scope default templates.
///
/// Opaque on the client side: it is only compared, displayed and used as a
/// localization key suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Qualifier(pub String);

impl Qualifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Qualifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Qualifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let q = Qualifier::from("TRK");
        assert_eq!(serde_json::to_string(&q).unwrap(), "\"TRK\"");
        let back: Qualifier = serde_json::from_str("\"VW\"").unwrap();
        assert_eq!(back.as_str(), "VW");
    }
}
