use serde::{Deserialize, Serialize};

/// Rule status filter value for rules the engine marked obsolete
pub const STATUS_DEPRECATED: &str = "DEPRECATED";

/// Query of `GET /api/rules/search`.
///
/// Only the filters the console uses are modelled. Field order is the
/// serialization order, which also drives the rules page URL fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSearchQuery {
    pub qprofile: String,
    pub activation: bool,
    pub statuses: String,
    /// Page size; `1` when only `total` matters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ps: Option<u32>,
}

impl RuleSearchQuery {
    /// Deprecated rules activated in the given profile, as a filter
    pub fn deprecated_in_profile(profile_key: impl Into<String>) -> Self {
        Self {
            qprofile: profile_key.into(),
            activation: true,
            statuses: STATUS_DEPRECATED.to_string(),
            ps: None,
        }
    }

    /// Same filter, asking only for the count
    pub fn count_only(mut self) -> Self {
        self.ps = Some(1);
        self
    }

    /// Filter fields as `(name, value)` pairs, page size excluded
    pub fn filters(&self) -> Vec<(&'static str, String)> {
        vec![
            ("qprofile", self.qprofile.clone()),
            ("activation", self.activation.to_string()),
            ("statuses", self.statuses.clone()),
        ]
    }
}

/// Response of `GET /api/rules/search`; only the match count is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSearchResponse {
    pub total: u64,
}
