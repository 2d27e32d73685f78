use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Quality profile: a named, language-scoped set of active rules.
///
/// `key` is the unique identifier. Everything past `language` is optional
/// because the project overview only receives key, name and language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfile {
    pub key: String,
    pub name: String,
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_rule_count: Option<u64>,

    /// ISO-8601 timestamp of the last rule change, absent if never updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_updated_at: Option<String>,

    /// ISO-8601 timestamp of the last analysis using the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<String>,
}

impl QualityProfile {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            language: language.into(),
            language_name: None,
            is_default: false,
            active_rule_count: None,
            rules_updated_at: None,
            last_used: None,
        }
    }
}

// ============================================================================
// API responses
// ============================================================================

/// Response of `GET /api/qualityprofiles/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityProfileSearchResponse {
    #[serde(default)]
    pub profiles: Vec<QualityProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response_with_optional_fields() {
        let json = r#"{
            "profiles": [
                {
                    "key": "java-sonar-way-12345",
                    "name": "Sonar way",
                    "language": "java",
                    "languageName": "Java",
                    "isDefault": true,
                    "activeRuleCount": 254,
                    "rulesUpdatedAt": "2016-03-01T10:00:00+0000",
                    "lastUsed": "2016-03-10T08:15:00+0000"
                },
                { "key": "js-x", "name": "Strict", "language": "js" }
            ]
        }"#;

        let response: QualityProfileSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.profiles.len(), 2);

        let first = &response.profiles[0];
        assert!(first.is_default);
        assert_eq!(first.active_rule_count, Some(254));
        assert_eq!(first.language_name.as_deref(), Some("Java"));

        let second = &response.profiles[1];
        assert_eq!(second, &QualityProfile::new("js-x", "Strict", "js"));
        assert!(second.last_used.is_none());
    }
}
