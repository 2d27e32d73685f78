use crate::shared::api_utils::{api_url, get_json, with_query, ApiError};
use contracts::domain::a001_quality_profile::aggregate::{
    QualityProfile, QualityProfileSearchResponse,
};
use contracts::domain::a003_rule::dto::{RuleSearchQuery, RuleSearchResponse};

/// Rule search accessor
#[allow(async_fn_in_trait)]
pub trait RuleSearch {
    async fn search_rules(&self, query: &RuleSearchQuery) -> Result<RuleSearchResponse, ApiError>;
}

/// `GET /api/rules/search`
#[derive(Debug, Clone)]
pub struct HttpRuleSearch {
    base_url: String,
}

impl HttpRuleSearch {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl RuleSearch for HttpRuleSearch {
    async fn search_rules(&self, query: &RuleSearchQuery) -> Result<RuleSearchResponse, ApiError> {
        let url = with_query(&api_url(&self.base_url, "/api/rules/search"), query)?;
        get_json(&url).await
    }
}

/// All quality profiles of the instance
pub async fn fetch_profiles(base_url: &str) -> Result<Vec<QualityProfile>, ApiError> {
    let response: QualityProfileSearchResponse =
        get_json(&api_url(base_url, "/api/qualityprofiles/search")).await?;
    Ok(response.profiles)
}
