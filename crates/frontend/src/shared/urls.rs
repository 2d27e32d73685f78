//! URL builders for pages outside this console

use contracts::domain::a003_rule::dto::RuleSearchQuery;

/// Detail page of a quality profile
pub fn quality_profile_url(base_url: &str, profile_key: &str) -> String {
    format!(
        "{}/profiles/show?key={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(profile_key)
    )
}

/// Rules page filtered by `query`; filters go in the fragment, `|`-separated
pub fn rules_url(base_url: &str, query: &RuleSearchQuery) -> String {
    let fragment = query
        .filters()
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("|");
    format!("{}/coding_rules#{}", base_url.trim_end_matches('/'), fragment)
}
