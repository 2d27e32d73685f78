use crate::domain::a001_quality_profile::api::RuleSearch;
use crate::shared::api_utils::ApiError;
use crate::shared::l10n::Messages;
use crate::shared::lifecycle::ActiveFlag;
use crate::shared::urls::{quality_profile_url, rules_url};
use contracts::domain::a001_quality_profile::aggregate::QualityProfile;
use contracts::domain::a003_rule::dto::RuleSearchQuery;
use futures::future::try_join_all;
use std::collections::HashMap;

/// Number of deprecated active rules, by profile key
pub type DeprecatedCounts = HashMap<String, u64>;

/// Warning link shown next to a profile using deprecated rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedWarning {
    pub count: u64,
    pub url: String,
    pub title: String,
}

/// One line of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub key: String,
    pub name: String,
    pub language: String,
    pub url: String,
    pub warning: Option<DeprecatedWarning>,
}

async fn count_deprecated<S: RuleSearch>(search: &S, profile_key: &str) -> Result<u64, ApiError> {
    let query = RuleSearchQuery::deprecated_in_profile(profile_key).count_only();
    Ok(search.search_rules(&query).await?.total)
}

/// Count deprecated rules of every profile, one request per profile, all in
/// flight at once. Any failed request fails the whole batch.
pub async fn load_deprecated_counts<S: RuleSearch>(
    search: &S,
    profiles: &[QualityProfile],
) -> Result<DeprecatedCounts, ApiError> {
    let totals = try_join_all(
        profiles
            .iter()
            .map(|profile| count_deprecated(search, &profile.key)),
    )
    .await?;

    Ok(profiles
        .iter()
        .map(|profile| profile.key.clone())
        .zip(totals)
        .collect())
}

/// Load counts and hand them to `commit` if `active` still holds once the
/// batch resolved. Returns whether `commit` ran.
///
/// A failed batch is logged and commits nothing.
pub async fn refresh_deprecated_counts<S, F>(
    search: &S,
    profiles: &[QualityProfile],
    active: &ActiveFlag,
    commit: F,
) -> bool
where
    S: RuleSearch,
    F: FnOnce(DeprecatedCounts),
{
    match load_deprecated_counts(search, profiles).await {
        Ok(counts) => {
            if !active.is_active() {
                log::debug!("deprecated rule counts resolved after unmount, dropped");
                return false;
            }
            commit(counts);
            true
        }
        Err(e) => {
            log::warn!("failed to load deprecated rule counts: {}", e);
            false
        }
    }
}

/// Rows to display, in profile order
pub fn profile_rows(
    profiles: &[QualityProfile],
    counts: &DeprecatedCounts,
    base_url: &str,
    messages: &Messages,
) -> Vec<ProfileRow> {
    profiles
        .iter()
        .map(|profile| {
            let warning = counts
                .get(&profile.key)
                .copied()
                .filter(|count| *count > 0)
                .map(|count| DeprecatedWarning {
                    count,
                    url: rules_url(base_url, &RuleSearchQuery::deprecated_in_profile(&profile.key)),
                    title: messages
                        .translate_with_parameters("overview.deprecated_profile", &[count.to_string()]),
                });

            ProfileRow {
                key: profile.key.clone(),
                name: profile.name.clone(),
                language: format!("({})", profile.language),
                url: quality_profile_url(base_url, &profile.key),
                warning,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_rule::dto::RuleSearchResponse;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeRuleSearch {
        totals: HashMap<String, Result<u64, ApiError>>,
        requests: RefCell<Vec<RuleSearchQuery>>,
        deactivate_on_request: Option<ActiveFlag>,
    }

    impl FakeRuleSearch {
        fn with_total(mut self, key: &str, total: u64) -> Self {
            self.totals.insert(key.to_string(), Ok(total));
            self
        }

        fn with_failure(mut self, key: &str) -> Self {
            self.totals
                .insert(key.to_string(), Err(ApiError::Network("connection reset".into())));
            self
        }
    }

    impl RuleSearch for FakeRuleSearch {
        async fn search_rules(
            &self,
            query: &RuleSearchQuery,
        ) -> Result<RuleSearchResponse, ApiError> {
            self.requests.borrow_mut().push(query.clone());
            if let Some(flag) = &self.deactivate_on_request {
                flag.deactivate();
            }
            let total = self
                .totals
                .get(&query.qprofile)
                .cloned()
                .unwrap_or(Ok(0))?;
            Ok(RuleSearchResponse { total })
        }
    }

    fn profiles() -> Vec<QualityProfile> {
        vec![
            QualityProfile::new("p1", "Default Java", "java"),
            QualityProfile::new("p2", "Strict JS", "js"),
            QualityProfile::new("p3", "Sonar way", "py"),
        ]
    }

    #[test]
    fn test_one_request_per_profile() {
        let search = FakeRuleSearch::default().with_total("p1", 3).with_total("p2", 0);
        let counts = block_on(load_deprecated_counts(&search, &profiles())).unwrap();

        let requests = search.requests.borrow();
        assert_eq!(requests.len(), 3);
        let keys: Vec<&str> = requests.iter().map(|q| q.qprofile.as_str()).collect();
        assert_eq!(keys, vec!["p1", "p2", "p3"]);
        for query in requests.iter() {
            assert!(query.activation);
            assert_eq!(query.statuses, "DEPRECATED");
            assert_eq!(query.ps, Some(1));
        }

        assert_eq!(counts.len(), 3);
        assert_eq!(counts["p1"], 3);
        assert_eq!(counts["p2"], 0);
    }

    #[test]
    fn test_counts_are_keyed_by_profile_key() {
        let search = FakeRuleSearch::default().with_total("p1", 1).with_total("p3", 7);
        let mut reordered = profiles();
        reordered.reverse();

        let counts = block_on(load_deprecated_counts(&search, &reordered)).unwrap();
        assert_eq!(counts["p1"], 1);
        assert_eq!(counts["p3"], 7);
    }

    #[test]
    fn test_single_failure_discards_whole_batch() {
        let search = FakeRuleSearch::default()
            .with_total("p1", 3)
            .with_failure("p2")
            .with_total("p3", 5);
        let active = ActiveFlag::new();
        let mut committed = None;

        let applied = block_on(refresh_deprecated_counts(&search, &profiles(), &active, |c| {
            committed = Some(c)
        }));

        assert!(!applied);
        assert!(committed.is_none());
    }

    #[test]
    fn test_no_commit_after_deactivation() {
        let active = ActiveFlag::new();
        let search = FakeRuleSearch {
            deactivate_on_request: Some(active.clone()),
            ..FakeRuleSearch::default()
        }
        .with_total("p1", 3);
        let mut committed = None;

        let applied = block_on(refresh_deprecated_counts(&search, &profiles(), &active, |c| {
            committed = Some(c)
        }));

        assert!(!applied);
        assert!(committed.is_none());
    }

    #[test]
    fn test_commit_while_active() {
        let search = FakeRuleSearch::default().with_total("p1", 3);
        let active = ActiveFlag::new();
        let mut committed = None;

        let applied = block_on(refresh_deprecated_counts(&search, &profiles(), &active, |c| {
            committed = Some(c)
        }));

        assert!(applied);
        assert_eq!(committed.unwrap().get("p1"), Some(&3));
    }

    #[test]
    fn test_warning_only_for_nonzero_counts() {
        let mut counts = DeprecatedCounts::new();
        counts.insert("p1".into(), 2);
        counts.insert("p2".into(), 0);

        let rows = profile_rows(&profiles(), &counts, "", &Messages::english());
        assert!(rows[0].warning.is_some());
        assert!(rows[1].warning.is_none());
        assert!(rows[2].warning.is_none());
    }

    #[test]
    fn test_end_to_end_single_java_profile() {
        let profiles = vec![QualityProfile::new("p1", "Default Java", "java")];
        let search = FakeRuleSearch::default().with_total("p1", 3);
        let active = ActiveFlag::new();
        let mut counts = DeprecatedCounts::new();

        block_on(refresh_deprecated_counts(&search, &profiles, &active, |c| counts = c));
        let rows = profile_rows(&profiles, &counts, "/sonar", &Messages::english());

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.name, "Default Java");
        assert_eq!(row.language, "(java)");
        assert_eq!(row.url, "/sonar/profiles/show?key=p1");

        let warning = row.warning.as_ref().unwrap();
        assert_eq!(warning.count, 3);
        assert!(warning.title.contains('3'));
        assert_eq!(
            warning.url,
            "/sonar/coding_rules#qprofile=p1|activation=true|statuses=DEPRECATED"
        );
    }
}
