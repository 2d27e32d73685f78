use super::model::{profile_rows, refresh_deprecated_counts, DeprecatedCounts};
use crate::domain::a001_quality_profile::api::HttpRuleSearch;
use crate::shared::config::use_console_config;
use crate::shared::icons::icon;
use crate::shared::l10n::use_messages;
use crate::shared::lifecycle::use_active_flag;
use contracts::domain::a001_quality_profile::aggregate::QualityProfile;
use leptos::prelude::*;

/// Quality profiles used by a project, with a warning on each profile that
/// still activates deprecated rules.
///
/// Counts are fetched once on mount. Until they arrive, or if any of them
/// fails, profiles are listed without warnings.
#[component]
#[allow(non_snake_case)]
pub fn ProfileListPanel(profiles: Vec<QualityProfile>) -> impl IntoView {
    let config = use_console_config();
    let messages = use_messages();
    let (counts, set_counts) = signal(DeprecatedCounts::new());
    let active = use_active_flag();

    {
        let search = HttpRuleSearch::new(config.base_url.clone());
        let profiles = profiles.clone();
        wasm_bindgen_futures::spawn_local(async move {
            refresh_deprecated_counts(&search, &profiles, &active, move |loaded| {
                log::debug!("deprecated rule counts loaded for {} profiles", loaded.len());
                set_counts.set(loaded);
            })
            .await;
        });
    }

    let title = messages.translate(&["overview.quality_profiles"]);
    let base_url = config.base_url;

    view! {
        <div>
            <h4 class="overview-meta-header">{title}</h4>

            <ul class="overview-meta-list">
                {move || counts.with(|counts| {
                    profile_rows(&profiles, counts, &base_url, &messages)
                        .into_iter()
                        .map(|row| {
                            let warning = row.warning.map(|w| view! {
                                <a
                                    class="spacer-right"
                                    href=w.url
                                    title=w.title
                                    data-toggle="tooltip"
                                >
                                    {icon("alert-warn")}
                                </a>
                            });
                            view! {
                                <li data-key=row.key>
                                    {warning}
                                    <span class="note spacer-right">{row.language}</span>
                                    <a href=row.url>{row.name}</a>
                                </li>
                            }
                        })
                        .collect_view()
                })}
            </ul>
        </div>
    }
}
