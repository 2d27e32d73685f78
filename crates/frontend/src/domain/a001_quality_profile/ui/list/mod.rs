use crate::domain::a001_quality_profile::api::fetch_profiles;
use crate::domain::a001_quality_profile::ui::deprecated_rules::ProfileListPanel;
use crate::domain::a001_quality_profile::ui::profile_date::RelativeDateLabel;
use crate::shared::config::use_console_config;
use crate::shared::icons::icon;
use crate::shared::l10n::use_messages;
use crate::shared::urls::quality_profile_url;
use contracts::domain::a001_quality_profile::aggregate::QualityProfile;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
#[allow(non_snake_case)]
pub fn QualityProfilesPage() -> impl IntoView {
    let config = use_console_config();
    let messages = use_messages();
    let (profiles, set_profiles) = signal::<Option<Vec<QualityProfile>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = {
        let base_url = config.base_url.clone();
        move || {
            let base_url = base_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_profiles(&base_url).await {
                    Ok(v) => {
                        set_profiles.set(Some(v));
                        set_error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to load quality profiles: {}", e);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    fetch();

    let t = |key: &str| messages.translate(&[key]);
    let refresh_label = t("refresh");
    let default_label = t("default");
    let base_url = config.base_url;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{t("quality_profiles.page")}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        {refresh_label}
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{t("name")}</th>
                            <th class="table__header-cell">{t("language")}</th>
                            <th class="table__header-cell">{t("quality_profiles.list.rules")}</th>
                            <th class="table__header-cell">{t("quality_profiles.list.updated")}</th>
                            <th class="table__header-cell">{t("quality_profiles.list.used")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || profiles.get().unwrap_or_default().into_iter().map(|p| {
                            let url = quality_profile_url(&base_url, &p.key);
                            let language = p.language_name.clone().unwrap_or_else(|| p.language.clone());
                            let default_badge = p.is_default.then(|| view! {
                                <span class="badge badge--neutral spacer-left">{default_label.clone()}</span>
                            });
                            view! {
                                <tr class="table__row" data-key=p.key.clone()>
                                    <td class="table__cell"><a href=url>{p.name}</a>{default_badge}</td>
                                    <td class="table__cell">{language}</td>
                                    <td class="table__cell">{p.active_rule_count.map(|c| c.to_string())}</td>
                                    <td class="table__cell"><RelativeDateLabel date=p.rules_updated_at /></td>
                                    <td class="table__cell"><RelativeDateLabel date=p.last_used /></td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="overview-meta">
                {move || profiles.get().map(|profiles| view! {
                    <ProfileListPanel profiles=profiles />
                })}
            </div>
        </div>
    }
}
