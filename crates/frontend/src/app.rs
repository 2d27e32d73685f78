use crate::domain::a001_quality_profile::ui::list::QualityProfilesPage;
use crate::domain::a002_permission_template::ui::list::PermissionTemplatesPage;
use crate::shared::config::ConsoleConfig;
use crate::shared::l10n::Messages;
use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

/// Console pages, selected with the `page` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    QualityProfiles,
    PermissionTemplates,
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::QualityProfiles, Page::PermissionTemplates];

    pub fn key(&self) -> &'static str {
        match self {
            Page::QualityProfiles => "quality_profiles",
            Page::PermissionTemplates => "permission_templates",
        }
    }

    fn title_key(&self) -> &'static str {
        match self {
            Page::QualityProfiles => "quality_profiles.page",
            Page::PermissionTemplates => "permission_templates.page",
        }
    }

    /// Page named by a location search string; unknown or missing means profiles
    pub fn from_search(search: &str) -> Self {
        let query: PageQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match query.page.as_deref() {
            Some("permission_templates") => Page::PermissionTemplates,
            _ => Page::QualityProfiles,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ConsoleConfig::from_window();
    let messages = Messages::english();

    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let current = Page::from_search(&search);
    log::debug!("opening page '{}'", current.key());

    let nav = Page::ALL
        .iter()
        .map(|page| {
            let href = format!("?page={}", page.key());
            let title = messages.translate(&[page.title_key()]);
            let is_active = *page == current;
            view! {
                <a class="top-header__link" class:top-header__link--active=is_active href=href>
                    {title}
                </a>
            }
        })
        .collect_view();

    provide_context(config);
    provide_context(messages);

    view! {
        <div class="app-layout">
            <nav class="top-header">{nav}</nav>
            <main class="app-layout__content">
                {match current {
                    Page::QualityProfiles => view! { <QualityProfilesPage /> }.into_any(),
                    Page::PermissionTemplates => view! { <PermissionTemplatesPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
