use crate::domain::a002_permission_template::api::fetch_templates;
use crate::domain::a002_permission_template::ui::actions_cell::TemplateActionsMenu;
use crate::shared::config::use_console_config;
use crate::shared::icons::{icon, QualifierIcon};
use crate::shared::l10n::use_messages;
use contracts::domain::a002_permission_template::aggregate::PermissionTemplate;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
#[allow(non_snake_case)]
pub fn PermissionTemplatesPage() -> impl IntoView {
    let config = use_console_config();
    let messages = use_messages();
    let (templates, set_templates) = signal::<Vec<PermissionTemplate>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = {
        let base_url = config.base_url.clone();
        move || {
            let base_url = base_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_templates(&base_url).await {
                    Ok(v) => {
                        set_templates.set(v);
                        set_error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to load permission templates: {}", e);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    fetch();
    let refresh = Callback::new({
        let fetch = fetch.clone();
        move |_: ()| fetch()
    });

    let t = |key: &str| messages.translate(&[key]);
    let refresh_label = t("refresh");
    let top_qualifiers = config.top_qualifiers;
    let row_messages = messages.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{t("permission_templates.page")}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh.run(())>
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
                            <th class="table__header-cell">{t("permission_templates.project_key_pattern")}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || templates.get().into_iter().map(|template| {
                            let name = template.name.clone();
                            let on_update = Callback::new({
                                let name = name.clone();
                                move |_: ()| log::info!("Update requested for permission template '{}'", name)
                            });
                            let on_delete = Callback::new({
                                let name = name.clone();
                                let messages = row_messages.clone();
                                move |_: ()| {
                                    let question = messages.translate_with_parameters(
                                        "permission_templates.delete_confirm_x",
                                        &[name.clone()],
                                    );
                                    let confirmed = web_sys::window()
                                        .map(|w| w.confirm_with_message(&question).unwrap_or(false))
                                        .unwrap_or(false);
                                    if confirmed {
                                        log::info!("Delete confirmed for permission template '{}'", name);
                                    }
                                }
                            });
                            let defaults = template.default_for.clone();
                            let description = template.description.clone();
                            let key_pattern = template.project_key_pattern.clone();

                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <strong>{name}</strong>
                                        {defaults.into_iter().map(|q| view! {
                                            <span class="spacer-left"><QualifierIcon qualifier=q /></span>
                                        }).collect_view()}
                                        {description.map(|d| view! {
                                            <div class="note">{d}</div>
                                        })}
                                    </td>
                                    <td class="table__cell">{key_pattern}</td>
                                    <TemplateActionsMenu
                                        permission_template=template
                                        top_qualifiers=top_qualifiers.clone()
                                        on_update=on_update
                                        on_delete=on_delete
                                        refresh=refresh
                                    />
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
