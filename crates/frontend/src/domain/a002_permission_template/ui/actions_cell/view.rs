use super::menu::{menu_entries, set_default, EntryLabel, MenuEntry};
use crate::domain::a002_permission_template::api::HttpPermissions;
use crate::shared::config::use_console_config;
use crate::shared::icons::icon;
use crate::shared::l10n::use_messages;
use contracts::domain::a002_permission_template::aggregate::PermissionTemplate;
use contracts::domain::common::Qualifier;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Actions dropdown cell of the permission templates table
#[component]
#[allow(non_snake_case)]
pub fn TemplateActionsMenu(
    permission_template: PermissionTemplate,
    /// Root qualifiers of the instance
    top_qualifiers: Vec<Qualifier>,
    on_update: Callback<()>,
    on_delete: Callback<()>,
    /// Called after the template became default for some qualifier
    refresh: Callback<()>,
) -> impl IntoView {
    let config = use_console_config();
    let messages = use_messages();
    let (open, set_open) = signal(false);

    let on_set_default = {
        let base_url = config.base_url.clone();
        let template = permission_template.clone();
        move |qualifier: Qualifier| {
            let api = HttpPermissions::new(base_url.clone());
            let template = template.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = set_default(&api, &template, &qualifier, || refresh.run(())).await {
                    log::error!(
                        "Unhandled error setting '{}' default for {}: {}",
                        template.name,
                        qualifier,
                        e
                    );
                }
            });
        }
    };

    let items = menu_entries(&permission_template, &top_qualifiers)
        .into_iter()
        .map(|entry| {
            let class_name = entry.class_name();
            let entry_icon = icon(entry.icon_name());
            let qualifier_attr = match &entry {
                MenuEntry::SetDefault { qualifier, .. } => Some(qualifier.to_string()),
                _ => None,
            };

            let label = match entry.label(&messages) {
                EntryLabel {
                    text,
                    qualifier: Some((icon_class, name)),
                } => view! {
                    <span>{text}" "<i class=icon_class></i>" "{name}</span>
                }
                .into_any(),
                EntryLabel { text, qualifier: None } => view! { <span>{text}</span> }.into_any(),
            };

            let on_set_default = on_set_default.clone();
            let on_click = move |ev: MouseEvent| {
                ev.prevent_default();
                set_open.set(false);
                match &entry {
                    MenuEntry::SetDefault { qualifier, .. } => on_set_default(qualifier.clone()),
                    MenuEntry::Update => on_update.run(()),
                    MenuEntry::Delete => on_delete.run(()),
                }
            };

            view! {
                <li>
                    <a href="#" class=class_name data-qualifier=qualifier_attr on:click=on_click>
                        <div class="dropdown-icon">{entry_icon}</div>
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    let actions_label = messages.translate(&["actions"]);

    view! {
        <td class="actions-column">
            <div class="dropdown" class:open=move || open.get()>
                <button
                    class="dropdown-toggle"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        set_open.update(|o| *o = !*o);
                    }
                >
                    {actions_label}
                    " "
                    {icon("dropdown")}
                </button>

                <ul class="dropdown-menu dropdown-menu-right">
                    {items}
                </ul>
            </div>
        </td>
    }
}
