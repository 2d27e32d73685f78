use crate::domain::a002_permission_template::api::PermissionTemplatesApi;
use crate::shared::api_utils::ApiError;
use crate::shared::icons::qualifier_icon_class;
use crate::shared::l10n::Messages;
use contracts::domain::a002_permission_template::aggregate::PermissionTemplate;
use contracts::domain::common::Qualifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetDefaultLabel {
    /// Only one top qualifier exists, it goes unnamed
    Generic,
    /// Labelled with the qualifier icon and localized name
    ForQualifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    SetDefault {
        qualifier: Qualifier,
        label: SetDefaultLabel,
    },
    Update,
    Delete,
}

/// Localized caption of a menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLabel {
    /// Text before the qualifier icon, or the whole caption
    pub text: String,
    /// Icon class and localized name of the qualifier, for per-qualifier links
    pub qualifier: Option<(String, String)>,
}

impl MenuEntry {
    pub fn label(&self, messages: &Messages) -> EntryLabel {
        match self {
            MenuEntry::SetDefault {
                label: SetDefaultLabel::Generic,
                ..
            } => EntryLabel {
                text: messages.translate(&["permission_templates.set_default"]),
                qualifier: None,
            },
            MenuEntry::SetDefault {
                qualifier,
                label: SetDefaultLabel::ForQualifier,
            } => EntryLabel {
                text: messages.translate(&["permission_templates.set_default_for"]),
                qualifier: Some((
                    qualifier_icon_class(qualifier),
                    messages.translate(&["qualifiers", qualifier.as_str()]),
                )),
            },
            MenuEntry::Update => EntryLabel {
                text: messages.translate(&["update_verb"]),
                qualifier: None,
            },
            MenuEntry::Delete => EntryLabel {
                text: messages.translate(&["delete"]),
                qualifier: None,
            },
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            MenuEntry::SetDefault { .. } => "js-set-default",
            MenuEntry::Update => "js-update",
            MenuEntry::Delete => "js-delete",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            MenuEntry::SetDefault { .. } => "check",
            MenuEntry::Update => "edit",
            MenuEntry::Delete => "delete",
        }
    }
}

/// Top qualifiers the template is not yet default for, in `top_qualifiers` order
pub fn available_qualifiers(
    template: &PermissionTemplate,
    top_qualifiers: &[Qualifier],
) -> Vec<Qualifier> {
    top_qualifiers
        .iter()
        .filter(|q| !template.default_for.contains(q))
        .cloned()
        .collect()
}

/// Dropdown entries in display order: set-default links, update, then
/// delete when the template is default for nothing.
pub fn menu_entries(template: &PermissionTemplate, top_qualifiers: &[Qualifier]) -> Vec<MenuEntry> {
    let label = if top_qualifiers.len() == 1 {
        SetDefaultLabel::Generic
    } else {
        SetDefaultLabel::ForQualifier
    };

    let mut entries: Vec<MenuEntry> = available_qualifiers(template, top_qualifiers)
        .into_iter()
        .map(|qualifier| MenuEntry::SetDefault { qualifier, label })
        .collect();

    entries.push(MenuEntry::Update);
    if !template.is_default() {
        entries.push(MenuEntry::Delete);
    }
    entries
}

/// Make the template default for `qualifier`, then `refresh` on success.
///
/// Errors are returned untouched and `refresh` is not called.
pub async fn set_default<A, F>(
    api: &A,
    template: &PermissionTemplate,
    qualifier: &Qualifier,
    refresh: F,
) -> Result<(), ApiError>
where
    A: PermissionTemplatesApi,
    F: FnOnce(),
{
    api.set_default_template(&template.name, qualifier).await?;
    refresh();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn qualifiers(values: &[&str]) -> Vec<Qualifier> {
        values.iter().map(|v| Qualifier::from(*v)).collect()
    }

    #[derive(Default)]
    struct FakePermissions {
        fail: bool,
        calls: RefCell<Vec<(String, Qualifier)>>,
    }

    impl PermissionTemplatesApi for FakePermissions {
        async fn set_default_template(
            &self,
            template_name: &str,
            qualifier: &Qualifier,
        ) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push((template_name.to_string(), qualifier.clone()));
            if self.fail {
                Err(ApiError::Status {
                    status: 400,
                    url: "/api/permissions/set_default_template".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_available_qualifiers_is_set_difference() {
        let template = PermissionTemplate::new("Default").with_default_for(qualifiers(&["VW"]));
        assert_eq!(
            available_qualifiers(&template, &qualifiers(&["TRK", "VW", "DEV"])),
            qualifiers(&["TRK", "DEV"])
        );
    }

    #[test]
    fn test_no_set_default_when_nothing_available() {
        let template =
            PermissionTemplate::new("Default").with_default_for(qualifiers(&["TRK", "VW"]));
        let entries = menu_entries(&template, &qualifiers(&["TRK", "VW"]));
        assert_eq!(entries, vec![MenuEntry::Update]);
    }

    #[test]
    fn test_single_top_qualifier_gives_generic_link() {
        let template = PermissionTemplate::new("New template");
        let entries = menu_entries(&template, &qualifiers(&["TRK"]));
        assert_eq!(
            entries,
            vec![
                MenuEntry::SetDefault {
                    qualifier: Qualifier::from("TRK"),
                    label: SetDefaultLabel::Generic,
                },
                MenuEntry::Update,
                MenuEntry::Delete,
            ]
        );
    }

    #[test]
    fn test_multiple_top_qualifiers_give_one_link_each() {
        let template = PermissionTemplate::new("Views").with_default_for(qualifiers(&["VW"]));
        let entries = menu_entries(&template, &qualifiers(&["TRK", "VW", "DEV"]));
        assert_eq!(
            entries,
            vec![
                MenuEntry::SetDefault {
                    qualifier: Qualifier::from("TRK"),
                    label: SetDefaultLabel::ForQualifier,
                },
                MenuEntry::SetDefault {
                    qualifier: Qualifier::from("DEV"),
                    label: SetDefaultLabel::ForQualifier,
                },
                MenuEntry::Update,
            ]
        );
    }

    #[test]
    fn test_per_qualifier_label_carries_icon_and_name() {
        let messages = Messages::english();
        let template = PermissionTemplate::new("Unused");
        let entries = menu_entries(&template, &qualifiers(&["TRK", "VW"]));

        assert_eq!(
            entries[0].label(&messages),
            EntryLabel {
                text: "Set Default For".to_string(),
                qualifier: Some(("icon-qualifier-trk".to_string(), "Projects".to_string())),
            }
        );
        assert_eq!(
            entries[1].label(&messages).qualifier,
            Some(("icon-qualifier-vw".to_string(), "Portfolios".to_string()))
        );
    }

    #[test]
    fn test_generic_label_has_no_icon() {
        let messages = Messages::english();
        let template = PermissionTemplate::new("Unused");
        let entries = menu_entries(&template, &qualifiers(&["TRK"]));

        assert_eq!(
            entries[0].label(&messages),
            EntryLabel {
                text: "Set Default".to_string(),
                qualifier: None,
            }
        );
        assert_eq!(entries[1].label(&messages).text, "Update");
        assert_eq!(entries[2].label(&messages).text, "Delete");
    }

    #[test]
    fn test_delete_only_when_not_default() {
        let top = qualifiers(&["TRK", "VW"]);
        let unused = PermissionTemplate::new("Unused");
        let default = PermissionTemplate::new("Default").with_default_for(qualifiers(&["TRK"]));

        assert!(menu_entries(&unused, &top).contains(&MenuEntry::Delete));
        assert!(!menu_entries(&default, &top).contains(&MenuEntry::Delete));
        assert!(menu_entries(&default, &top).contains(&MenuEntry::Update));
    }

    #[test]
    fn test_set_default_refreshes_on_success() {
        let api = FakePermissions::default();
        let template = PermissionTemplate::new("Default template");
        let refreshed = RefCell::new(0);

        let result = block_on(set_default(&api, &template, &Qualifier::from("VW"), || {
            *refreshed.borrow_mut() += 1
        }));

        assert!(result.is_ok());
        assert_eq!(*refreshed.borrow(), 1);
        assert_eq!(
            api.calls.borrow().as_slice(),
            &[("Default template".to_string(), Qualifier::from("VW"))]
        );
    }

    #[test]
    fn test_set_default_failure_skips_refresh() {
        let api = FakePermissions {
            fail: true,
            ..FakePermissions::default()
        };
        let template = PermissionTemplate::new("Default template");
        let refreshed = RefCell::new(0);

        let result = block_on(set_default(&api, &template, &Qualifier::from("TRK"), || {
            *refreshed.borrow_mut() += 1
        }));

        assert!(matches!(result, Err(ApiError::Status { status: 400, .. })));
        assert_eq!(*refreshed.borrow(), 0);
    }
}
