//! Localized messages lookup

use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Message bundle: key to localized text with `{0}`, `{1}`... placeholders.
///
/// Cheap to clone. Unknown keys are returned as-is so missing translations
/// stay visible instead of rendering blank.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    entries: Arc<HashMap<String, String>>,
}

const ENGLISH: &[(&str, &str)] = &[
    ("actions", "Actions"),
    ("default", "Default"),
    ("delete", "Delete"),
    ("never", "Never"),
    ("update_verb", "Update"),
    ("refresh", "Refresh"),
    ("name", "Name"),
    ("language", "Language"),
    ("description", "Description"),
    ("overview.quality_profiles", "Quality Profiles"),
    (
        "overview.deprecated_profile",
        "This quality profile uses {0} deprecated rules and should be updated.",
    ),
    ("quality_profiles.page", "Quality Profiles"),
    ("quality_profiles.list.rules", "Active Rules"),
    ("quality_profiles.list.updated", "Updated"),
    ("quality_profiles.list.used", "Used"),
    ("permission_templates.page", "Permission Templates"),
    ("permission_templates.set_default", "Set Default"),
    ("permission_templates.set_default_for", "Set Default For"),
    ("permission_templates.project_key_pattern", "Project Key Pattern"),
    (
        "permission_templates.delete_confirm_x",
        "Are you sure that you want to delete \"{0}\"?",
    ),
    ("qualifiers.TRK", "Projects"),
    ("qualifiers.VW", "Portfolios"),
    ("qualifiers.SVW", "Sub-portfolios"),
    ("qualifiers.APP", "Applications"),
    ("qualifiers.DEV", "Developers"),
];

impl Messages {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Built-in English bundle
    pub fn english() -> Self {
        Self::new(
            ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Look up the key made of `keys` joined with `.`
    pub fn translate(&self, keys: &[&str]) -> String {
        let key = keys.join(".");
        match self.entries.get(&key) {
            Some(message) => message.clone(),
            None => key,
        }
    }

    /// Look up `key` and substitute `{i}` with `parameters[i]`.
    ///
    /// A missing key renders as `key.param0.param1...`.
    pub fn translate_with_parameters(&self, key: &str, parameters: &[String]) -> String {
        match self.entries.get(key) {
            Some(message) => parameters
                .iter()
                .enumerate()
                .fold(message.clone(), |acc, (i, p)| {
                    acc.replace(&format!("{{{}}}", i), p)
                }),
            None => {
                let mut parts = vec![key.to_string()];
                parts.extend(parameters.iter().cloned());
                parts.join(".")
            }
        }
    }
}

/// Messages from context, falling back to the English bundle
pub fn use_messages() -> Messages {
    use_context::<Messages>().unwrap_or_else(Messages::english)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_joins_keys() {
        let messages = Messages::english();
        assert_eq!(messages.translate(&["qualifiers", "TRK"]), "Projects");
        assert_eq!(messages.translate(&["never"]), "Never");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let messages = Messages::english();
        assert_eq!(messages.translate(&["qualifiers", "XYZ"]), "qualifiers.XYZ");
        assert_eq!(
            messages.translate_with_parameters("missing.key", &["3".to_string()]),
            "missing.key.3"
        );
    }

    #[test]
    fn test_parameters_are_substituted() {
        let mut entries = HashMap::new();
        entries.insert("k".to_string(), "{1} of {0}, again {1}".to_string());
        let messages = Messages::new(entries);
        assert_eq!(
            messages.translate_with_parameters("k", &["ten".to_string(), "two".to_string()]),
            "two of ten, again two"
        );
    }
}
