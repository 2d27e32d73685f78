use crate::domain::common::Qualifier;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Named bundle of permission grants.
///
/// `name` is unique and is what the set-default call identifies the template
/// by. `default_for` is not sent by the server on the template itself; it is
/// resolved from [`SearchTemplatesResponse::default_templates`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionTemplate {
    #[serde(default)]
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key_pattern: Option<String>,

    #[serde(default)]
    pub default_for: Vec<Qualifier>,
}

impl PermissionTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            description: None,
            project_key_pattern: None,
            default_for: Vec::new(),
        }
    }

    pub fn with_default_for(mut self, qualifiers: impl IntoIterator<Item = Qualifier>) -> Self {
        self.default_for = qualifiers.into_iter().collect();
        self
    }

    /// A template that is default for at least one qualifier cannot be deleted
    pub fn is_default(&self) -> bool {
        !self.default_for.is_empty()
    }
}

// ============================================================================
// API responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultTemplate {
    pub template_id: String,
    pub qualifier: Qualifier,
}

/// Response of `GET /api/permissions/search_templates`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTemplatesResponse {
    #[serde(default)]
    pub permission_templates: Vec<PermissionTemplate>,
    #[serde(default)]
    pub default_templates: Vec<DefaultTemplate>,
}

impl SearchTemplatesResponse {
    /// Templates with `default_for` filled from the default assignments,
    /// in server order.
    pub fn into_templates(self) -> Vec<PermissionTemplate> {
        let defaults = self.default_templates;
        self.permission_templates
            .into_iter()
            .map(|mut template| {
                template.default_for = defaults
                    .iter()
                    .filter(|d| d.template_id == template.id)
                    .map(|d| d.qualifier.clone())
                    .collect();
                template
            })
            .collect()
    }
}
