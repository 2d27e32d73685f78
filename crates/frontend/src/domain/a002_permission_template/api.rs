use crate::shared::api_utils::{api_url, get_json, post, ApiError};
use contracts::domain::a002_permission_template::aggregate::{
    PermissionTemplate, SearchTemplatesResponse,
};
use contracts::domain::common::Qualifier;

/// Permission template accessor
#[allow(async_fn_in_trait)]
pub trait PermissionTemplatesApi {
    /// Make `template_name` the default template for `qualifier`
    async fn set_default_template(
        &self,
        template_name: &str,
        qualifier: &Qualifier,
    ) -> Result<(), ApiError>;
}

/// `/api/permissions/*` over HTTP
#[derive(Debug, Clone)]
pub struct HttpPermissions {
    base_url: String,
}

impl HttpPermissions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl PermissionTemplatesApi for HttpPermissions {
    async fn set_default_template(
        &self,
        template_name: &str,
        qualifier: &Qualifier,
    ) -> Result<(), ApiError> {
        post(
            &api_url(&self.base_url, "/api/permissions/set_default_template"),
            &[
                ("templateName", template_name),
                ("qualifier", qualifier.as_str()),
            ],
        )
        .await
    }
}

/// All templates, with `default_for` resolved
pub async fn fetch_templates(base_url: &str) -> Result<Vec<PermissionTemplate>, ApiError> {
    let response: SearchTemplatesResponse =
        get_json(&api_url(base_url, "/api/permissions/search_templates")).await?;
    Ok(response.into_templates())
}
