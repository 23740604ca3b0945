//! Read-only access to the message templates registered with Zenvia.

use crate::zenvia::api_client::ZenviaApiClient;
use crate::zenvia::error::ZenviaResult;
use crate::zenvia::types::*;
use log::debug;

/// Template look-up operations.
#[derive(Debug, Clone)]
pub struct ZvTemplates {
    client: ZenviaApiClient,
}

impl ZvTemplates {
    pub fn new(client: ZenviaApiClient) -> Self {
        Self { client }
    }

    /// List templates, optionally narrowed by channel, sender, and status.
    pub async fn list(&self, filter: &ZvTemplateFilter) -> ZenviaResult<Vec<ZvTemplate>> {
        let url = self.client.url(&["templates"]);
        let templates: Vec<ZvTemplate> = self
            .client
            .get_with_params(url, &filter.query_params())
            .await?;
        debug!("Listed {} templates", templates.len());
        Ok(templates)
    }

    /// Fetch one template by id.
    pub async fn retrieve(&self, id: &str) -> ZenviaResult<ZvTemplate> {
        let url = self.client.url(&["templates", id]);
        self.client.get(url).await
    }
}
