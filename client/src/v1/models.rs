use reqwest::Method;
use serde_json::Value;

use crate::client::{data_list, data_object, Query, RadiumClient};
use crate::error::Result;

/// Filters for the model catalog. Unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct ModelFilter {
    pub category: Option<String>,
    pub provider: Option<String>,
    pub featured: Option<bool>,
}

impl ModelFilter {
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            ..Default::default()
        }
    }

    fn to_query(&self) -> Query {
        Query::new()
            .opt("category", self.category.as_deref())
            .opt("provider", self.provider.as_deref())
            .flag("featured", self.featured)
    }
}

impl RadiumClient {
    pub async fn list_models(&self, filter: &ModelFilter) -> Result<Vec<Value>> {
        let envelope = self
            .request(Method::GET, "/models", Some(&filter.to_query()), None)
            .await?;
        data_list(envelope, "/models")
    }

    pub async fn get_model(&self, model_id: &str) -> Result<Value> {
        let path = format!("/models/{}", model_id);
        let envelope = self.request(Method::GET, &path, None, None).await?;
        Ok(data_object(envelope))
    }
}
