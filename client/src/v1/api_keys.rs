use reqwest::Method;
use serde_json::{json, Value};

use crate::client::{data_list, data_object, RadiumClient};
use crate::error::Result;

impl RadiumClient {
    pub async fn list_api_keys(&self) -> Result<Vec<Value>> {
        let envelope = self.request(Method::GET, "/api-keys", None, None).await?;
        data_list(envelope, "/api-keys")
    }

    /// The returned object is the only place the full key is ever shown.
    pub async fn create_api_key(&self, name: &str) -> Result<Value> {
        let body = json!({ "name": name });
        let envelope = self
            .request(Method::POST, "/api-keys", None, Some(&body))
            .await?;
        Ok(data_object(envelope))
    }

    pub async fn update_api_key(&self, key_id: &str, name: &str) -> Result<Value> {
        let path = format!("/api-keys/{}", key_id);
        let body = json!({ "name": name });
        let envelope = self.request(Method::PUT, &path, None, Some(&body)).await?;
        Ok(data_object(envelope))
    }

    pub async fn delete_api_key(&self, key_id: &str) -> Result<()> {
        let path = format!("/api-keys/{}", key_id);
        self.request(Method::DELETE, &path, None, None).await?;
        Ok(())
    }
}
