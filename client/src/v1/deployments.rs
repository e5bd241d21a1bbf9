use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::{data_list, data_object, Query, RadiumClient};
use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeployment {
    pub model_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "is_unset")]
    pub configuration: Option<Value>,
}

// An empty object carries no settings and is left off the wire too.
fn is_unset(configuration: &Option<Value>) -> bool {
    match configuration {
        None | Some(Value::Null) => true,
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

impl CreateDeployment {
    pub fn new(model_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            name: name.into(),
            configuration: None,
        }
    }

    pub fn with_configuration(mut self, configuration: Value) -> Self {
        self.configuration = Some(configuration);
        self
    }
}

impl RadiumClient {
    pub async fn list_deployments(&self, status: Option<&str>) -> Result<Vec<Value>> {
        let query = Query::new().opt("status", status);
        let envelope = self
            .request(Method::GET, "/deployments", Some(&query), None)
            .await?;
        data_list(envelope, "/deployments")
    }

    pub async fn create_deployment(&self, deployment: &CreateDeployment) -> Result<Value> {
        let body = serde_json::to_value(deployment).map_err(|e| ApiError::Decode {
            path: "/deployments".to_string(),
            reason: e.to_string(),
        })?;
        let envelope = self
            .request(Method::POST, "/deployments", None, Some(&body))
            .await?;
        Ok(data_object(envelope))
    }

    pub async fn get_deployment(&self, deployment_id: &str) -> Result<Value> {
        let path = format!("/deployments/{}", deployment_id);
        let envelope = self.request(Method::GET, &path, None, None).await?;
        Ok(data_object(envelope))
    }

    /// Sends `changes` verbatim as the PUT body.
    pub async fn update_deployment(&self, deployment_id: &str, changes: &Value) -> Result<Value> {
        let path = format!("/deployments/{}", deployment_id);
        let envelope = self.request(Method::PUT, &path, None, Some(changes)).await?;
        Ok(data_object(envelope))
    }

    pub async fn delete_deployment(&self, deployment_id: &str) -> Result<()> {
        let path = format!("/deployments/{}", deployment_id);
        self.request(Method::DELETE, &path, None, None).await?;
        Ok(())
    }
}
