use reqwest::Method;
use serde_json::Value;

use crate::client::{data_list, Query, RadiumClient};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct QuotaFilter {
    pub region: Option<String>,
    pub resource_type: Option<String>,
}

impl RadiumClient {
    pub async fn get_quotas(&self, filter: &QuotaFilter) -> Result<Vec<Value>> {
        let query = Query::new()
            .opt("region", filter.region.as_deref())
            .opt("resourceType", filter.resource_type.as_deref());
        let envelope = self
            .request(Method::GET, "/quotas", Some(&query), None)
            .await?;
        data_list(envelope, "/quotas")
    }
}
