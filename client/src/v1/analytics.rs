use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::client::{data_object, Query, RadiumClient};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AnalyticsQuery {
    pub timeframe: String,
    pub metric: String,
}

impl Default for AnalyticsQuery {
    fn default() -> Self {
        Self {
            timeframe: "24h".to_string(),
            metric: "requests".to_string(),
        }
    }
}

impl AnalyticsQuery {
    pub fn timeframe(timeframe: impl Into<String>) -> Self {
        Self {
            timeframe: timeframe.into(),
            ..Default::default()
        }
    }
}

/// The `summary` block of an analytics payload.
///
/// The platform formats most figures as display strings (`"1,204"`,
/// `"$0.4210"`, `"2.50%"`), so fields stay as raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSummary {
    pub total_requests: Value,
    pub error_rate: Value,
    pub total_cost: Value,
    pub avg_latency: Value,
}

impl AnalyticsSummary {
    /// Reads `summary` out of an analytics `data` object; missing or
    /// malformed summaries give an all-null value.
    pub fn from_data(data: &Value) -> Self {
        data.get("summary")
            .cloned()
            .and_then(|summary| serde_json::from_value(summary).ok())
            .unwrap_or_default()
    }

    /// `100 - errorRate`, reading `"2.50%"` as 2.5 and a missing rate as 0.
    pub fn success_rate(&self) -> Option<f64> {
        let error_rate = match &self.error_rate {
            Value::Null => 0.0,
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok()?,
            _ => return None,
        };
        Some(100.0 - error_rate)
    }
}

/// Renders a summary figure for display, `N/A` when absent.
pub fn display_figure(value: &Value) -> String {
    match value {
        Value::Null => "N/A".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl RadiumClient {
    pub async fn get_analytics(&self, params: &AnalyticsQuery) -> Result<Value> {
        let query = Query::new()
            .set("timeframe", params.timeframe.as_str())
            .set("metric", params.metric.as_str());
        let envelope = self
            .request(Method::GET, "/analytics", Some(&query), None)
            .await?;
        Ok(data_object(envelope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_rate_strips_percent_sign() {
        let summary = AnalyticsSummary::from_data(&json!({"summary": {"errorRate": "2.50%"}}));
        assert_eq!(summary.success_rate(), Some(97.5));
    }

    #[test]
    fn missing_error_rate_counts_as_zero() {
        let summary = AnalyticsSummary::from_data(&json!({}));
        assert_eq!(summary.success_rate(), Some(100.0));
        assert_eq!(display_figure(&summary.total_cost), "N/A");
    }

    #[test]
    fn unparseable_error_rate_has_no_success_rate() {
        let summary = AnalyticsSummary::from_data(&json!({"summary": {"errorRate": "n/a"}}));
        assert_eq!(summary.success_rate(), None);
    }

    #[test]
    fn figures_render_strings_verbatim() {
        let summary = AnalyticsSummary::from_data(&json!({
            "summary": {"totalRequests": "1,204", "totalCost": "$0.4210", "avgLatency": 180}
        }));
        assert_eq!(display_figure(&summary.total_requests), "1,204");
        assert_eq!(display_figure(&summary.total_cost), "$0.4210");
        assert_eq!(display_figure(&summary.avg_latency), "180");
    }
}
