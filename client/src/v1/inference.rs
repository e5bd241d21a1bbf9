use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::RadiumClient;

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceRequest {
    pub deployment_id: String,
    pub prompt: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_max_tokens() -> u32 {
    100
}

fn default_temperature() -> f32 {
    0.7
}

impl InferenceRequest {
    pub fn new(deployment_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            prompt: prompt.into(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Completion {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<CompletionChoice>,
    pub usage: CompletionUsage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionChoice {
    pub text: String,
    pub index: u32,
    pub finish_reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Completion {
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.text.as_str())
    }
}

impl RadiumClient {
    /// Placeholder completion built locally. The platform has no inference
    /// endpoint yet, so nothing goes over the network.
    pub fn inference(&self, req: &InferenceRequest) -> Completion {
        debug!(deployment_id = %req.deployment_id, "Building mock completion");
        mock_completion(req, Utc::now().timestamp())
    }
}

fn mock_completion(req: &InferenceRequest, created: i64) -> Completion {
    let prompt_tokens = req.prompt.split_whitespace().count() as u32;

    Completion {
        id: format!("cmpl-{}", created),
        object: "text_completion".to_string(),
        created,
        model: req.deployment_id.clone(),
        choices: vec![CompletionChoice {
            text: format!("This is a mock response to: {}", req.prompt),
            index: 0,
            finish_reason: "stop".to_string(),
        }],
        usage: CompletionUsage {
            prompt_tokens,
            completion_tokens: req.max_tokens,
            total_tokens: prompt_tokens.saturating_add(req.max_tokens),
        },
    }
}
