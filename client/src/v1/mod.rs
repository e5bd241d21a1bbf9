pub mod analytics;
pub mod api_keys;
pub mod deployments;
pub mod inference;
pub mod models;
pub mod quotas;

pub use analytics::{display_figure, AnalyticsQuery, AnalyticsSummary};
pub use deployments::CreateDeployment;
pub use inference::{Completion, CompletionChoice, CompletionUsage, InferenceRequest};
pub use models::ModelFilter;
pub use quotas::QuotaFilter;
