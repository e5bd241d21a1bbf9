//! Client for the Radium model hosting API.
//!
//! Every call goes to `{base_url}{path}` with a bearer token, and the JSON
//! `data` envelope is unwrapped by the typed operations in [`v1`].

pub mod client;
pub mod config;
pub mod error;
pub mod v1;

pub use client::{Query, RadiumClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use v1::{
    AnalyticsQuery, AnalyticsSummary, Completion, CreateDeployment, InferenceRequest, ModelFilter,
    QuotaFilter,
};
