use chrono::Utc;
use clap::Parser;
use radium_client::v1::display_figure;
use radium_client::{
    AnalyticsQuery, AnalyticsSummary, ApiError, ClientConfig, CreateDeployment, InferenceRequest,
    ModelFilter, RadiumClient, DEFAULT_BASE_URL,
};
use serde_json::{json, Value};

/// Walks through the Radium API: models, deployments, inference, analytics and API keys.
#[derive(Parser, Debug)]
#[command(name = "radium-demo", version)]
struct Args {
    /// API key from the dashboard's API keys page
    #[arg(long, env = "RADIUM_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "RADIUM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() {
    // .env must be loaded before clap reads the environment.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    let Some(api_key) = args.api_key else {
        println!("Error: Please set RADIUM_API_KEY environment variable");
        return;
    };

    let client = match ClientConfig::new(api_key)
        .map(|config| config.with_base_url(args.base_url))
        .and_then(RadiumClient::new)
    {
        Ok(client) => client,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    tracing::info!(base_url = %client.config().base_url(), "Radium demo starting");

    if let Err(e) = run(&client).await {
        println!("❌ Error: {}", e);
    }
}

async fn run(client: &RadiumClient) -> Result<(), ApiError> {
    println!("📚 Listing available models...");
    let models = client.list_models(&ModelFilter::featured()).await?;
    println!("Found {} featured models:", models.len());
    for model in models.iter().take(3) {
        println!("  - {} by {}", text(model, "name"), text(model, "provider"));
        println!(
            "    Price: {}/1M input, {}/1M output",
            text(model, "inputPrice"),
            text(model, "outputPrice")
        );
        println!("    Capabilities: {}", capabilities(model));
        println!();
    }

    let Some(selected) = models.first() else {
        println!("No models found. Check your API key and try again.");
        return Ok(());
    };

    println!("🚀 Creating a deployment...");
    let deployment_name = format!("test-deployment-{}", Utc::now().timestamp());
    let model_id = required_id(selected, "/models")?;
    let request = CreateDeployment::new(model_id, deployment_name.as_str())
        .with_configuration(json!({
            "acceleratorType": "H100",
            "acceleratorCount": 1,
            "autoScaling": true,
            "minReplicas": 1,
            "maxReplicas": 3
        }));
    let deployment = client.create_deployment(&request).await?;
    let deployment_id = required_id(&deployment, "/deployments")?;

    println!("✅ Deployment created: {}", text(&deployment, "name"));
    println!("   Status: {}", text(&deployment, "status"));
    println!("   ID: {}", deployment_id);
    println!();

    // No polling: the current status is shown once.
    println!("⏳ Waiting for deployment to be active...");
    let current = client.get_deployment(&deployment_id).await?;
    println!("   Current status: {}", text(&current, "status"));
    println!();

    println!("🧠 Making inference request...");
    let completion = client.inference(
        &InferenceRequest::new(deployment_id.as_str(), "Explain quantum computing in simple terms")
            .max_tokens(150)
            .temperature(0.7),
    );
    println!("Response:");
    println!("  {}", completion.text().unwrap_or_default());
    println!("  Tokens used: {}", completion.usage.total_tokens);
    println!();

    println!("📊 Getting usage analytics...");
    let analytics = client.get_analytics(&AnalyticsQuery::timeframe("24h")).await?;
    let summary = AnalyticsSummary::from_data(&analytics);
    println!("24-hour summary:");
    println!("  Total requests: {}", display_figure(&summary.total_requests));
    match summary.success_rate() {
        Some(rate) => println!("  Success rate: {:.1}%", rate),
        None => println!("  Success rate: N/A"),
    }
    println!("  Total cost: {}", display_figure(&summary.total_cost));
    println!("  Avg latency: {}", display_figure(&summary.avg_latency));
    println!();

    println!("🔑 Checking API keys...");
    let api_keys = client.list_api_keys().await?;
    println!("You have {} API key(s):", api_keys.len());
    for key in &api_keys {
        println!("  - {}: {}", text(key, "name"), text(key, "keyMasked"));
        println!("    Created: {}", text_or(key, "createdFormatted", "Unknown"));
        println!("    Usage: {} requests", text_or(key, "usageFormatted", "0"));
    }
    println!();

    println!("🗑️  Cleaning up...");
    client.delete_deployment(&deployment_id).await?;
    println!("✅ Deployment {} deleted", deployment_name);

    Ok(())
}

fn required_id(value: &Value, path: &str) -> Result<String, ApiError> {
    value
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::Decode {
            path: path.to_string(),
            reason: "object has no id".to_string(),
        })
}

fn text(value: &Value, key: &str) -> String {
    text_or(value, key, "N/A")
}

fn text_or(value: &Value, key: &str, fallback: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => fallback.to_string(),
        Some(v) => display_figure(v),
    }
}

fn capabilities(model: &Value) -> String {
    model
        .get("capabilities")
        .and_then(Value::as_array)
        .map(|caps| caps.iter().map(display_figure).collect::<Vec<_>>().join(", "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_id_is_a_decode_error() {
        let err = required_id(&json!({"name": "Llama"}), "/models").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(required_id(&json!({"id": 7}), "/models").is_err());
    }

    #[test]
    fn present_id_is_returned() {
        assert_eq!(required_id(&json!({"id": "m1"}), "/models").unwrap(), "m1");
    }
}
