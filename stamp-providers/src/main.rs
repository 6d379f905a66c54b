use std::sync::Arc;

use clap::Parser;
use common_types::{RequestPayload, VerifiedPayload};
use serde::Serialize;
use stamp_providers::{
    eth::eth_providers,
    model_api::{ModelApi, ModelApiClient},
    provider::{Provider, ProviderContext},
    types::Environment,
};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

/// Checks the Ethereum account analysis stamps for an address
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to verify
    address: String,

    /// Only run the stamp with this id, e.g. `ETHScore#50`
    #[arg(long)]
    provider: Option<String>,
}

#[derive(Serialize)]
struct StampOutcome {
    provider: &'static str,
    result: VerifiedPayload,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let environment = Environment::from_env();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();

    // JSON logs for staging/production, human readable logs for development
    if environment.json_logs() {
        fmt().json().with_env_filter(env_filter).init();
    } else {
        fmt().with_env_filter(env_filter).init();
    }

    let model_api: Arc<dyn ModelApi> =
        Arc::new(ModelApiClient::new(environment.model_api_config()));

    let providers: Vec<_> = eth_providers(&model_api)
        .into_iter()
        .filter(|p| {
            args.provider
                .as_deref()
                .is_none_or(|wanted| wanted == p.provider_type())
        })
        .collect();

    if providers.is_empty() {
        anyhow::bail!(
            "Unknown provider: {}",
            args.provider.as_deref().unwrap_or_default()
        );
    }

    let payload = RequestPayload::new(args.address);
    let mut context = ProviderContext::default();
    let mut outcomes = Vec::with_capacity(providers.len());

    for provider in &providers {
        let result = provider.verify(&payload, &mut context).await?;
        tracing::info!(
            provider = provider.provider_type(),
            valid = result.is_valid(),
            "Stamp checked"
        );
        outcomes.push(StampOutcome {
            provider: provider.provider_type(),
            result,
        });
    }

    println!("{}", serde_json::to_string_pretty(&outcomes)?);

    Ok(())
}
