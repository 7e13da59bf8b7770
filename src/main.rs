// src/main.rs
use anyhow::Result;
use healthgate::config;
use healthgate::probe::{EndpointTarget, HttpProber};
use healthgate::verifier::HealthVerifier;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the JSON report owns stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthgate=debug".parse()?),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "verify.yaml".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::load_config(&config_path).await?;

    let targets: Vec<EndpointTarget> = config
        .endpoints
        .iter()
        .cloned()
        .map(EndpointTarget::new)
        .collect();

    let verifier = HealthVerifier::new(HttpProber::new()?, config.verifier.clone());
    let run = verifier.verify(&targets).await;

    println!("{}", serde_json::to_string_pretty(&run)?);

    if !run.success {
        let unhealthy = run.reports.iter().filter(|r| !r.is_healthy()).count();
        error!(
            "Verification {} failed: {} of {} endpoint(s) unhealthy",
            run.run_id,
            unhealthy,
            run.reports.len()
        );
        std::process::exit(1);
    }

    info!(
        "Verification {} passed: all {} endpoint(s) healthy",
        run.run_id,
        run.reports.len()
    );
    Ok(())
}
