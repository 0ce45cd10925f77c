use anyhow::Context;
use fidesops_admin_config::{AdminUiConfig, privileges};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("fidesops-admin-config starting");

    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let config = AdminUiConfig::from_env();
    config.log_startup();

    privileges::validate_catalog(config.privilege_catalog())
        .context("privilege catalog failed validation")?;

    let snapshot = serde_json::to_string_pretty(&config.snapshot())
        .context("failed to serialize configuration snapshot")?;
    println!("{snapshot}");

    Ok(())
}
