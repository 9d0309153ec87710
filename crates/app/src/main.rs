//! Beacon - Main Entry Point
//!
//! Loads a service list and a task environment, interpolates the services and
//! writes the result to the configured output (stdout by default).
//!
//! ```text
//! beacon [SERVICES] [ENVIRONMENT]
//! ```
//!
//! Positional arguments take precedence over `beacon.toml` and `BEACON_*`
//! environment variables.

mod settings;

use anyhow::Context;
use beacon_application::InterpolateServices;
use beacon_infrastructure::{
    FileEnvironmentRepository, FileServiceRepository, TokioFileSystem, to_json_stable,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for the rendered services
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::load(std::env::args().skip(1)).context("failed to load settings")?;

    tracing::info!(
        services = %settings.services.display(),
        "Starting Beacon v{}",
        env!("CARGO_PKG_VERSION")
    );

    let fs = TokioFileSystem::new();
    let use_case = InterpolateServices::new(
        FileServiceRepository::new(fs.clone()),
        FileEnvironmentRepository::new(fs),
    );

    let print_to_stdout = settings.output.is_none();
    let output = use_case
        .execute(settings.into_input())
        .await
        .context("failed to interpolate services")?;

    if print_to_stdout {
        print!("{}", to_json_stable(&output.services)?);
    }

    if !output.is_complete {
        tracing::warn!(count = output.unresolved.len(), "some variables were left unresolved");
    }

    Ok(())
}
