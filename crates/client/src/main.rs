//! Arena bot entry point.
use anyhow::{Context, Result};
use arena_client::console::ConsoleTransport;
use arena_client::logging::setup_logging;
use arena_client::{BotConfig, Client};
use runtime::{JsonFileRepository, PlayerRepository, Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = BotConfig::from_env().context("Invalid bot configuration")?;

    let _guard = setup_logging(&config.log_directory())?;

    let repository = JsonFileRepository::new(&config.data_file);
    match repository.load() {
        Ok(roster) => tracing::info!(
            "Player store {} holds {} characters",
            config.data_file.display(),
            roster.len()
        ),
        Err(e) => tracing::warn!(
            "Player store {} is not readable yet: {}",
            config.data_file.display(),
            e
        ),
    }

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            command_buffer_size: config.command_buffer,
            rng_seed: config.rng_seed,
        })
        .repository(repository)
        .build()
        .context("Failed to start runtime")?;

    let client = Client::builder()
        .runtime(runtime)
        .transport(ConsoleTransport::stdio(config.command_prefix.clone()))
        .build()?;

    client.run().await
}
