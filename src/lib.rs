pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{CurrencyRateProvider, RateStore};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: String,
        from: String,
        to: String,
        offline: bool,
    },
    Rates {
        offline: bool,
    },
    Interactive,
}

/// Builds the rate store from config: seed data first, live provider behind it.
pub fn build_store(config: &AppConfig) -> Result<Arc<RateStore>> {
    let api = &config.providers.exchange_rate_api;
    let provider: Arc<dyn CurrencyRateProvider> = Arc::new(
        providers::ExchangeRateApiProvider::new(&api.base_url, api.timeout())
            .with_fallback_base_rate(api.fallback_base_rate),
    );
    let seed_path = config.seed_path()?;
    debug!("Loading seed rates from {}", seed_path.display());
    Ok(Arc::new(RateStore::from_seed(seed_path, provider)))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = build_store(&config)?;

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            offline,
        } => cli::convert::run(&store, &amount, &from, &to, offline).await,
        AppCommand::Rates { offline } => cli::rates::run(&store, offline).await,
        AppCommand::Interactive => {
            cli::interactive::run(store, config.refresh_interval()).await
        }
    }
}
