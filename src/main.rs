use std::sync::Arc;

use anyhow::Context;
use tracing::log;

use ovrstat_rs::api::Api;
use ovrstat_rs::config_handler;
use ovrstat_rs::player_stats_service::PlayerStatsService;
use ovrstat_rs::rest_client::RestFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info")
    }

    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = config_handler::get_config()?;

    let fetcher = RestFetcher::new(&config.base_url)
        .context("Could not build http client")?;
    let service = if config.cache_enabled {
        PlayerStatsService::with_cache(fetcher, &config.db_path, config.cache_ttl())
    } else {
        log::info!("[STATS] Cache disabled");
        PlayerStatsService::new(fetcher)
    };

    Api::serve(config.port, Arc::new(service)).await
}
