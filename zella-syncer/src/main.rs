use tracing::{error, info, warn};
use zella_syncer::{config::SyncerConfig, server, service::TradeService};

/*----- */
// Main
/*----- */
#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Init
    dotenvy::dotenv().ok();
    init_logging();

    let config = SyncerConfig::from_env().map_err(|error| {
        error!(%error, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, error)
    })?;

    info!(
        trading_pairs = ?config.trading_pairs,
        checkpoint_path = %config.checkpoint_path.display(),
        "starting trade syncer"
    );

    if config.trading_pairs.is_empty() {
        warn!("TRADING_PAIRS is empty, every request will return no trades");
    }

    let service = TradeService::from_config(&config);

    server::run(&config, service).await
}

/*----- */
// Logging config
/*----- */
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        // Disable colours on release builds
        .with_ansi(cfg!(debug_assertions))
        // Enable Json formatting
        .json()
        // Install this Tracing subscriber as global default
        .init()
}
