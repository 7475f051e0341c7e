use mimalloc::MiMalloc;
use todo_seed::{App, Config, DbClient};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let (cfg, cfg_err) = match Config::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    if let Some(e) = cfg_err {
        warn!(error = %e, "invalid configuration; using defaults");
    }

    info!(
        mongodb_url = %cfg.mongodb_url,
        database = %cfg.database,
        collection = %cfg.collection,
        loglevel = %cfg.loglevel
    );

    let client = DbClient::from_config(&cfg);
    let mut app = App::new(client, std::io::stdout());
    app.start().await;
}
