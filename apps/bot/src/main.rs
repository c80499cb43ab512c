mod commands;
mod config;
mod error;
mod monitoring;
mod notify;
mod pool;
mod registry;
mod routes;
mod validation;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use logger::init_tracing;

use commands::CommandRouter;
use config::Config;
use error::AppError;
use monitoring::{HealthChecker, HttpChecker};
use notify::TelegramNotifier;
use pool::{LibsqlManager, LibsqlPool};
use registry::{LibsqlRegistry, SiteRegistry};
use routes::webhook::BotState;

/// Telegram keepalive bot: registers sites over a webhook and polls them
#[derive(Debug, Parser)]
#[command(name = "keepup-bot", version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_config(cli.config.as_deref())?;
    tracing::info!("{config}");

    let registry = open_registry(&config).await?;
    let notifier = Arc::new(TelegramNotifier::new(
        config.telegram.token.clone(),
        config.telegram.chat_id.clone(),
    ));
    let http_checker =
        Arc::new(HttpChecker::new(Duration::from_secs(config.check.timeout_seconds))?);

    let checker = Arc::new(HealthChecker::new(
        registry.clone(),
        notifier.clone(),
        http_checker,
        Duration::from_secs(config.check.pause_seconds),
    ));

    monitoring::scheduler::spawn(
        checker.clone(),
        Duration::from_secs(config.check.interval_minutes.max(1) * 60),
    );

    let state = web::Data::new(BotState {
        router: CommandRouter::new(registry, notifier, checker),
        authorized_chat_id: config.telegram.chat_id.clone(),
    });

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;
    tracing::info!(%addr, "starting webhook server");

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::routes))
        .bind(addr)?
        .run()
        .await?;

    Ok(())
}

async fn open_registry(config: &Config) -> Result<Arc<dyn SiteRegistry>, AppError> {
    let database = libsql::Builder::new_local(&config.registry.path)
        .build()
        .await
        .map_err(anyhow::Error::from)?;
    let conn = database.connect().map_err(anyhow::Error::from)?;
    registry::migrations::run_migrations(&conn).await?;

    let pool =
        LibsqlPool::builder(LibsqlManager::new(database)).build().map_err(anyhow::Error::from)?;

    Ok(Arc::new(LibsqlRegistry::new_from_pool(pool)))
}
