use actix_web::web::Data;
use api::middlewares::{initialize_telemetry, TelemetryError};
use config::ConfigError;
use configuration::Config;
use quests_db::{core::errors::DBError, create_quests_db_component};
use thiserror::Error;

pub mod api;
pub mod configuration;
pub mod domain;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Unable to initialize telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("Unable to build up the App configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Unable to set up the database: {0}")]
    Database(#[from] DBError),
    #[error("HTTP server failed: {0}")]
    Server(#[from] std::io::Error),
}

pub async fn run_app() -> Result<(), StartupError> {
    initialize_telemetry()?;

    log::info!("Starting Quests API...");

    let config = Config::new()?;

    log::info!("App Config: {:?}", config);

    // schema is created on first start
    let database = create_quests_db_component(&config.database_url, true).await?;

    api::run_server(Data::new(config), Data::new(database))?.await?;

    Ok(())
}
