use config::{self, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: Server,
    pub database_url: String, // SQLite file, created on first start
    pub env: String,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("HTTP") // => For HTTP_SERVER_PORT and HTTP_SERVER_HOST
                    .separator("_")
                    .try_parsing(true),
            )
            .add_source(
                config::Environment::default().try_parsing(true), // => DATABASE_URL and ENV
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("env", "dev")?
            .set_default("database_url", "sqlite://quests.db?mode=rwc")?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_match_the_fixed_service_constants() {
        let config = Config::new().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.database_url.starts_with("sqlite://"));
    }
}
