use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub weather: WeatherConfig,
    pub chatbot: ChatbotConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub api_key_file: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotConfig {
    pub similarity_threshold: f32,
    pub default_response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            database: DatabaseConfig {
                path: "data/go_travel.db".to_string(),
                max_connections: 10,
            },
            weather: WeatherConfig {
                api_key_file: "OPENWEATHER_API_KEY.txt".to_string(),
                base_url: crate::weather::DEFAULT_BASE_URL.to_string(),
            },
            chatbot: ChatbotConfig {
                similarity_threshold: 0.65,
                default_response: "Which location would you like the weather forecast?"
                    .to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// defaults, then config files, then `GO_TRAVEL`-prefixed environment
    /// variables
    pub fn load() -> Result<Self> {
        let defaults = AppConfig::default();

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.path", defaults.database.path)?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default("weather.api_key_file", defaults.weather.api_key_file)?
            .set_default("weather.base_url", defaults.weather.base_url)?
            .set_default(
                "chatbot.similarity_threshold",
                f64::from(defaults.chatbot.similarity_threshold),
            )?
            .set_default("chatbot.default_response", defaults.chatbot.default_response)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            // Add config files if they exist
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(File::with_name("config").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("GO_TRAVEL").separator("__"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize configuration: {}", e))?;

        // Validate configuration
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate server config
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("server port must be greater than 0"));
        }

        // Validate database config
        if self.database.max_connections == 0 {
            return Err(anyhow::anyhow!("max_connections must be greater than 0"));
        }

        // Validate chatbot config
        if !(0.0..=1.0).contains(&self.chatbot.similarity_threshold) {
            return Err(anyhow::anyhow!(
                "similarity_threshold must be between 0.0 and 1.0"
            ));
        }
        if self.chatbot.default_response.trim().is_empty() {
            return Err(anyhow::anyhow!("default_response cannot be empty"));
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level,
                valid_levels
            ));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format: {}. Must be one of: {:?}",
                self.logging.format,
                valid_formats
            ));
        }

        Ok(())
    }

    /// Get database path from environment or config
    #[must_use]
    pub fn get_database_path(&self) -> String {
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| self.database.path.clone())
    }

    /// Get log level from environment or config
    #[must_use]
    pub fn get_log_level(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.logging.level.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.path, "data/go_travel.db");
        assert_eq!(config.chatbot.similarity_threshold, 0.65);
        assert_eq!(
            config.chatbot.default_response,
            "Which location would you like the weather forecast?"
        );
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold() {
        let mut config = AppConfig::default();
        config.chatbot.similarity_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }
}
