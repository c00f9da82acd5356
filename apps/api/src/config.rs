//! API server configuration

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use critic_shared_config::{get_env_or_default, CommonConfig, Environment, ServerConfig};

use crate::models::Greeting;
use crate::repositories::GameIdStrategy;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// How ids are assigned to new games (default: sequential)
    pub game_id_strategy: GameIdStrategy,

    /// Greeting payload placed in every request context
    pub greeting: Greeting,

    /// Whether the GraphQL Playground route is served
    pub playground_enabled: bool,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// The playground is on by default outside production and can be forced
    /// either way with `GRAPHQL_PLAYGROUND`.
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env()
            .map_err(|e| anyhow!("Failed to load config: {}", e))?;

        let game_id_strategy = GameIdStrategy::from_str(&get_env_or_default(
            "GAME_ID_STRATEGY",
            "sequential",
        ))
        .map_err(|e| anyhow!(e))
        .context("Invalid GAME_ID_STRATEGY value")?;

        let playground_enabled = match env::var("GRAPHQL_PLAYGROUND") {
            Ok(value) => parse_flag(&value).context("Invalid GRAPHQL_PLAYGROUND value")?,
            Err(_) => !common.environment.is_production(),
        };

        Ok(Self {
            game_id_strategy,
            greeting: env::var("CONTEXT_GREETING")
                .ok()
                .filter(|s| !s.is_empty())
                .map(Greeting::new)
                .unwrap_or_default(),
            playground_enabled,
            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
            common,
        })
    }

    /// Get listener configuration
    pub fn server(&self) -> &ServerConfig {
        &self.common.server
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected a boolean, got '{}'", other)),
    }
}
