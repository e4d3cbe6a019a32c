//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values (`BINANCE_API_KEY`, `BINANCE_API_SECRET`,
//! `DISCORD_TOKEN`). A missing file is written out as a commented template
//! so the operator can fill it in and restart.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

const ONE: Decimal = Decimal::ONE;

/// Main application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base-asset quantity bought on every cycle.
    pub quantity: Decimal,
    /// Take-profit limit multiplier applied to the buy fill price (>= 1).
    pub take_profit_rate: Decimal,
    /// Stop-loss limit multiplier applied to the buy fill price (<= 1).
    pub stop_loss_rate: Decimal,
    /// Stop trigger multiplier applied to the buy fill price (<= 1).
    pub limit_price_rate: Decimal,
    /// Settlement asset every pair is quoted in.
    #[serde(default = "default_quote_asset")]
    pub quote_asset: String,
    pub exchange: ExchangeConfig,
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    #[serde(default = "default_recv_window_ms")]
    pub recv_window_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct DiscordConfig {
    #[serde(default = "default_discord_api_url")]
    pub api_url: String,
    /// Static bearer-style token; without it channel polling is disabled.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            api_url: default_discord_api_url(),
            token: None,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_quote_asset() -> String {
    "BTC".into()
}

fn default_api_url() -> String {
    "https://api.binance.com".into()
}

fn default_discord_api_url() -> String {
    "https://discord.com/api/v9".into()
}

fn default_recv_window_ms() -> u64 {
    5_000
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// If the file does not exist, a commented template is written there and
    /// [`ConfigError::Created`] is returned so the caller can tell the
    /// operator to fill it in.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            std::fs::write(path, TEMPLATE).map_err(ConfigError::ReadFile)?;
            return Err(ConfigError::Created {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        // Secrets come from the environment when set, never logged.
        if let Ok(key) = std::env::var("BINANCE_API_KEY") {
            config.exchange.api_key = key;
        }
        if let Ok(secret) = std::env::var("BINANCE_API_SECRET") {
            config.exchange.api_secret = secret;
        }
        if let Ok(token) = std::env::var("DISCORD_TOKEN") {
            config.discord.token = Some(token);
        }

        config.clamp_rates();
        config.validate()?;

        Ok(config)
    }

    /// Clamp out-of-range rate multipliers to 1.0, warning the operator.
    ///
    /// A take-profit below 1 or a stop-loss/trigger above 1 would invert the
    /// bracket; the calculator itself never validates, so the clamp happens
    /// here once at load time.
    fn clamp_rates(&mut self) {
        if self.take_profit_rate < ONE {
            warn!(
                rate = %self.take_profit_rate,
                "take_profit_rate was below 1.0 and has been clamped to 1.0"
            );
            self.take_profit_rate = ONE;
        }
        if self.stop_loss_rate > ONE {
            warn!(
                rate = %self.stop_loss_rate,
                "stop_loss_rate was over 1.0 and has been clamped to 1.0"
            );
            self.stop_loss_rate = ONE;
        }
        if self.limit_price_rate > ONE {
            warn!(
                rate = %self.limit_price_rate,
                "limit_price_rate was over 1.0 and has been clamped to 1.0"
            );
            self.limit_price_rate = ONE;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.quantity <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "quantity",
                reason: format!("must be positive, got {}", self.quantity),
            }
            .into());
        }
        if self.exchange.api_key.is_empty() {
            return Err(ConfigError::MissingField { field: "api_key" }.into());
        }
        if self.exchange.api_secret.is_empty() {
            return Err(ConfigError::MissingField { field: "api_secret" }.into());
        }
        if self.quote_asset.is_empty() {
            return Err(ConfigError::MissingField {
                field: "quote_asset",
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

const TEMPLATE: &str = r#"# bracketeer configuration

# Base-asset quantity bought on every cycle.
quantity = 0.0

# Bracket multipliers applied to the actual buy fill price.
take_profit_rate = 2.0
stop_loss_rate = 0.8
limit_price_rate = 0.85

# Settlement asset every pair is quoted in.
quote_asset = "BTC"

[exchange]
api_url = "https://api.binance.com"
# Prefer the BINANCE_API_KEY / BINANCE_API_SECRET environment variables.
api_key = ""
api_secret = ""

[discord]
# Set a token (or DISCORD_TOKEN) to enable channel polling.
# token = ""
poll_interval_ms = 100

[logging]
level = "info"
format = "pretty"
"#;
