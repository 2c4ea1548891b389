//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Storefront used for reference-price searches
    #[serde(default = "default_amazon_base_url")]
    pub amazon_base_url: String,

    /// User-Agent sent with listing requests (empty keeps the emulated one)
    #[serde(default)]
    pub user_agent: String,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Base delay before each listing request in milliseconds
    #[serde(default)]
    pub delay_ms: u64,

    /// Random jitter added to delay (0 to this value)
    #[serde(default)]
    pub delay_jitter_ms: u64,

    /// Maximum number of listings kept per search
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Minimum profit margin, in percent, for a resale to be worthwhile
    #[serde(default = "default_min_profit_percent")]
    pub min_profit_percent: f64,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Auction platform settings
    #[serde(default)]
    pub auction: AuctionConfig,
}

/// Settings for the auction GraphQL endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionConfig {
    /// GraphQL endpoint URL
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Bearer token for authenticated operations
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Value of the `site_subdomain` header identifying the auction house
    #[serde(default)]
    pub site_subdomain: Option<String>,

    /// Lots requested per page when paginating
    #[serde(default = "default_page_length")]
    pub page_length: u32,
}

fn default_amazon_base_url() -> String {
    "https://www.amazon.ca".to_string()
}

fn default_max_results() -> usize {
    20
}

fn default_min_profit_percent() -> f64 {
    crate::arbitrage::DEFAULT_MIN_PROFIT_PERCENT
}

fn default_page_length() -> u32 {
    100
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            auth_token: None,
            site_subdomain: None,
            page_length: default_page_length(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            amazon_base_url: default_amazon_base_url(),
            user_agent: String::new(),
            proxy: None,
            delay_ms: 0,
            delay_jitter_ms: 0,
            max_results: default_max_results(),
            min_profit_percent: default_min_profit_percent(),
            format: OutputFormat::Table,
            auction: AuctionConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("resell-scout.toml");
        if local_config.exists() {
            debug!("Found resell-scout.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("resell-scout").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(ua) = std::env::var("RESELL_USER_AGENT") {
            self.user_agent = ua;
        }

        if let Ok(proxy) = std::env::var("RESELL_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(delay) = std::env::var("RESELL_DELAY") {
            if let Ok(d) = delay.parse() {
                self.delay_ms = d;
            }
        }

        if let Ok(endpoint) = std::env::var("RESELL_AUCTION_ENDPOINT") {
            self.auction.endpoint = Some(endpoint);
        }

        if let Ok(token) = std::env::var("RESELL_AUCTION_TOKEN") {
            self.auction.auth_token = Some(token);
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
