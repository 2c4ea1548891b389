//! HTTP client for Amazon search pages using wreq for TLS fingerprint emulation.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Accept-Language sent with every listing request.
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Trait for fetching search listing pages - enables mocking for tests.
#[async_trait]
pub trait AmazonSearch: Send + Sync {
    /// Searches for a free-text query and returns the HTML response.
    async fn search(&self, query: &str) -> Result<String>;

    /// Returns the storefront base URL used to resolve product links.
    fn base_url(&self) -> &str;
}

#[async_trait]
impl<T: AmazonSearch + ?Sized> AmazonSearch for &T {
    async fn search(&self, query: &str) -> Result<String> {
        (**self).search(query).await
    }

    fn base_url(&self) -> &str {
        (**self).base_url()
    }
}

/// Builds the query string value: spaces become `+`, each word is percent-encoded.
pub fn search_terms(query: &str) -> String {
    query.split(' ').map(urlencoding::encode).collect::<Vec<_>>().join("+")
}

/// Amazon HTTP client with browser impersonation.
pub struct AmazonClient {
    client: Client,
    base_url: String,
    user_agent: Option<String>,
    delay_ms: u64,
    delay_jitter_ms: u64,
}

impl AmazonClient {
    /// Creates a new Amazon client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        let user_agent = Some(config.user_agent.trim())
            .filter(|ua| !ua.is_empty())
            .map(String::from);

        Ok(Self {
            client,
            base_url: config.amazon_base_url.trim_end_matches('/').to_string(),
            user_agent,
            delay_ms: config.delay_ms,
            delay_jitter_ms: config.delay_jitter_ms,
        })
    }

    /// Builds the search URL for a query.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}/s?k={}", self.base_url, search_terms(query))
    }

    /// Performs a GET request; only HTTP 200 yields a body.
    async fn get(&self, url: &str) -> Result<String> {
        self.delay().await;

        debug!("GET {}", url);

        let mut request = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Cache-Control", "no-cache")
            .header("Upgrade-Insecure-Requests", "1");

        if let Some(ua) = &self.user_agent {
            request = request.header("User-Agent", ua.as_str());
        }

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 503 {
            warn!("Rate limited (503). Consider using a proxy or increasing the delay.");
        }

        if status != 200 {
            anyhow::bail!("Failed to retrieve the page: status {}", status);
        }

        response.text().await.context("Failed to read response body")
    }

    /// Adds a random delay before each request when configured.
    async fn delay(&self) {
        if self.delay_ms == 0 && self.delay_jitter_ms == 0 {
            return;
        }

        let jitter = if self.delay_jitter_ms > 0 {
            rand::rng().random_range(0..=self.delay_jitter_ms)
        } else {
            0
        };

        let total_delay = self.delay_ms + jitter;
        debug!("Delaying {}ms", total_delay);
        tokio::time::sleep(Duration::from_millis(total_delay)).await;
    }
}

#[async_trait]
impl AmazonSearch for AmazonClient {
    async fn search(&self, query: &str) -> Result<String> {
        info!("Searching: {}", query);
        self.get(&self.search_url(query)).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
