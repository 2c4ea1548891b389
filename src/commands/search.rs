//! Search command implementation.

use crate::amazon::{self, AmazonClient, AmazonSearch};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Scrapes one Amazon search page and formats the listings.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str) -> Result<String> {
        let client = AmazonClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl AmazonSearch,
        query: &str,
    ) -> Result<String> {
        info!("Searching for: {}", query);

        let products = amazon::scrape(client, query, self.config.max_results).await?;

        info!("Found {} listings", products.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_products(&products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    /// Mock Amazon client for testing.
    struct MockAmazonClient {
        response: String,
        call_count: Arc<AtomicU32>,
    }

    impl MockAmazonClient {
        fn new(response: String) -> Self {
            Self { response, call_count: Arc::new(AtomicU32::new(0)) }
        }

        fn call_count(&self) -> u32 {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AmazonSearch for MockAmazonClient {
        async fn search(&self, _query: &str) -> Result<String> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }

        fn base_url(&self) -> &str {
            "https://www.amazon.ca"
        }
    }

    fn make_test_config() -> Config {
        Config { max_results: 5, format: OutputFormat::Table, ..Config::default() }
    }

    fn make_search_html(products: &[(&str, &str, &str)]) -> String {
        let mut html = String::from(r#"<html><body><div class="s-main-slot">"#);
        for (id, title, whole) in products {
            html.push_str(&format!(
                r#"<div class="s-result-item">
                    <h2><a class="a-link-normal" href="/dp/{}"><span class="a-text-normal">{}</span></a></h2>
                    <span class="a-price-whole">{}</span><span class="a-price-fraction">99</span>
                    <span class="a-icon-alt">4.5 out of 5 stars</span>
                </div>"#,
                id, title, whole
            ));
        }
        html.push_str("</div></body></html>");
        html
    }

    #[tokio::test]
    async fn test_search_command_basic() {
        let html = make_search_html(&[("B001", "Product One", "19."), ("B002", "Product Two", "29.")]);

        let client = MockAmazonClient::new(html);
        let cmd = SearchCommand::new(make_test_config());

        let output = cmd.execute_with_client(&client, "test").await.unwrap();
        assert!(output.contains("Product One"));
        assert!(output.contains("Product Two"));
        assert!(output.contains("19.99"));
        assert!(output.contains("Total: 2 products"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_search_command_empty_results() {
        let client = MockAmazonClient::new("<html></html>".to_string());
        let cmd = SearchCommand::new(make_test_config());

        let output = cmd.execute_with_client(&client, "nonexistent").await.unwrap();
        assert!(output.contains("No products found"));
    }

    #[tokio::test]
    async fn test_search_command_respects_max_results() {
        let items: Vec<(String, String)> =
            (0..8).map(|i| (format!("B00{}", i), format!("Product {}", i))).collect();
        let rows: Vec<(&str, &str, &str)> =
            items.iter().map(|(id, title)| (id.as_str(), title.as_str(), "10.")).collect();

        let client = MockAmazonClient::new(make_search_html(&rows));
        let mut config = make_test_config();
        config.max_results = 3;
        config.format = OutputFormat::Json;
        let cmd = SearchCommand::new(config);

        let output = cmd.execute_with_client(&client, "test").await.unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0]["product_url"], "https://www.amazon.ca/dp/B000");
    }

    #[tokio::test]
    async fn test_search_command_captcha_is_error() {
        let client = MockAmazonClient::new(
            r#"<html><body><form action="/errors/validateCaptcha"></form></body></html>"#.to_string(),
        );
        let cmd = SearchCommand::new(make_test_config());

        let err = cmd.execute_with_client(&client, "test").await.unwrap_err();
        assert!(err.to_string().to_lowercase().contains("captcha"));
    }
}
