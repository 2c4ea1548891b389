//! Amazon-specific modules for HTTP client, parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{AmazonClient, AmazonSearch};
pub use models::ProductRecord;
pub use parser::Parser;

use anyhow::Result;

/// Fetches and parses listings for a query, keeping at most `max_results`.
pub async fn scrape(
    client: &impl AmazonSearch,
    query: &str,
    max_results: usize,
) -> Result<Vec<ProductRecord>> {
    let html = client.search(query).await?;
    let mut products = Parser::new(client.base_url()).parse_search(&html)?;
    products.truncate(max_results);
    Ok(products)
}
