//! HTML parser for Amazon search listing pages.

use crate::amazon::models::{ProductRecord, UNKNOWN_BRAND};
use crate::amazon::selectors::{errors, search};
use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Parser for Amazon search result HTML.
pub struct Parser {
    base_url: String,
}

impl Parser {
    /// Creates a parser that resolves relative product links against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    /// Parses search results HTML into product records, in document order.
    ///
    /// Items missing a title, whole price, rating or link are skipped.
    pub fn parse_search(&self, html: &str) -> Result<Vec<ProductRecord>> {
        let document = Html::parse_document(html);

        // Check for block pages first
        self.check_for_errors(&document)?;

        let mut products = Vec::new();
        let mut skipped = 0usize;

        for element in document.select(&search::RESULT) {
            match self.parse_result_item(element) {
                Some(product) => {
                    trace!("Parsed product: {} @ {}", product.title, product.price);
                    products.push(product);
                }
                None => skipped += 1,
            }
        }

        debug!("Parsed {} products ({} incomplete items skipped)", products.len(), skipped);

        Ok(products)
    }

    /// Checks for CAPTCHA or error pages.
    fn check_for_errors(&self, document: &Html) -> Result<()> {
        if document.select(&errors::CAPTCHA).next().is_some() {
            anyhow::bail!(
                "CAPTCHA detected. Amazon is blocking requests. \
                Try using a proxy or waiting before retrying."
            );
        }

        if document.select(&errors::DOG_PAGE).next().is_some() {
            anyhow::bail!(
                "Amazon error page detected (503). \
                The service may be temporarily unavailable."
            );
        }

        Ok(())
    }

    /// Parses a single result item, or `None` if a required field is absent.
    fn parse_result_item(&self, element: ElementRef) -> Option<ProductRecord> {
        let title = first_text(element, &search::TITLE)?;
        let whole = first_text(element, &search::PRICE_WHOLE)?;
        let rating = first_text(element, &search::RATING)?;
        let href = element.select(&search::TITLE_LINK).next()?.value().attr("href")?;

        // Fragments are joined as-is; the whole part usually ends with "."
        let fraction = first_text(element, &search::PRICE_FRACTION).unwrap_or_default();
        let price = format!("{}{}", whole, fraction);

        let brand_name =
            first_text(element, &search::BYLINE).unwrap_or_else(|| UNKNOWN_BRAND.to_string());

        Some(ProductRecord {
            title,
            price,
            rating,
            product_url: self.absolute_url(href),
            brand_name,
        })
    }

    fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}

/// Text of the first match, each text node trimmed and joined without separators.
fn first_text(element: ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(|e| e.text().map(str::trim).collect())
}
