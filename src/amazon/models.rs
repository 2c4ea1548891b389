//! Data model for scraped Amazon search listings.

use serde::{Deserialize, Serialize};

/// Brand placeholder used when a listing carries no byline.
pub const UNKNOWN_BRAND: &str = "N/A";

/// A single search listing with every required field present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Listing title
    pub title: String,
    /// Price text: whole fragment followed directly by the fraction fragment
    pub price: String,
    /// Rating text as shown, e.g. "4.6 out of 5 stars"
    pub rating: String,
    /// Absolute product URL
    pub product_url: String,
    /// Byline text, or [`UNKNOWN_BRAND`]
    pub brand_name: String,
}

impl ProductRecord {
    /// Parses the price text as a decimal number.
    ///
    /// The text is taken literally: no separators are stripped or inserted,
    /// so `"1,299.99"` yields `None`.
    pub fn price_value(&self) -> Option<f64> {
        self.price.trim().parse().ok()
    }

    /// Extracts the leading star value from the rating text.
    pub fn stars(&self) -> Option<f32> {
        self.rating.split_whitespace().next()?.replace(',', ".").parse().ok()
    }
}
