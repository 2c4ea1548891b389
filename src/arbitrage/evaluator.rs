//! Resale evaluation against an Amazon reference price.

use super::cache::{PriceCache, ReferencePrice};
use super::pricing::{
    adjust_price_for_condition, calculate_profit_margin, calculate_total_cost,
    profit_margin_percentage,
};
use crate::amazon::{AmazonSearch, Parser, ProductRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Margin, in percent, at or above which a resale is worthwhile.
pub const DEFAULT_MIN_PROFIT_PERCENT: f64 = 20.0;

/// Why a reference price could not be established.
#[derive(Debug, Error)]
pub enum ReferencePriceError {
    #[error("listing fetch failed: {0}")]
    Transport(#[source] anyhow::Error),

    #[error("listing page unreadable: {0}")]
    Blocked(#[source] anyhow::Error),

    #[error("no listings found for '{query}'")]
    NotFound { query: String },

    #[error("listing price '{price}' is not a number")]
    Malformed { price: String },
}

/// An item offered to the reseller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResaleCandidate {
    pub product_name: String,
    pub base_price: f64,
    pub condition: String,
    #[serde(default)]
    pub shipping: f64,
    #[serde(default)]
    pub fees: f64,
}

impl ResaleCandidate {
    pub fn new(product_name: impl Into<String>, base_price: f64, condition: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            base_price,
            condition: condition.into(),
            shipping: 0.0,
            fees: 0.0,
        }
    }

    pub fn with_shipping(mut self, shipping: f64) -> Self {
        self.shipping = shipping;
        self
    }

    pub fn with_fees(mut self, fees: f64) -> Self {
        self.fees = fees;
        self
    }
}

/// Outcome of an evaluation. Details are present only when `ok`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amazon_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductRecord>,
}

impl EvaluationResult {
    /// A not-ok result carrying no detail.
    pub fn rejected() -> Self {
        Self { ok: false, profit_margin: None, amazon_price: None, product: None }
    }

    fn accepted(profit_margin: f64, reference: ReferencePrice) -> Self {
        Self {
            ok: true,
            profit_margin: Some(profit_margin),
            amazon_price: Some(reference.price),
            product: Some(reference.product),
        }
    }
}

/// Evaluates resale candidates using listings fetched through `C`.
pub struct Evaluator<C> {
    client: C,
    min_profit_percent: f64,
}

impl<C: AmazonSearch> Evaluator<C> {
    /// Creates an evaluator with the default 20% threshold.
    pub fn new(client: C) -> Self {
        Self { client, min_profit_percent: DEFAULT_MIN_PROFIT_PERCENT }
    }

    /// Overrides the minimum margin, in percent.
    pub fn with_min_profit(mut self, min_profit_percent: f64) -> Self {
        self.min_profit_percent = min_profit_percent;
        self
    }

    pub fn min_profit_percent(&self) -> f64 {
        self.min_profit_percent
    }

    /// Looks up the reference price for `product_name`, consulting `cache` first.
    ///
    /// The first listing in search order is the reference. Only successfully
    /// parsed prices are cached.
    pub async fn reference_price(
        &self,
        cache: &mut PriceCache,
        product_name: &str,
    ) -> Result<ReferencePrice, ReferencePriceError> {
        if let Some(cached) = cache.get(product_name) {
            debug!("Reference price for '{}' served from cache", product_name);
            return Ok(cached.clone());
        }

        let html =
            self.client.search(product_name).await.map_err(ReferencePriceError::Transport)?;

        let products = Parser::new(self.client.base_url())
            .parse_search(&html)
            .map_err(ReferencePriceError::Blocked)?;

        let product = products
            .into_iter()
            .next()
            .ok_or_else(|| ReferencePriceError::NotFound { query: product_name.to_string() })?;

        let price = product
            .price_value()
            .ok_or_else(|| ReferencePriceError::Malformed { price: product.price.clone() })?;

        debug!("Reference price for '{}': {}", product_name, price);

        let reference = ReferencePrice { price, product };
        cache.insert(product_name, reference.clone());
        Ok(reference)
    }

    /// Decides whether `candidate` is worth reselling.
    ///
    /// Any failure to establish a reference price yields a bare not-ok result.
    pub async fn analyze_product(
        &self,
        cache: &mut PriceCache,
        candidate: &ResaleCandidate,
    ) -> EvaluationResult {
        let name = candidate.product_name.as_str();
        let adjusted = adjust_price_for_condition(candidate.base_price, &candidate.condition);

        let reference = match self.reference_price(cache, name).await {
            Ok(reference) => reference,
            Err(e) => {
                warn!("Could not find Amazon price for {}: {}", name, e);
                return EvaluationResult::rejected();
            }
        };

        let total_cost = calculate_total_cost(adjusted, candidate.shipping, candidate.fees);
        if total_cost <= 0.0 {
            warn!("Total cost for {} is {:.2}; cannot compute a margin", name, total_cost);
            return EvaluationResult::rejected();
        }

        let margin = profit_margin_percentage(reference.price, total_cost);
        debug!("Profit margin percentage for {}: {:.2}", name, margin);

        if margin >= self.min_profit_percent {
            info!(
                "Good to resell: {} with a profit margin of ${:.2}",
                name,
                calculate_profit_margin(reference.price, total_cost)
            );
            EvaluationResult::accepted(margin, reference)
        } else {
            info!("Not worth reselling: {}", name);
            EvaluationResult::rejected()
        }
    }
}
