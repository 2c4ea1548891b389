//! Resale pricing math: condition discounts, landed cost and margin.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Multiplier applied to condition labels that are not recognized.
pub const UNKNOWN_CONDITION_MULTIPLIER: f64 = 0.5;

/// Item condition as listed by the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    LikeNew,
    UsedVeryGood,
    UsedGood,
    UsedAcceptable,
}

impl Condition {
    /// All conditions, best first.
    pub fn all() -> &'static [Condition] {
        &[
            Condition::New,
            Condition::LikeNew,
            Condition::UsedVeryGood,
            Condition::UsedGood,
            Condition::UsedAcceptable,
        ]
    }

    /// Matches an exact seller label such as "Used - Good".
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }

    /// The seller-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::UsedVeryGood => "Used - Very Good",
            Condition::UsedGood => "Used - Good",
            Condition::UsedAcceptable => "Used - Acceptable",
        }
    }

    /// Fraction of the base price this condition is worth.
    pub fn multiplier(&self) -> f64 {
        match self {
            Condition::New => 1.0,
            Condition::LikeNew => 0.9,
            Condition::UsedVeryGood => 0.8,
            Condition::UsedGood => 0.7,
            Condition::UsedAcceptable => 0.5,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scales `base_price` by the multiplier for `condition`.
///
/// Unrecognized labels fall back to [`UNKNOWN_CONDITION_MULTIPLIER`].
pub fn adjust_price_for_condition(base_price: f64, condition: &str) -> f64 {
    let multiplier = match Condition::from_label(condition) {
        Some(c) => c.multiplier(),
        None => {
            debug!("Unrecognized condition '{}', using {}", condition, UNKNOWN_CONDITION_MULTIPLIER);
            UNKNOWN_CONDITION_MULTIPLIER
        }
    };
    base_price * multiplier
}

/// Landed cost of an item.
pub fn calculate_total_cost(base_price: f64, shipping: f64, fees: f64) -> f64 {
    base_price + shipping + fees
}

/// Absolute profit of reselling at `resale_price`.
pub fn calculate_profit_margin(resale_price: f64, total_cost: f64) -> f64 {
    resale_price - total_cost
}

/// Profit as a percentage of `total_cost`.
pub fn profit_margin_percentage(resale_price: f64, total_cost: f64) -> f64 {
    (resale_price - total_cost) / total_cost * 100.0
}

/// True when the margin meets `min_profit_percent`.
pub fn is_good_to_resell(resale_price: f64, total_cost: f64, min_profit_percent: f64) -> bool {
    profit_margin_percentage(resale_price, total_cost) >= min_profit_percent
}
