//! Arbitrage evaluation: pricing rules, reference-price cache and the evaluator.

pub mod cache;
pub mod evaluator;
pub mod pricing;

pub use cache::{PriceCache, ReferencePrice};
pub use evaluator::{
    EvaluationResult, Evaluator, ReferencePriceError, ResaleCandidate, DEFAULT_MIN_PROFIT_PERCENT,
};
pub use pricing::{
    adjust_price_for_condition, calculate_profit_margin, calculate_total_cost, is_good_to_resell,
    profit_margin_percentage, Condition,
};
