//! resell-scout - reseller toolkit
//!
//! Scrapes Amazon search listings for reference prices, decides whether a
//! second-hand item is worth reselling, and talks to an auction platform's
//! GraphQL API to list lots and place bids.

pub mod amazon;
pub mod arbitrage;
pub mod auction;
pub mod commands;
pub mod config;
pub mod format;

pub use amazon::models::ProductRecord;
pub use arbitrage::{EvaluationResult, Evaluator, PriceCache, ResaleCandidate};
pub use auction::{AuctionClient, BidOutcome, LotPager};
pub use config::Config;
