//! CLI command implementations.

pub mod analyze;
pub mod auction;
pub mod search;

pub use analyze::AnalyzeCommand;
pub use auction::{AuctionCommand, LotsOptions};
pub use search::SearchCommand;
