//! Auction platform GraphQL client and lot pager.

pub mod client;
pub mod models;
pub mod pager;
pub mod queries;

pub use client::{AuctionClient, AuctionError, AuctionSearch};
pub use models::{BidOutcome, Lot, LotQuery, LotSearchPage, PagedResults};
pub use pager::LotPager;
