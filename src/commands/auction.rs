//! Auction commands: current bids, lot listing and bidding.
//!
//! Lots and bid results are opaque server objects, so these commands always
//! print JSON regardless of `--format`.

use crate::auction::{AuctionClient, AuctionSearch, LotQuery};
use crate::config::Config;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

/// Options for the `lots` subcommand.
#[derive(Debug, Clone, Default)]
pub struct LotsOptions {
    pub category: Option<i64>,
    /// Fetch only this page instead of walking all pages
    pub page: Option<u32>,
    pub page_length: Option<u32>,
    pub search_text: Option<String>,
}

/// Runs auction operations against the configured endpoint.
pub struct AuctionCommand {
    config: Config,
}

impl AuctionCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn client(&self) -> Result<AuctionClient> {
        AuctionClient::from_config(&self.config.auction).context("Failed to create auction client")
    }

    /// Lists the caller's active bids.
    pub async fn bids(&self) -> Result<String> {
        self.bids_with_client(&self.client()?).await
    }

    pub async fn bids_with_client(&self, client: &AuctionClient) -> Result<String> {
        match client.get_current_bids().await? {
            Some(lots) => {
                info!("{} active bids", lots.len());
                to_json(&lots)
            }
            None => Ok("No current bids returned.".to_string()),
        }
    }

    /// Lists lots in an auction.
    pub async fn lots(&self, auction_id: i64, options: &LotsOptions) -> Result<String> {
        self.lots_with_client(&self.client()?, auction_id, options).await
    }

    pub async fn lots_with_client(
        &self,
        client: &AuctionClient,
        auction_id: i64,
        options: &LotsOptions,
    ) -> Result<String> {
        let category = options.category.unwrap_or(-1);
        let page_length = options.page_length.unwrap_or(self.config.auction.page_length);

        let lots = match options.page {
            Some(page) => {
                let mut query =
                    LotQuery::new(auction_id).category(category).page(page).page_length(page_length);
                if let Some(text) = &options.search_text {
                    query = query.search_text(text.as_str());
                }
                client.search_auction_products(&query).await?.paged_results.results
            }
            None => {
                client
                    .iter_auction_products(auction_id, category, page_length)
                    .collect_all()
                    .await?
            }
        };

        info!("Fetched {} lots from auction {}", lots.len(), auction_id);
        to_json(&lots)
    }

    /// Places a bid on a lot.
    pub async fn bid(&self, lot_id: i64, amount: f64, re_confirmed: bool) -> Result<String> {
        self.bid_with_client(&self.client()?, lot_id, amount, re_confirmed).await
    }

    pub async fn bid_with_client(
        &self,
        client: &AuctionClient,
        lot_id: i64,
        amount: f64,
        re_confirmed: bool,
    ) -> Result<String> {
        match client.bid_on_lot(lot_id, amount, re_confirmed).await? {
            Some(outcome) => {
                if outcome.is_rejected() {
                    warn!("Bid on lot {} rejected: {}", lot_id, outcome.payload());
                }
                to_json(&outcome.into_payload())
            }
            None => Ok("Bid response carried no result.".to_string()),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize response")
}
