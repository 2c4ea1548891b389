//! Lazy, forward-only iteration over every lot in an auction.

use super::client::{AuctionError, AuctionSearch};
use super::models::{Lot, LotQuery};
use std::collections::VecDeque;
use tracing::debug;

/// Walks `LotSearch` pages on demand.
///
/// Pages are fetched only when the buffered page runs dry. Iteration ends after
/// an empty page, or once `filteredCount <= page_number * page_length`. Each
/// call to [`AuctionClient::iter_auction_products`](super::AuctionClient::iter_auction_products)
/// returns a fresh pager starting at page 1.
pub struct LotPager<'a, S: ?Sized> {
    source: &'a S,
    auction_id: i64,
    category: i64,
    page_length: u32,
    page_number: u32,
    buffer: VecDeque<Lot>,
    finished: bool,
}

impl<'a, S: AuctionSearch + ?Sized> LotPager<'a, S> {
    pub fn new(source: &'a S, auction_id: i64, category: i64, page_length: u32) -> Self {
        Self {
            source,
            auction_id,
            category,
            page_length,
            page_number: 0,
            buffer: VecDeque::new(),
            finished: false,
        }
    }

    /// Yields the next lot, fetching the following page when needed.
    ///
    /// An error ends the pager; later calls return `Ok(None)`.
    pub async fn next(&mut self) -> Result<Option<Lot>, AuctionError> {
        if let Some(lot) = self.buffer.pop_front() {
            return Ok(Some(lot));
        }

        if self.finished {
            return Ok(None);
        }

        self.page_number += 1;
        let query = LotQuery::new(self.auction_id)
            .category(self.category)
            .page(self.page_number)
            .page_length(self.page_length);

        let page = match self.source.search_auction_products(&query).await {
            Ok(page) => page,
            Err(e) => {
                self.finished = true;
                return Err(e);
            }
        };

        let filtered = page.filtered_count();
        let results = page.paged_results.results;
        debug!(
            "Auction {} page {}: {} lots (filtered {})",
            self.auction_id,
            self.page_number,
            results.len(),
            filtered
        );

        if results.is_empty()
            || filtered <= u64::from(self.page_number) * u64::from(self.page_length)
        {
            self.finished = true;
        }

        self.buffer.extend(results);
        Ok(self.buffer.pop_front())
    }

    /// Drains the pager into a vector.
    pub async fn collect_all(mut self) -> Result<Vec<Lot>, AuctionError> {
        let mut lots = Vec::new();
        while let Some(lot) = self.next().await? {
            lots.push(lot);
        }
        Ok(lots)
    }
}
