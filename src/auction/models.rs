//! Auction API request and response types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

/// A lot as returned by the server; fields are passed through untouched.
pub type Lot = Value;

/// One page of lots with the server's counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResults {
    #[serde(default)]
    pub page_length: u32,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub total_count: u64,
    pub filtered_count: u64,
    /// A `null` list reads as empty
    #[serde(deserialize_with = "null_as_empty")]
    pub results: Vec<Lot>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Lot>, D::Error> {
    Ok(Option::<Vec<Lot>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `lotSearch` envelope around a page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotSearchPage {
    pub paged_results: PagedResults,
}

impl LotSearchPage {
    pub fn results(&self) -> &[Lot] {
        &self.paged_results.results
    }

    pub fn filtered_count(&self) -> u64 {
        self.paged_results.filtered_count
    }
}

/// Server response to a bid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BidOutcome {
    /// The `bid` result object (status, suggested bid, message, lot).
    Bid(Value),
    /// The `InvalidInputErrors` payload.
    InvalidInput(Value),
}

impl BidOutcome {
    /// Reads the outcome from a `LotBid` response body.
    ///
    /// `None` when neither key carries a value.
    pub fn from_response(body: &Value) -> Option<Self> {
        let data = body.get("data")?;

        if let Some(bid) = data.get("bid").filter(|v| !v.is_null()) {
            return Some(BidOutcome::Bid(bid.clone()));
        }

        data.get("InvalidInputErrors")
            .filter(|v| !v.is_null())
            .map(|errors| BidOutcome::InvalidInput(errors.clone()))
    }

    pub fn payload(&self) -> &Value {
        match self {
            BidOutcome::Bid(v) | BidOutcome::InvalidInput(v) => v,
        }
    }

    pub fn into_payload(self) -> Value {
        match self {
            BidOutcome::Bid(v) | BidOutcome::InvalidInput(v) => v,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, BidOutcome::InvalidInput(_))
    }
}

/// Filters for one `LotSearch` page.
#[derive(Debug, Clone, PartialEq)]
pub struct LotQuery {
    pub auction_id: i64,
    /// Category id; -1 means all categories
    pub category: i64,
    pub page_number: u32,
    pub page_length: u32,
    pub search_text: Option<String>,
}

impl LotQuery {
    /// First page of 100 lots across all categories.
    pub fn new(auction_id: i64) -> Self {
        Self { auction_id, category: -1, page_number: 1, page_length: 100, search_text: None }
    }

    pub fn category(mut self, category: i64) -> Self {
        self.category = category;
        self
    }

    pub fn page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn page_length(mut self, page_length: u32) -> Self {
        self.page_length = page_length;
        self
    }

    pub fn search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// GraphQL variables for the `LotSearch` operation.
    pub fn variables(&self) -> Value {
        json!({
            "auctionId": self.auction_id,
            "category": self.category,
            "searchText": self.search_text,
            "zip": "",
            "miles": 50,
            "shippingOffered": false,
            "countryName": "",
            "status": "ALL",
            "sortOrder": "LOT_NUMBER",
            "filter": "ALL",
            "isArchive": false,
            "countAsView": true,
            "hideGoogle": false,
            "pageNumber": self.page_number,
            "pageLength": self.page_length,
        })
    }
}

/// Variables for the caller's current bids: first page of 100, all statuses.
pub fn current_bids_variables() -> Value {
    json!({
        "isArchived": false,
        "groupByAuction": true,
        "auctionSortDirection": "ASC",
        "hideClosedLots": false,
        "auctionId": 0,
        "buyerLotStatusGroup": "ALL",
        "sortOrder": "SALES_ORDER",
        "monthRange": "THREE_MONTHS",
        "sortDirection": "ASC",
        "pageNumber": 1,
        "pageLength": 100,
    })
}
