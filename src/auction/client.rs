//! HTTP client for the auction platform's GraphQL endpoint.

use super::models::{current_bids_variables, BidOutcome, Lot, LotQuery, LotSearchPage};
use super::pager::LotPager;
use super::queries;
use crate::config::AuctionConfig;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use wreq::Client;

/// Failures talking to the auction endpoint.
#[derive(Debug, Error)]
pub enum AuctionError {
    #[error("failed to fetch data: {0}")]
    Transport(#[from] wreq::Error),

    #[error("failed to fetch data: endpoint returned status {0}")]
    Status(u16),

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response shape: missing {0}")]
    Shape(&'static str),
}

/// Trait for paged lot search - enables mocking for tests.
#[async_trait]
pub trait AuctionSearch: Send + Sync {
    /// Fetches one page of lots; returns the `lotSearch` envelope.
    async fn search_auction_products(&self, query: &LotQuery) -> Result<LotSearchPage, AuctionError>;
}

/// GraphQL client for a single auction endpoint.
pub struct AuctionClient {
    client: Client,
    endpoint: String,
    headers: Vec<(&'static str, String)>,
}

impl AuctionClient {
    /// Creates a client for `endpoint`, authenticating with `auth_token` if given.
    pub fn new(endpoint: impl Into<String>, auth_token: Option<&str>) -> Result<Self, AuctionError> {
        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let mut headers: Vec<(&'static str, String)> = [
            ("accept", "application/json, text/plain, */*"),
            ("accept-language", "en-US,en;q=0.9"),
            ("content-type", "application/json"),
            ("sec-ch-ua", "\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"120\", \"Google Chrome\";v=\"120\""),
            ("sec-ch-ua-mobile", "?0"),
            ("sec-ch-ua-platform", "\"macOS\""),
            ("sec-fetch-dest", "empty"),
            ("sec-fetch-mode", "cors"),
            ("sec-fetch-site", "same-origin"),
            ("sec-gpc", "1"),
        ]
        .into_iter()
        .map(|(name, value)| (name, value.to_string()))
        .collect();

        if let Some(token) = auth_token.filter(|t| !t.is_empty()) {
            headers.push(("authorization", format!("Bearer {}", token)));
        }

        Ok(Self { client, endpoint: endpoint.into(), headers })
    }

    /// Creates a client from the `[auction]` config table.
    pub fn from_config(config: &AuctionConfig) -> anyhow::Result<Self> {
        let endpoint = config
            .endpoint
            .as_deref()
            .context("No auction endpoint configured (set auction.endpoint or RESELL_AUCTION_ENDPOINT)")?;

        let mut client = Self::new(endpoint, config.auth_token.as_deref())?;
        if let Some(subdomain) = &config.site_subdomain {
            client = client.with_site_subdomain(subdomain);
        }
        Ok(client)
    }

    /// Adds the `site_subdomain` header naming the auction house.
    pub fn with_site_subdomain(mut self, subdomain: &str) -> Self {
        self.headers.push(("site_subdomain", subdomain.to_string()));
        self
    }

    /// POSTs a GraphQL envelope and returns the decoded body unvalidated.
    pub async fn fetch_graphql(
        &self,
        query: &str,
        variables: Value,
        operation_name: &str,
    ) -> Result<Value, AuctionError> {
        debug!("POST {} ({})", self.endpoint, operation_name);

        let body = json!({
            "operationName": operation_name,
            "variables": variables,
            "query": query,
        });

        let mut request = self.client.post(&self.endpoint);
        for (name, value) in &self.headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.body(serde_json::to_vec(&body)?).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("{} failed with status {}", operation_name, status);
            return Err(AuctionError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Places a bid; `None` when the response names neither a result nor input errors.
    pub async fn bid_on_lot(
        &self,
        lot_id: i64,
        bid_amount: f64,
        re_confirmed: bool,
    ) -> Result<Option<BidOutcome>, AuctionError> {
        info!("Bidding {} on lot {}", bid_amount, lot_id);

        let variables = json!({
            "lotId": lot_id,
            "bidAmount": bid_amount,
            "reConfirmed": re_confirmed,
        });

        let data = self.fetch_graphql(queries::LOT_BID, variables, queries::LOT_BID_OPERATION).await?;

        let outcome = BidOutcome::from_response(&data);
        if outcome.is_none() {
            debug!("Bid response for lot {} carried no result", lot_id);
        }
        Ok(outcome)
    }

    /// Fetches the first page of the caller's active bids.
    pub async fn get_current_bids(&self) -> Result<Option<Vec<Lot>>, AuctionError> {
        info!("Fetching current bids");

        let data = self
            .fetch_graphql(
                queries::CURRENT_BIDS_SEARCH,
                current_bids_variables(),
                queries::CURRENT_BIDS_OPERATION,
            )
            .await?;

        Ok(data.pointer("/data/currentBids/pagedResults/results").and_then(Value::as_array).cloned())
    }

    /// Lazily walks every page of lots in an auction.
    pub fn iter_auction_products(&self, auction_id: i64, category: i64, page_length: u32) -> LotPager<'_, Self> {
        LotPager::new(self, auction_id, category, page_length)
    }
}

#[async_trait]
impl AuctionSearch for AuctionClient {
    async fn search_auction_products(&self, query: &LotQuery) -> Result<LotSearchPage, AuctionError> {
        info!("Searching auction {} (page {})", query.auction_id, query.page_number);

        let data = self
            .fetch_graphql(queries::LOT_SEARCH, query.variables(), queries::LOT_SEARCH_OPERATION)
            .await?;

        let envelope = data
            .pointer("/data/lotSearch")
            .filter(|v| !v.is_null())
            .ok_or(AuctionError::Shape("data.lotSearch"))?;

        Ok(serde_json::from_value(envelope.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint(server: &MockServer) -> String {
        format!("{}/graphql", server.uri())
    }

    fn lots(range: std::ops::Range<u32>) -> Vec<Value> {
        range.map(|id| json!({ "id": id, "lotNumber": id.to_string() })).collect()
    }

    fn lot_search_body(page: u32, filtered: u64, results: Vec<Value>) -> Value {
        json!({
            "data": {
                "lotSearch": {
                    "pagedResults": {
                        "pageLength": 100,
                        "pageNumber": page,
                        "totalCount": filtered,
                        "filteredCount": filtered,
                        "results": results,
                        "__typename": "LotPagedResults"
                    },
                    "__typename": "LotSearchResult"
                }
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_graphql_envelope_and_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", "Bearer tok-123"))
            .and(header("content-type", "application/json"))
            .and(header("site_subdomain", "seller.example"))
            .and(body_partial_json(json!({
                "operationName": "Ping",
                "variables": { "x": 1 },
                "query": "query Ping { ping }"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "ping": true } })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), Some("tok-123"))
            .unwrap()
            .with_site_subdomain("seller.example");

        let data = client.fetch_graphql("query Ping { ping }", json!({ "x": 1 }), "Ping").await.unwrap();
        assert_eq!(data["data"]["ping"], true);
    }

    #[tokio::test]
    async fn test_fetch_graphql_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), None).unwrap();
        let err = client.fetch_graphql("query X { x }", json!({}), "X").await.unwrap_err();

        assert!(matches!(err, AuctionError::Status(500)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_graphql_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), None).unwrap();
        let err = client.fetch_graphql("query X { x }", json!({}), "X").await.unwrap_err();
        assert!(matches!(err, AuctionError::Decode(_)));
    }

    #[tokio::test]
    async fn test_bid_on_lot_accepted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "operationName": "LotBid",
                "variables": { "lotId": 991, "bidAmount": 25.5, "reConfirmed": true }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "bid": { "bidStatus": "WINNING", "bidMessage": "You are the high bidder" } }
            })))
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), Some("tok")).unwrap();
        let outcome = client.bid_on_lot(991, 25.5, true).await.unwrap().unwrap();

        assert!(matches!(outcome, BidOutcome::Bid(_)));
        assert_eq!(outcome.payload()["bidStatus"], "WINNING");
    }

    #[tokio::test]
    async fn test_bid_on_lot_invalid_input_returned_unchanged() {
        let mock_server = MockServer::start().await;
        let errors = json!({
            "messages": ["Bid amount is below the minimum"],
            "errors": [{ "fieldName": "bidAmount", "messages": ["Minimum bid is 30.00"] }]
        });

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": { "InvalidInputErrors": errors.clone() } })),
            )
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), Some("tok")).unwrap();
        let outcome = client.bid_on_lot(991, 1.0, false).await.unwrap();

        assert_eq!(outcome, Some(BidOutcome::InvalidInput(errors)));
    }

    #[tokio::test]
    async fn test_bid_on_lot_no_result() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "somethingElse": {} } })),
            )
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), Some("tok")).unwrap();
        assert_eq!(client.bid_on_lot(991, 10.0, false).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_current_bids() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "operationName": "CurrentBidsSearch",
                "variables": { "pageNumber": 1, "pageLength": 100 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "currentBids": {
                        "auctions": [],
                        "pagedResults": { "filteredCount": 2, "results": lots(1..3) }
                    }
                }
            })))
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), Some("tok")).unwrap();
        let bids = client.get_current_bids().await.unwrap().unwrap();

        assert_eq!(bids.len(), 2);
        assert_eq!(bids[0]["id"], 1);
    }

    #[tokio::test]
    async fn test_get_current_bids_unexpected_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{ "message": "Not authorized" }]
            })))
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), None).unwrap();
        assert_eq!(client.get_current_bids().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_search_auction_products_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "operationName": "LotSearch",
                "variables": { "auctionId": 555, "category": -1, "pageNumber": 2, "pageLength": 10, "searchText": "saw" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(lot_search_body(2, 25, lots(10..20))))
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), None).unwrap();
        let query = LotQuery::new(555).page(2).page_length(10).search_text("saw");
        let page = client.search_auction_products(&query).await.unwrap();

        assert_eq!(page.filtered_count(), 25);
        assert_eq!(page.paged_results.page_number, 2);
        assert_eq!(page.results().len(), 10);
        assert_eq!(page.results()[0]["id"], 10);
    }

    #[tokio::test]
    async fn test_search_auction_products_missing_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "lotSearch": null } })))
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), None).unwrap();
        let err = client.search_auction_products(&LotQuery::new(1)).await.unwrap_err();
        assert!(matches!(err, AuctionError::Shape("data.lotSearch")));
    }

    #[tokio::test]
    async fn test_iter_auction_products_three_pages() {
        let mock_server = MockServer::start().await;

        for (page, results) in [(1, lots(0..100)), (2, lots(100..200)), (3, lots(200..240))] {
            Mock::given(method("POST"))
                .and(body_partial_json(json!({ "variables": { "pageNumber": page } })))
                .respond_with(ResponseTemplate::new(200).set_body_json(lot_search_body(page, 240, results)))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = AuctionClient::new(endpoint(&mock_server), None).unwrap();
        let all = client.iter_auction_products(555, -1, 100).collect_all().await.unwrap();

        assert_eq!(all.len(), 240);
        for (i, lot) in all.iter().enumerate() {
            assert_eq!(lot["id"], i as u64);
        }
        // Mock expectations verify no fourth page was requested
    }

    #[tokio::test]
    async fn test_iter_auction_products_null_results_ends_cleanly() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "variables": { "pageNumber": 1 } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(lot_search_body(1, 500, lots(0..2))))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "variables": { "pageNumber": 2 } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "lotSearch": { "pagedResults": { "filteredCount": 500, "results": null } } }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AuctionClient::new(endpoint(&mock_server), None).unwrap();
        let all = client.iter_auction_products(555, -1, 2).collect_all().await.unwrap();

        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_from_config_requires_endpoint() {
        let config = AuctionConfig::default();
        let err = AuctionClient::from_config(&config).err().unwrap();
        assert!(err.to_string().contains("No auction endpoint"));
    }

    #[tokio::test]
    async fn test_from_config_headers() {
        let config = AuctionConfig {
            endpoint: Some("https://auctions.example/graphql".to_string()),
            auth_token: Some(String::new()),
            site_subdomain: Some("seller.example".to_string()),
            page_length: 100,
        };

        let client = AuctionClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint, "https://auctions.example/graphql");
        // Empty tokens are not sent
        assert!(!client.headers.iter().any(|(name, _)| *name == "authorization"));
        assert!(client.headers.iter().any(|(name, value)| *name == "site_subdomain" && value == "seller.example"));
    }
}
