//! Ozon seller API channel.
//!
//! Authenticates with `Client-Id`/`Api-Key` headers. The product list
//! is paginated by a `last_id` cursor but terminated by the declared
//! `total` ([`PageStrategy::Total`]).

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::channel::MarketplaceChannel;
use crate::models::{OfferPage, PageStrategy, PriceEntry, StockEntry};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api-seller.ozon.ru";

/// Items requested per product-list page.
const PAGE_LIMIT: usize = 1000;

/// Ozon rejects stock imports above 100 items per request.
pub const STOCK_CHUNK_SIZE: usize = 100;

/// Ozon accepts up to 1000 prices per import request.
pub const PRICE_CHUNK_SIZE: usize = 1000;

/// One seller account on Ozon.
pub struct OzonChannel {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    api_key: String,
}

impl OzonChannel {
    pub fn new(http: reqwest::Client, client_id: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: client_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Points the client at a different endpoint (test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .post(format!("{}{path}", self.base_url))
            .header("Client-Id", &self.client_id)
            .header("Api-Key", &self.api_key)
    }
}

impl MarketplaceChannel for OzonChannel {
    fn label(&self) -> &str {
        "ozon"
    }

    fn page_strategy(&self) -> PageStrategy {
        PageStrategy::Total
    }

    fn warehouse_id(&self) -> Option<&str> {
        None
    }

    fn currency(&self) -> &str {
        "RUB"
    }

    fn stock_chunk_size(&self) -> usize {
        STOCK_CHUNK_SIZE
    }

    fn price_chunk_size(&self) -> usize {
        PRICE_CHUNK_SIZE
    }

    async fn fetch_offer_page(&self, cursor: &str) -> Result<OfferPage> {
        let response = self
            .post("/v2/product/list")
            .json(&ProductListRequest::new(cursor))
            .send()
            .await?
            .error_for_status()?
            .json::<ProductListResponse>()
            .await?;

        let result = response.result;
        Ok(OfferPage {
            offer_ids: result.items.into_iter().map(|item| item.offer_id).collect(),
            next_cursor: result.last_id,
            total: Some(result.total),
        })
    }

    async fn push_stock_batch(&self, batch: &[StockEntry]) -> Result<()> {
        self.post("/v1/product/import/stocks")
            .json(&stock_import(batch))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn push_price_batch(&self, batch: &[PriceEntry]) -> Result<()> {
        self.post("/v1/product/import/prices")
            .json(&price_import(batch))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ProductListRequest<'a> {
    filter: ProductListFilter,
    last_id: &'a str,
    limit: usize,
}

impl<'a> ProductListRequest<'a> {
    fn new(last_id: &'a str) -> Self {
        Self {
            filter: ProductListFilter { visibility: "ALL" },
            last_id,
            limit: PAGE_LIMIT,
        }
    }
}

#[derive(Serialize)]
struct ProductListFilter {
    visibility: &'static str,
}

#[derive(Deserialize)]
struct ProductListResponse {
    result: ProductListResult,
}

#[derive(Deserialize)]
struct ProductListResult {
    items: Vec<ProductListItem>,
    total: usize,
    last_id: Option<String>,
}

#[derive(Deserialize)]
struct ProductListItem {
    offer_id: String,
}

#[derive(Serialize)]
struct StockImport<'a> {
    stocks: Vec<StockImportItem<'a>>,
}

#[derive(Serialize)]
struct StockImportItem<'a> {
    offer_id: &'a str,
    stock: u32,
}

fn stock_import(batch: &[StockEntry]) -> StockImport<'_> {
    StockImport {
        stocks: batch
            .iter()
            .map(|entry| StockImportItem {
                offer_id: &entry.offer_id,
                stock: entry.quantity,
            })
            .collect(),
    }
}

#[derive(Serialize)]
struct PriceImport<'a> {
    prices: Vec<PriceImportItem<'a>>,
}

#[derive(Serialize)]
struct PriceImportItem<'a> {
    auto_action_enabled: &'static str,
    currency_code: &'a str,
    offer_id: &'a str,
    old_price: &'static str,
    price: String,
}

fn price_import(batch: &[PriceEntry]) -> PriceImport<'_> {
    PriceImport {
        prices: batch
            .iter()
            .map(|entry| PriceImportItem {
                auto_action_enabled: "UNKNOWN",
                currency_code: &entry.currency,
                offer_id: &entry.offer_id,
                old_price: "0",
                price: entry.amount.to_string(),
            })
            .collect(),
    }
}
