//! Yandex.Market partner API channel.
//!
//! One channel per campaign (logistics method — FBS or DBS), all
//! sharing a bearer token. The offer-mapping listing is paginated by a
//! `nextPageToken` cursor ([`PageStrategy::Cursor`]); stock updates
//! are scoped to the campaign's warehouse.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::channel::MarketplaceChannel;
use crate::models::{OfferPage, PageStrategy, PriceEntry, StockEntry};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.partner.market.yandex.ru";

/// Items requested per offer-mapping page.
const PAGE_LIMIT: usize = 200;

/// Yandex.Market accepts up to 2000 skus per stock update.
pub const STOCK_CHUNK_SIZE: usize = 2000;

/// Yandex.Market accepts up to 500 offers per price update.
pub const PRICE_CHUNK_SIZE: usize = 500;

/// One Yandex.Market campaign.
pub struct YandexChannel {
    http: reqwest::Client,
    base_url: String,
    label: String,
    token: String,
    campaign_id: String,
    warehouse_id: String,
}

impl YandexChannel {
    pub fn new(
        http: reqwest::Client,
        label: &str,
        token: &str,
        campaign_id: &str,
        warehouse_id: &str,
    ) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            label: label.to_string(),
            token: token.to_string(),
            campaign_id: campaign_id.to_string(),
            warehouse_id: warehouse_id.to_string(),
        }
    }

    /// Points the client at a different endpoint (test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn campaign_url(&self, path: &str) -> String {
        format!("{}/campaigns/{}/{path}", self.base_url, self.campaign_id)
    }
}

impl MarketplaceChannel for YandexChannel {
    fn label(&self) -> &str {
        &self.label
    }

    fn page_strategy(&self) -> PageStrategy {
        PageStrategy::Cursor
    }

    fn warehouse_id(&self) -> Option<&str> {
        Some(&self.warehouse_id)
    }

    fn currency(&self) -> &str {
        "RUR"
    }

    fn stock_chunk_size(&self) -> usize {
        STOCK_CHUNK_SIZE
    }

    fn price_chunk_size(&self) -> usize {
        PRICE_CHUNK_SIZE
    }

    async fn fetch_offer_page(&self, cursor: &str) -> Result<OfferPage> {
        let limit = PAGE_LIMIT.to_string();
        let response = self
            .http
            .get(self.campaign_url("offer-mapping-entries"))
            .bearer_auth(&self.token)
            .query(&[("page_token", cursor), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<OfferMappingsResponse>()
            .await?;

        let result = response.result;
        Ok(OfferPage {
            offer_ids: result
                .offer_mapping_entries
                .into_iter()
                .map(|entry| entry.offer.shop_sku)
                .collect(),
            next_cursor: result.paging.and_then(|paging| paging.next_page_token),
            total: None,
        })
    }

    async fn push_stock_batch(&self, batch: &[StockEntry]) -> Result<()> {
        self.http
            .put(self.campaign_url("offers/stocks"))
            .bearer_auth(&self.token)
            .json(&stock_update(batch, &self.warehouse_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn push_price_batch(&self, batch: &[PriceEntry]) -> Result<()> {
        self.http
            .post(self.campaign_url("offer-prices/updates"))
            .bearer_auth(&self.token)
            .json(&price_update(batch))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct OfferMappingsResponse {
    result: OfferMappingsResult,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OfferMappingsResult {
    offer_mapping_entries: Vec<OfferMappingEntry>,
    paging: Option<Paging>,
}

#[derive(Deserialize)]
struct OfferMappingEntry {
    offer: OfferInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OfferInfo {
    shop_sku: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Paging {
    next_page_token: Option<String>,
}

#[derive(Serialize)]
struct StockUpdate<'a> {
    skus: Vec<SkuStocks<'a>>,
}

#[derive(Serialize)]
struct SkuStocks<'a> {
    sku: &'a str,
    #[serde(rename = "warehouseId")]
    warehouse_id: &'a str,
    items: Vec<SkuStockItem<'a>>,
}

#[derive(Serialize)]
struct SkuStockItem<'a> {
    count: u32,
    #[serde(rename = "type")]
    stock_type: &'static str,
    #[serde(rename = "updatedAt")]
    updated_at: &'a str,
}

fn stock_update<'a>(batch: &'a [StockEntry], warehouse_id: &'a str) -> StockUpdate<'a> {
    StockUpdate {
        skus: batch
            .iter()
            .map(|entry| SkuStocks {
                sku: &entry.offer_id,
                warehouse_id: entry.warehouse_id.as_deref().unwrap_or(warehouse_id),
                items: vec![SkuStockItem {
                    count: entry.quantity,
                    stock_type: "FIT",
                    updated_at: &entry.updated_at,
                }],
            })
            .collect(),
    }
}

#[derive(Serialize)]
struct PriceUpdate<'a> {
    offers: Vec<OfferPrice<'a>>,
}

#[derive(Serialize)]
struct OfferPrice<'a> {
    id: &'a str,
    price: PriceValue<'a>,
}

#[derive(Serialize)]
struct PriceValue<'a> {
    value: u64,
    #[serde(rename = "currencyId")]
    currency_id: &'a str,
}

fn price_update(batch: &[PriceEntry]) -> PriceUpdate<'_> {
    PriceUpdate {
        offers: batch
            .iter()
            .map(|entry| OfferPrice {
                id: &entry.offer_id,
                price: PriceValue {
                    value: entry.amount,
                    currency_id: &entry.currency,
                },
            })
            .collect(),
    }
}
