//! Marketplace channel clients.
//!
//! Each submodule owns one marketplace's request shaping: endpoints,
//! auth headers, and JSON envelopes. The engine only ever talks to
//! them through [`MarketplaceChannel`].

pub mod ozon;
pub mod yandex;

pub use ozon::OzonChannel;
pub use yandex::YandexChannel;

use crate::Result;
use crate::channel::MarketplaceChannel;
use crate::models::{OfferPage, PageStrategy, PriceEntry, StockEntry};

/// A configured channel of either marketplace, so one run can hold its
/// channels in a single ordered list.
pub enum Marketplace {
    Ozon(OzonChannel),
    Yandex(YandexChannel),
}

impl MarketplaceChannel for Marketplace {
    fn label(&self) -> &str {
        match self {
            Marketplace::Ozon(c) => c.label(),
            Marketplace::Yandex(c) => c.label(),
        }
    }

    fn page_strategy(&self) -> PageStrategy {
        match self {
            Marketplace::Ozon(c) => c.page_strategy(),
            Marketplace::Yandex(c) => c.page_strategy(),
        }
    }

    fn warehouse_id(&self) -> Option<&str> {
        match self {
            Marketplace::Ozon(c) => c.warehouse_id(),
            Marketplace::Yandex(c) => c.warehouse_id(),
        }
    }

    fn currency(&self) -> &str {
        match self {
            Marketplace::Ozon(c) => c.currency(),
            Marketplace::Yandex(c) => c.currency(),
        }
    }

    fn stock_chunk_size(&self) -> usize {
        match self {
            Marketplace::Ozon(c) => c.stock_chunk_size(),
            Marketplace::Yandex(c) => c.stock_chunk_size(),
        }
    }

    fn price_chunk_size(&self) -> usize {
        match self {
            Marketplace::Ozon(c) => c.price_chunk_size(),
            Marketplace::Yandex(c) => c.price_chunk_size(),
        }
    }

    async fn fetch_offer_page(&self, cursor: &str) -> Result<OfferPage> {
        match self {
            Marketplace::Ozon(c) => c.fetch_offer_page(cursor).await,
            Marketplace::Yandex(c) => c.fetch_offer_page(cursor).await,
        }
    }

    async fn push_stock_batch(&self, batch: &[StockEntry]) -> Result<()> {
        match self {
            Marketplace::Ozon(c) => c.push_stock_batch(batch).await,
            Marketplace::Yandex(c) => c.push_stock_batch(batch).await,
        }
    }

    async fn push_price_batch(&self, batch: &[PriceEntry]) -> Result<()> {
        match self {
            Marketplace::Ozon(c) => c.push_price_batch(batch).await,
            Marketplace::Yandex(c) => c.push_price_batch(batch).await,
        }
    }
}
