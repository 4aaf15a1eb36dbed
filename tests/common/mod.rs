//! Shared test utilities: a scriptable in-memory marketplace channel.

use std::collections::VecDeque;
use std::sync::Mutex;

use restock::channel::MarketplaceChannel;
use restock::models::{OfferPage, PageStrategy, PriceEntry, StockEntry};
use restock::{Result, RestockError};

/// One recorded upload, in the order the channel received them.
#[derive(Debug, Clone)]
pub enum Upload {
    Stock(Vec<StockEntry>),
    Price(Vec<PriceEntry>),
}

/// A [`MarketplaceChannel`] fed from scripted pages that records every
/// batch pushed to it. Failures are injected per batch index.
pub struct MockChannel {
    label: String,
    strategy: PageStrategy,
    warehouse: Option<String>,
    stock_chunk: usize,
    price_chunk: usize,
    pages: Mutex<VecDeque<Result<OfferPage>>>,
    pub uploads: Mutex<Vec<Upload>>,
    fail_on_stock_batch: Option<usize>,
    fail_on_price_batch: Option<usize>,
}

impl MockChannel {
    pub fn new(strategy: PageStrategy, pages: Vec<Result<OfferPage>>) -> Self {
        Self {
            label: "mock".to_string(),
            strategy,
            warehouse: None,
            stock_chunk: 100,
            price_chunk: 100,
            pages: Mutex::new(pages.into()),
            uploads: Mutex::new(Vec::new()),
            fail_on_stock_batch: None,
            fail_on_price_batch: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_chunks(mut self, stock: usize, price: usize) -> Self {
        self.stock_chunk = stock;
        self.price_chunk = price;
        self
    }

    pub fn with_warehouse(mut self, warehouse: &str) -> Self {
        self.warehouse = Some(warehouse.to_string());
        self
    }

    /// Makes the `n`-th stock batch (1-based) fail.
    pub fn fail_on_stock_batch(mut self, n: usize) -> Self {
        self.fail_on_stock_batch = Some(n);
        self
    }

    /// Makes the `n`-th price batch (1-based) fail.
    pub fn fail_on_price_batch(mut self, n: usize) -> Self {
        self.fail_on_price_batch = Some(n);
        self
    }

    pub fn stock_batches(&self) -> Vec<Vec<StockEntry>> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .filter_map(|upload| match upload {
                Upload::Stock(batch) => Some(batch.clone()),
                Upload::Price(_) => None,
            })
            .collect()
    }

    pub fn price_batches(&self) -> Vec<Vec<PriceEntry>> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .filter_map(|upload| match upload {
                Upload::Price(batch) => Some(batch.clone()),
                Upload::Stock(_) => None,
            })
            .collect()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

impl MarketplaceChannel for MockChannel {
    fn label(&self) -> &str {
        &self.label
    }

    fn page_strategy(&self) -> PageStrategy {
        self.strategy
    }

    fn warehouse_id(&self) -> Option<&str> {
        self.warehouse.as_deref()
    }

    fn currency(&self) -> &str {
        "RUB"
    }

    fn stock_chunk_size(&self) -> usize {
        self.stock_chunk
    }

    fn price_chunk_size(&self) -> usize {
        self.price_chunk
    }

    async fn fetch_offer_page(&self, _cursor: &str) -> Result<OfferPage> {
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(OfferPage::default()))
    }

    async fn push_stock_batch(&self, batch: &[StockEntry]) -> Result<()> {
        let mut uploads = self.uploads.lock().unwrap();
        let sent = uploads
            .iter()
            .filter(|u| matches!(u, Upload::Stock(_)))
            .count();
        if self.fail_on_stock_batch == Some(sent + 1) {
            return Err(RestockError::Connection("injected stock failure".to_string()));
        }
        uploads.push(Upload::Stock(batch.to_vec()));
        Ok(())
    }

    async fn push_price_batch(&self, batch: &[PriceEntry]) -> Result<()> {
        let mut uploads = self.uploads.lock().unwrap();
        let sent = uploads
            .iter()
            .filter(|u| matches!(u, Upload::Price(_)))
            .count();
        if self.fail_on_price_batch == Some(sent + 1) {
            return Err(RestockError::Connection("injected price failure".to_string()));
        }
        uploads.push(Upload::Price(batch.to_vec()));
        Ok(())
    }
}

/// Builds a listing page from string ids.
pub fn page(ids: &[&str], next_cursor: Option<&str>, total: Option<usize>) -> Result<OfferPage> {
    Ok(OfferPage {
        offer_ids: ids.iter().map(|id| id.to_string()).collect(),
        next_cursor: next_cursor.map(str::to_string),
        total,
    })
}
