//! Per-channel synchronization sequencing.
//!
//! For each channel: fetch the offer catalog, reconcile stocks,
//! dispatch them, reconcile prices, dispatch those. Strictly
//! sequential; any failure aborts the channel, and — matching the
//! single outer error boundary of the legacy sync job — aborts the
//! channels not yet started as well.

use tracing::info;

use crate::Result;
use crate::catalog::fetch_offer_ids;
use crate::channel::MarketplaceChannel;
use crate::dispatch::{dispatch_prices, dispatch_stocks};
use crate::models::{CanonicalRecord, StockEntry};
use crate::reconcile::{reconcile_prices, reconcile_stocks};

/// What one channel's sync pushed, plus the in-stock subset kept for
/// reporting (diffing, logs); the subset has no effect on dispatch.
#[derive(Debug)]
pub struct SyncReport {
    pub channel: String,
    /// Offers listed on the channel at fetch time.
    pub offers: usize,
    pub stocks_pushed: usize,
    pub stock_batches: usize,
    pub prices_pushed: usize,
    pub price_batches: usize,
    /// Stock entries with a non-zero quantity.
    pub in_stock: Vec<StockEntry>,
}

/// Runs the full stock-then-price sync for one channel.
///
/// # Errors
///
/// Any step's error aborts the channel immediately; batches already
/// accepted stay accepted.
pub async fn sync_channel<C: MarketplaceChannel>(
    channel: &C,
    records: &[CanonicalRecord],
) -> Result<SyncReport> {
    let known_offer_ids = fetch_offer_ids(channel).await?;
    info!(
        channel = channel.label(),
        offers = known_offer_ids.len(),
        "fetched offer catalog"
    );

    let stocks = reconcile_stocks(records, &known_offer_ids, channel.warehouse_id())?;
    let stock_batches = dispatch_stocks(channel, &stocks).await?;

    let prices = reconcile_prices(records, &known_offer_ids, channel.currency())?;
    let price_batches = dispatch_prices(channel, &prices).await?;

    let in_stock: Vec<StockEntry> = stocks
        .iter()
        .filter(|entry| entry.quantity != 0)
        .cloned()
        .collect();

    info!(
        channel = channel.label(),
        stocks = stocks.len(),
        stock_batches,
        prices = prices.len(),
        price_batches,
        in_stock = in_stock.len(),
        "channel synchronized"
    );

    Ok(SyncReport {
        channel: channel.label().to_string(),
        offers: known_offer_ids.len(),
        stocks_pushed: stocks.len(),
        stock_batches,
        prices_pushed: prices.len(),
        price_batches,
        in_stock,
    })
}

/// Synchronizes every channel in configured order.
///
/// # Errors
///
/// The first failing channel aborts the run: channels after it are not
/// attempted and their reports are not produced.
pub async fn sync_channels<C: MarketplaceChannel>(
    channels: &[C],
    records: &[CanonicalRecord],
) -> Result<Vec<SyncReport>> {
    let mut reports = Vec::with_capacity(channels.len());
    for channel in channels {
        reports.push(sync_channel(channel, records).await?);
    }
    Ok(reports)
}
