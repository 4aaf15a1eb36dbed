//! The seam between the reconciliation engine and a marketplace.
//!
//! A channel is one marketplace account/logistics-method pairing. The
//! engine only sees this trait: how requests are shaped, signed, and
//! enveloped is the implementing client's concern.

use crate::Result;
use crate::models::{OfferPage, PageStrategy, PriceEntry, StockEntry};

/// Capabilities a marketplace channel must provide, plus the static
/// per-channel knobs (pagination strategy, chunk bounds, currency)
/// that keep the engine channel-agnostic.
#[allow(async_fn_in_trait)]
pub trait MarketplaceChannel {
    /// Human-readable channel name used in logs and reports.
    fn label(&self) -> &str;

    /// How this channel's offer listing signals exhaustion.
    fn page_strategy(&self) -> PageStrategy;

    /// Warehouse the channel's stock updates are scoped to, if any.
    fn warehouse_id(&self) -> Option<&str>;

    /// Currency code attached to price entries for this channel.
    fn currency(&self) -> &str;

    /// Maximum entries per stock upload request.
    fn stock_chunk_size(&self) -> usize;

    /// Maximum entries per price upload request.
    fn price_chunk_size(&self) -> usize;

    /// Fetches one page of the channel's offer listing. `cursor` is
    /// empty on the first call; afterwards it carries the previous
    /// page's `next_cursor`.
    async fn fetch_offer_page(&self, cursor: &str) -> Result<OfferPage>;

    /// Pushes one batch of stock entries. A non-success response fails
    /// the whole channel run.
    async fn push_stock_batch(&self, batch: &[StockEntry]) -> Result<()>;

    /// Pushes one batch of price entries. Same failure contract as
    /// [`push_stock_batch`](Self::push_stock_batch).
    async fn push_price_batch(&self, batch: &[PriceEntry]) -> Result<()>;
}
