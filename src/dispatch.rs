//! Chunked batch dispatch: driving an upload capability over
//! reconciled entries, one size-bounded batch at a time.

use tracing::debug;

use crate::Result;
use crate::channel::MarketplaceChannel;
use crate::chunk::chunk;
use crate::models::{PriceEntry, StockEntry};

/// Invokes `upload` once per chunk of `entries`, strictly sequentially
/// and in order, and returns the number of batches uploaded.
///
/// No concurrency and no retry: the first failed upload propagates
/// immediately and no further chunks are sent. Batches already
/// accepted by the marketplace are not rolled back.
///
/// # Errors
///
/// Returns [`RestockError::Config`](crate::RestockError::Config) for a
/// zero `chunk_size`, otherwise whatever `upload` fails with.
pub async fn dispatch<E, F>(entries: &[E], chunk_size: usize, mut upload: F) -> Result<usize>
where
    F: AsyncFnMut(&[E]) -> Result<()>,
{
    let mut batches = 0;
    for batch in chunk(entries, chunk_size)? {
        upload(batch).await?;
        batches += 1;
        debug!(batch = batches, entries = batch.len(), "uploaded batch");
    }
    Ok(batches)
}

/// Dispatches stock entries through the channel's stock upload, using
/// its stock chunk bound.
pub async fn dispatch_stocks<C: MarketplaceChannel>(
    channel: &C,
    entries: &[StockEntry],
) -> Result<usize> {
    dispatch(entries, channel.stock_chunk_size(), async |batch| {
        channel.push_stock_batch(batch).await
    })
    .await
}

/// Dispatches price entries through the channel's price upload, using
/// its price chunk bound.
pub async fn dispatch_prices<C: MarketplaceChannel>(
    channel: &C,
    entries: &[PriceEntry],
) -> Result<usize> {
    dispatch(entries, channel.price_chunk_size(), async |batch| {
        channel.push_price_batch(batch).await
    })
    .await
}
