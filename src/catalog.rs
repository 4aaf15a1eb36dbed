//! Offer catalog assembly: paginating a channel's listing endpoint
//! into the complete set of offer identifiers.

use std::collections::BTreeSet;

use tracing::debug;

use crate::channel::MarketplaceChannel;
use crate::models::{OfferId, PageStrategy};
use crate::{Result, RestockError};

/// Walks the channel's offer listing to exhaustion and returns every
/// listed offer id.
///
/// Termination follows the channel's [`PageStrategy`]: cursor-paginated
/// channels stop when the response carries no next-page token,
/// count-paginated channels stop once the accumulated item count
/// reaches the declared total. An empty page always terminates, so an
/// empty catalog yields an empty set rather than an error.
///
/// # Errors
///
/// A failed page fetch is propagated, not retried: timeouts and
/// connectivity failures keep their category, anything else is
/// reported as [`RestockError::Pagination`]. A count-paginated page
/// that declares no total is also a pagination error.
pub async fn fetch_offer_ids<C: MarketplaceChannel>(channel: &C) -> Result<BTreeSet<OfferId>> {
    let strategy = channel.page_strategy();
    let mut cursor = String::new();
    let mut offer_ids: Vec<OfferId> = Vec::new();

    loop {
        let page = channel
            .fetch_offer_page(&cursor)
            .await
            .map_err(|err| match err {
                e @ (RestockError::Timeout(_) | RestockError::Connection(_)) => e,
                other => RestockError::Pagination(format!(
                    "offer page fetch failed for {}: {other}",
                    channel.label()
                )),
            })?;

        let fetched = page.offer_ids.len();
        offer_ids.extend(page.offer_ids);
        debug!(
            channel = channel.label(),
            page_items = fetched,
            accumulated = offer_ids.len(),
            "fetched offer page"
        );

        // A page with nothing on it cannot make progress under either
        // strategy.
        if fetched == 0 {
            break;
        }

        match strategy {
            PageStrategy::Cursor => match page.next_cursor {
                Some(next) if !next.is_empty() => cursor = next,
                _ => break,
            },
            PageStrategy::Total => {
                let total = page.total.ok_or_else(|| {
                    RestockError::Pagination(format!(
                        "{} declared no total on a count-paginated page",
                        channel.label()
                    ))
                })?;
                if offer_ids.len() >= total {
                    break;
                }
                cursor = page.next_cursor.unwrap_or_default();
            }
        }
    }

    Ok(offer_ids.into_iter().collect())
}
