//! Merging the canonical feed with a channel's catalog snapshot into
//! per-offer stock and price entries.

use std::collections::BTreeSet;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::Result;
use crate::models::{CanonicalRecord, OfferId, PriceEntry, StockEntry};
use crate::normalize::{normalize_price, normalize_quantity};

/// Computes the complete stock list for a channel: one entry per known
/// offer id, exactly.
///
/// Records are scanned in feed order against a working copy of
/// `known_offer_ids`; a matched code is removed from the copy, so a
/// duplicate code later in the feed is silently ignored
/// (first-match-wins). Ids the feed never mentions get a zero-quantity
/// filler afterwards, in the set's iteration order. The caller's set
/// is never mutated.
///
/// Every entry of one pass shares a single UTC timestamp.
///
/// # Errors
///
/// Propagates [`RestockError::Format`](crate::RestockError::Format)
/// from quantity normalization.
pub fn reconcile_stocks(
    records: &[CanonicalRecord],
    known_offer_ids: &BTreeSet<OfferId>,
    warehouse_id: Option<&str>,
) -> Result<Vec<StockEntry>> {
    let mut remaining = known_offer_ids.clone();
    let updated_at = utc_timestamp();
    let mut stocks = Vec::with_capacity(known_offer_ids.len());

    for record in records {
        if remaining.remove(&record.code) {
            stocks.push(StockEntry {
                offer_id: record.code.clone(),
                quantity: normalize_quantity(&record.quantity_raw)?,
                warehouse_id: warehouse_id.map(str::to_string),
                updated_at: updated_at.clone(),
            });
        }
    }

    // Listed on the marketplace but absent from the feed: push zero so
    // the offer can't oversell.
    for offer_id in remaining {
        stocks.push(StockEntry {
            offer_id,
            quantity: 0,
            warehouse_id: warehouse_id.map(str::to_string),
            updated_at: updated_at.clone(),
        });
    }

    Ok(stocks)
}

/// Computes the price list for a channel: one entry per canonical
/// record whose code is listed, in feed order.
///
/// Sparse by design — an offer without a canonical price keeps its
/// last known price on the marketplace. Membership is tested against
/// the caller's set without removal, so duplicate codes each produce
/// an entry (unlike [`reconcile_stocks`]).
///
/// # Errors
///
/// Propagates [`RestockError::Format`](crate::RestockError::Format)
/// from price normalization.
pub fn reconcile_prices(
    records: &[CanonicalRecord],
    known_offer_ids: &BTreeSet<OfferId>,
    currency: &str,
) -> Result<Vec<PriceEntry>> {
    let mut prices = Vec::new();
    for record in records {
        if known_offer_ids.contains(&record.code) {
            prices.push(PriceEntry {
                offer_id: record.code.clone(),
                amount: normalize_price(&record.price_raw)?,
                currency: currency.to_string(),
            });
        }
    }
    Ok(prices)
}

/// Current UTC time as RFC 3339 with second precision (`...T..:..:..Z`).
fn utc_timestamp() -> String {
    let now = OffsetDateTime::now_utc()
        .replace_nanosecond(0)
        .expect("zero nanoseconds is always in range");
    now.format(&Rfc3339)
        .expect("RFC 3339 formatting of a UTC timestamp cannot fail")
}
