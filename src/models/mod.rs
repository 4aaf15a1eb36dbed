//! Core data types shared across the reconciliation pipeline.
//!
//! Everything here is created fresh per invocation and discarded after
//! dispatch; no entity persists across runs.

pub mod offer;
pub mod price;
pub mod stock;

pub use offer::{OfferId, OfferPage, PageStrategy};
pub use price::PriceEntry;
pub use stock::StockEntry;

/// One row of the canonical dealer feed, keyed by product code.
///
/// Quantity and price are kept as the raw feed tokens; the shorthand
/// values (`">10"`, thousands separators, currency labels) are only
/// interpreted by the normalizers at reconciliation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    pub code: String,
    pub quantity_raw: String,
    pub price_raw: String,
}

impl CanonicalRecord {
    pub fn new(code: &str, quantity_raw: &str, price_raw: &str) -> Self {
        Self {
            code: code.to_string(),
            quantity_raw: quantity_raw.to_string(),
            price_raw: price_raw.to_string(),
        }
    }
}
