//! Per-offer price entry produced by reconciliation.

/// The price to push for a single offer, in the smallest currency unit
/// (whole rubles for the supported channels).
///
/// Unlike stock entries, price entries are sparse: an offer with no
/// matching canonical record gets no entry and keeps its last known
/// price on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceEntry {
    pub offer_id: String,
    pub amount: u64,
    pub currency: String,
}
