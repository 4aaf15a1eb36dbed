//! Per-offer stock entry produced by reconciliation.

/// The quantity to push for a single offer.
///
/// Stock reconciliation emits exactly one entry per known offer id —
/// never zero, never duplicated — so the entry set is a bijection with
/// the channel's catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntry {
    pub offer_id: String,
    pub quantity: u32,
    /// Warehouse the stock belongs to, for channels that shard by
    /// warehouse (Yandex FBS/DBS). `None` for channels that don't.
    pub warehouse_id: Option<String>,
    /// RFC 3339 UTC timestamp, second precision, shared by every entry
    /// of one reconciliation pass.
    pub updated_at: String,
}
