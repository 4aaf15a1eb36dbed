//! Offer catalog types: offer identifiers and listing pages.

/// The marketplace's own identifier for a listed product. Distinct
/// from the canonical feed's product code but assumed equal in string
/// form for matching purposes.
pub type OfferId = String;

/// One page of a channel's offer listing, already projected down to
/// the identifier field by the marketplace client.
#[derive(Debug, Clone, Default)]
pub struct OfferPage {
    pub offer_ids: Vec<OfferId>,
    /// Token to pass to the next page request, when the channel
    /// paginates by cursor.
    pub next_cursor: Option<String>,
    /// Declared total item count, when the channel paginates by count.
    pub total: Option<usize>,
}

/// How a channel signals that its offer listing is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStrategy {
    /// Stop when the response carries no (or an empty) next-page
    /// cursor.
    Cursor,
    /// Stop once the accumulated item count reaches the declared
    /// total.
    Total,
}
