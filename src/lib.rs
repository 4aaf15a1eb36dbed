//! Marketplace stock and price reconciliation engine.
//!
//! Keeps the listings of one or more marketplace channels (Ozon,
//! Yandex.Market) synchronized with a canonical dealer feed: fetches
//! the full offer catalog per channel, reconciles the feed against it
//! into per-offer stock and price entries, and pushes the result in
//! size-bounded batches.

pub mod catalog;
pub mod channel;
pub mod chunk;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod feed;
pub mod marketplaces;
pub mod models;
pub mod normalize;
pub mod reconcile;
pub mod sync;

pub use error::{RestockError, Result};
