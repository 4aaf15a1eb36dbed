//! Canonical feed ingestion.
//!
//! The dealer publishes its stock sheet as a CSV export (usually
//! gzip-compressed) with the columns `Код`, `Количество`, `Цена`.
//! Column positions are looked up from the header row, so extra
//! columns and reordering are tolerated.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use flate2::read::GzDecoder;
use tracing::info;

use crate::models::CanonicalRecord;
use crate::{Result, RestockError};

const CODE_COLUMN: &str = "Код";
const QUANTITY_COLUMN: &str = "Количество";
const PRICE_COLUMN: &str = "Цена";

/// Magic bytes of a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Supplies the canonical records a sync run reconciles against.
#[allow(async_fn_in_trait)]
pub trait CanonicalFeedSource {
    async fn fetch(&self) -> Result<Vec<CanonicalRecord>>;
}

/// Feed source that downloads the dealer's CSV export over HTTP.
pub struct HttpFeedSource {
    http: reqwest::Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(http: reqwest::Client, url: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
        }
    }
}

impl CanonicalFeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<Vec<CanonicalRecord>> {
        let response = self.http.get(&self.url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let records = parse_feed(&body[..])?;
        info!(url = %self.url, records = records.len(), "downloaded canonical feed");
        Ok(records)
    }
}

/// Parses a feed body into canonical records, gunzipping first when
/// the bytes carry the gzip magic. Rows with an empty product code are
/// skipped.
///
/// # Errors
///
/// Returns [`RestockError::Feed`] when a required column is missing
/// from the header row, or the underlying I/O / CSV error otherwise.
pub fn parse_feed(body: &[u8]) -> Result<Vec<CanonicalRecord>> {
    if body.starts_with(&GZIP_MAGIC) {
        let mut decoded = Vec::new();
        GzDecoder::new(body).read_to_end(&mut decoded)?;
        parse_feed_csv(&decoded[..])
    } else {
        parse_feed_csv(body)
    }
}

fn parse_feed_csv<R: Read>(reader: R) -> Result<Vec<CanonicalRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = FeedColumns::from_headers(&headers)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let code = row.get(columns.code).unwrap_or_default();
        if code.is_empty() {
            continue;
        }
        records.push(CanonicalRecord::new(
            code,
            row.get(columns.quantity).unwrap_or_default(),
            row.get(columns.price).unwrap_or_default(),
        ));
    }
    Ok(records)
}

struct FeedColumns {
    code: usize,
    quantity: usize,
    price: usize,
}

impl FeedColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let lookup = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| RestockError::Feed(format!("missing feed column: {name}")))
        };

        Ok(Self {
            code: lookup(CODE_COLUMN)?,
            quantity: lookup(QUANTITY_COLUMN)?,
            price: lookup(PRICE_COLUMN)?,
        })
    }
}
