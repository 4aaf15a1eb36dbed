use tracing::{error, info};

use restock::config::fetch_config;
use restock::feed::{CanonicalFeedSource, HttpFeedSource};
use restock::marketplaces::{Marketplace, OzonChannel, YandexChannel};
use restock::sync::sync_channels;
use restock::{Result, RestockError};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        match err {
            RestockError::Timeout(_) => error!("sync aborted, request timed out: {err}"),
            RestockError::Connection(_) => error!("sync aborted, connection failed: {err}"),
            other => error!("sync aborted: {other}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = fetch_config()?;
    let http = reqwest::Client::new();

    let records = HttpFeedSource::new(http.clone(), &config.feed_url)
        .fetch()
        .await?;

    let mut channels = Vec::new();
    if let Some(fbs) = &config.yandex_fbs {
        channels.push(Marketplace::Yandex(YandexChannel::new(
            http.clone(),
            "market-fbs",
            &fbs.token,
            &fbs.campaign_id,
            &fbs.warehouse_id,
        )));
    }
    if let Some(dbs) = &config.yandex_dbs {
        channels.push(Marketplace::Yandex(YandexChannel::new(
            http.clone(),
            "market-dbs",
            &dbs.token,
            &dbs.campaign_id,
            &dbs.warehouse_id,
        )));
    }
    if let Some(ozon) = &config.ozon {
        channels.push(Marketplace::Ozon(OzonChannel::new(
            http.clone(),
            &ozon.client_id,
            &ozon.api_key,
        )));
    }

    let reports = sync_channels(&channels, &records).await?;
    for report in &reports {
        info!(
            channel = %report.channel,
            offers = report.offers,
            stocks = report.stocks_pushed,
            prices = report.prices_pushed,
            in_stock = report.in_stock.len(),
            "sync complete"
        );
    }

    Ok(())
}
