//! Application configuration loaded from environment variables.
//!
//! The feed URL is always required:
//! - `FEED_URL` — location of the dealer's CSV stock export
//!
//! Channels are configured independently and only run when fully set:
//! - `OZON_CLIENT_ID` + `OZON_API_KEY` — Ozon seller account
//! - `MARKET_TOKEN` + `MARKET_FBS_CAMPAIGN_ID` + `WAREHOUSE_FBS_ID` —
//!   Yandex.Market FBS campaign
//! - `MARKET_TOKEN` + `MARKET_DBS_CAMPAIGN_ID` + `WAREHOUSE_DBS_ID` —
//!   Yandex.Market DBS campaign
//!
//! A partially-set channel (one variable of a group without the rest)
//! is a configuration error rather than a silent skip.

use crate::{Result, RestockError};

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub feed_url: String,
    pub yandex_fbs: Option<YandexCampaignConfig>,
    pub yandex_dbs: Option<YandexCampaignConfig>,
    pub ozon: Option<OzonConfig>,
}

/// Ozon seller account credentials.
#[derive(Debug)]
pub struct OzonConfig {
    pub client_id: String,
    pub api_key: String,
}

/// One Yandex.Market campaign (logistics method) and its warehouse.
#[derive(Debug)]
pub struct YandexCampaignConfig {
    pub token: String,
    pub campaign_id: String,
    pub warehouse_id: String,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`RestockError::Config`] if `FEED_URL` is missing, if any
/// channel's variable group is only partially set, or if no channel is
/// configured at all.
pub fn fetch_config() -> Result<AppConfig> {
    let feed_url = non_empty_var("FEED_URL")
        .ok_or_else(|| RestockError::Config("FEED_URL is not set".to_string()))?;

    let ozon = ozon_config()?;
    let market_token = non_empty_var("MARKET_TOKEN");
    let yandex_fbs = yandex_campaign(
        market_token.as_deref(),
        "MARKET_FBS_CAMPAIGN_ID",
        "WAREHOUSE_FBS_ID",
    )?;
    let yandex_dbs = yandex_campaign(
        market_token.as_deref(),
        "MARKET_DBS_CAMPAIGN_ID",
        "WAREHOUSE_DBS_ID",
    )?;

    if ozon.is_none() && yandex_fbs.is_none() && yandex_dbs.is_none() {
        return Err(RestockError::Config(
            "no marketplace channel is configured".to_string(),
        ));
    }

    Ok(AppConfig {
        feed_url,
        yandex_fbs,
        yandex_dbs,
        ozon,
    })
}

fn ozon_config() -> Result<Option<OzonConfig>> {
    let client_id = non_empty_var("OZON_CLIENT_ID");
    let api_key = non_empty_var("OZON_API_KEY");
    match (client_id, api_key) {
        (Some(client_id), Some(api_key)) => Ok(Some(OzonConfig { client_id, api_key })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(RestockError::Config(
            "OZON_CLIENT_ID is set but OZON_API_KEY is missing".to_string(),
        )),
        (None, Some(_)) => Err(RestockError::Config(
            "OZON_API_KEY is set but OZON_CLIENT_ID is missing".to_string(),
        )),
    }
}

fn yandex_campaign(
    token: Option<&str>,
    campaign_var: &str,
    warehouse_var: &str,
) -> Result<Option<YandexCampaignConfig>> {
    let campaign_id = non_empty_var(campaign_var);
    let warehouse_id = non_empty_var(warehouse_var);
    match (campaign_id, warehouse_id) {
        (Some(campaign_id), Some(warehouse_id)) => {
            let token = token.ok_or_else(|| {
                RestockError::Config(format!(
                    "{campaign_var} is set but MARKET_TOKEN is missing"
                ))
            })?;
            Ok(Some(YandexCampaignConfig {
                token: token.to_string(),
                campaign_id,
                warehouse_id,
            }))
        }
        (None, None) => Ok(None),
        (Some(_), None) => Err(RestockError::Config(format!(
            "{campaign_var} is set but {warehouse_var} is missing"
        ))),
        (None, Some(_)) => Err(RestockError::Config(format!(
            "{warehouse_var} is set but {campaign_var} is missing"
        ))),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
