pub mod config;
pub mod error;
pub mod http_handler;
pub mod logging;
pub mod models;
pub mod utils;

use crate::config::AppConfig;
use crate::error::{Error, SubmitError};
use crate::http_handler::{build_http_client, submit_campaign};
use crate::models::CampaignId;
use std::io::Write;

/// Creates the configured campaign and writes `campaign ID: <id>` to `out`.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<CampaignId, Error> {
    let http_client = build_http_client().map_err(|source| SubmitError::Request {
        endpoint: config.campaign_url.clone(),
        source,
    })?;

    let campaign_id = submit_campaign(
        &http_client,
        &config.campaign_url,
        &config.cookie,
        &config.campaign(),
    )?;

    writeln!(out, "campaign ID: {}", campaign_id)?;
    Ok(campaign_id)
}
