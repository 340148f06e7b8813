use crate::error::SubmitError;
use crate::models::{CampaignId, NewCampaign};
use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use std::time::Duration;
use tracing::{error, info};

/// Blocking client with no request timeout; a stalled server stalls the call.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(None::<Duration>).build()
}

/// Sends one `POST` creating `campaign` and returns the id the server assigned.
///
/// The response status is not checked: any body that is JSON with a
/// `campaign_id` counts as success. There is exactly one attempt.
pub fn submit_campaign(
    http_client: &Client,
    endpoint: &str,
    cookie: &str,
    campaign: &NewCampaign,
) -> Result<CampaignId, SubmitError> {
    info!(
        "Submitting campaign '{}' with {} difficulties to {}",
        campaign.name,
        campaign.difficulties.len(),
        endpoint
    );

    let request_error = |source: reqwest::Error| SubmitError::Request {
        endpoint: endpoint.to_string(),
        source,
    };

    let resp = http_client
        .post(endpoint)
        .header(COOKIE, cookie)
        .json(campaign)
        .send()
        .map_err(|e| {
            error!("Failed to send campaign request to {}: {:?}", endpoint, e);
            request_error(e)
        })?;

    let status = resp.status();
    info!("Received response from {}. Status: {}", endpoint, status);

    let body = resp.bytes().map_err(|e| {
        error!("Failed to read response body from {}: {:?}", endpoint, e);
        request_error(e)
    })?;

    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|source| {
        error!("Response body from {} is not JSON: {}", endpoint, source);
        SubmitError::MalformedResponse { status, source }
    })?;

    CampaignId::from_response(&value).ok_or_else(|| {
        error!("Response from {} has no campaign_id: {}", endpoint, value);
        SubmitError::MissingCampaignId { status }
    })
}
