use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: String,
    pub difficulties: Vec<i64>,
}

/// Identifier returned by the admin API for a freshly created campaign.
///
/// The server owns its format, so it is kept as printable text: strings are
/// stored as-is, any other JSON value as its compact JSON form, so an array
/// id prints as `[1,2]` rather than `[1, 2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignId(String);

impl CampaignId {
    /// Pulls `campaign_id` out of a response body. `null` counts as absent.
    pub fn from_response(body: &Value) -> Option<Self> {
        match body.get("campaign_id")? {
            Value::Null => None,
            Value::String(s) => Some(Self(s.clone())),
            other => Some(Self(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
