use crate::error::ConfigError;
use crate::models::NewCampaign;
use crate::utils::parse_difficulties;
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_CAMPAIGN_URL: &str = "http://localhost:7000/admin/api/v1/campaign/add";
pub const DEFAULT_CAMPAIGN_NAME: &str = "test_1";
pub const DEFAULT_DIFFICULTIES: &[i64] = &[
    50000, 100000, 150000, 200000, 250000, 300000, 350000, 400000, 450000,
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub campaign_url: String,
    pub cookie: String,
    pub campaign_name: String,
    pub difficulties: Vec<i64>,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cookie = lookup("COOKIE").ok_or(ConfigError::Missing("COOKIE"))?;

        let campaign_url =
            lookup("CAMPAIGN_URL").unwrap_or_else(|| DEFAULT_CAMPAIGN_URL.to_string());
        let campaign_name =
            lookup("CAMPAIGN_NAME").unwrap_or_else(|| DEFAULT_CAMPAIGN_NAME.to_string());

        let difficulties = match lookup("CAMPAIGN_DIFFICULTIES") {
            Some(raw) => parse_difficulties(&raw)?,
            None => DEFAULT_DIFFICULTIES.to_vec(),
        };

        Ok(Self {
            campaign_url,
            cookie,
            campaign_name,
            difficulties,
        })
    }

    pub fn campaign(&self) -> NewCampaign {
        NewCampaign {
            name: self.campaign_name.clone(),
            difficulties: self.difficulties.clone(),
        }
    }
}
