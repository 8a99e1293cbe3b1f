use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub admin_token: String,
    pub currency: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let backend_url =
            std::env::var("BACKEND_URL").context("Missing environment variable: BACKEND_URL")?;
        let admin_token =
            std::env::var("ADMIN_TOKEN").context("Missing environment variable: ADMIN_TOKEN")?;
        let currency = std::env::var("CURRENCY").unwrap_or_else(|_| "$".to_string());

        Ok(Self {
            backend_url,
            admin_token,
            currency,
        })
    }
}
