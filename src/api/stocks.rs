use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::{
    api::{
        QuoteSource,
        utils::{make_request, parse_response_array},
    },
    models::Quote,
};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const STOCKS_ENDPOINT: &str = "api/stocks";

#[derive(Clone, Debug)]
pub struct StocksApi {
    client: Client,
    base_url: String,
}

impl StocksApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_quotes(&self) -> Result<Vec<Quote>> {
        let res = make_request(&self.client, &self.base_url, STOCKS_ENDPOINT).await?;
        parse_response_array::<Quote>(res, "Failed to parse stock quote")
    }
}

#[async_trait]
impl QuoteSource for StocksApi {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        self.get_quotes().await
    }
}
