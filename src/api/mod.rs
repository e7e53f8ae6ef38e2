pub mod stocks;
pub mod utils;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Quote;

pub use stocks::StocksApi;

/// Anything that can produce the current quote list for one refresh cycle.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>>;
}
