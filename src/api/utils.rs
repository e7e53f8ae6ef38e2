use anyhow::{Context, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub async fn make_request(client: &Client, base_url: &str, endpoint: &str) -> Result<Value> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
    let res = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)
        .with_context(|| format!("Response from {} is not valid JSON", url))?;

    Ok(data)
}

/// Every element must parse; a single bad item rejects the whole response.
pub fn parse_response_array<T>(data: Value, error_msg: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                let symbol = item
                    .get("symbol")
                    .and_then(Value::as_str)
                    .unwrap_or("?")
                    .to_string();
                serde_json::from_value(item)
                    .with_context(|| format!("{} (item {}, symbol {})", error_msg, idx, symbol))
            })
            .collect(),
        _ => Err(Error::msg("Unexpected API response format: not an array")),
    }
}
