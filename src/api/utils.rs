use anyhow::{Context, Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
) -> Result<Value> {
    let url = format!("{}/{}?{}", base_url, endpoint, params);
    debug!(%url, "GET");

    let res = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", endpoint))?;
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        // Unknown symbols come back as 404 with an error payload worth parsing
        if status == StatusCode::NOT_FOUND {
            if let Ok(data) = serde_json::from_str::<Value>(&text) {
                return Ok(data);
            }
        }
        return Err(Error::msg(format!("Request failed: {}", status)));
    }

    serde_json::from_str::<Value>(&text)
        .with_context(|| format!("Unexpected response from {}", endpoint))
}

/// Entries that fail to deserialize are skipped rather than failing the batch.
pub fn parse_response_array<T>(data: Value) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        Value::Null => Ok(Vec::new()),
        _ => Err(Error::msg("Unexpected API response format: not an array")),
    }
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .with_context(|| error_msg.to_string()),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}
