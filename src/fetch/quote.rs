use log::{debug, info};
use serde::Deserialize;

use crate::config::Config;
use crate::error::AppError;

use super::request::{get_text, http_client};
use super::FetchResult;

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    result: Option<Vec<QuoteEntry>>,
}

#[derive(Debug, Deserialize)]
struct QuoteEntry {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

/// Fetch the most recent regular-market price for the configured ticker.
pub fn fetch_latest_price(config: &Config) -> FetchResult<f64> {
    let client = http_client(&config.endpoints)?;
    let symbol = config.ticker.symbol.as_str();

    let body = get_text(
        &client,
        &config.endpoints,
        &config.endpoints.quote,
        &[("symbols", symbol)],
    )?;

    let price = parse_latest_price(&body, symbol)?;
    info!("Latest price for {}: {:.2}", symbol, price);
    Ok(price)
}

/// Extract `quoteResponse.result[0].regularMarketPrice` from a quote payload.
pub fn parse_latest_price(body: &str, ticker: &str) -> FetchResult<f64> {
    let envelope: QuoteEnvelope =
        serde_json::from_str(body).map_err(|err| AppError::parse("quote", err.to_string()))?;

    // A null result list means the same as an empty one.
    let results = envelope.quote_response.result.unwrap_or_default();
    debug!(
        "Quote payload for {} carried {} result(s)",
        ticker,
        results.len()
    );

    let first = results.first().ok_or_else(|| AppError::DataUnavailable {
        ticker: ticker.to_string(),
    })?;

    first
        .regular_market_price
        .ok_or_else(|| AppError::parse("quote", "result[0].regularMarketPrice is missing"))
}
