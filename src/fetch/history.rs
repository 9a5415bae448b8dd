use chrono::{DateTime, Local};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use crate::config::{ChartRange, Config};
use crate::error::AppError;
use crate::utils::time::local_from_epoch;

use super::request::{get_text, http_client};
use super::FetchResult;

/// One trading period. Only built when every source field was present.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub timestamp: DateTime<Local>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Candle {
    /// A flat candle (`close == open`) counts as up.
    pub fn direction(&self) -> Direction {
        if self.close >= self.open {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Option<Vec<Option<i64>>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteSeries>,
}

#[derive(Debug, Deserialize)]
struct QuoteSeries {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
}

/// Fetch daily OHLC history for the configured ticker over `range`.
pub fn fetch_chart_data(config: &Config, range: &ChartRange) -> FetchResult<Vec<Candle>> {
    let client = http_client(&config.endpoints)?;
    let symbol = config.ticker.symbol.as_str();
    let url = format!(
        "{}/{}",
        config.endpoints.chart.trim_end_matches('/'),
        symbol
    );

    let mut query = vec![
        ("range", range.range.as_str()),
        ("interval", range.interval.as_str()),
    ];
    if config.endpoints.include_events {
        query.push(("events", "div,splits"));
    }

    let body = get_text(&client, &config.endpoints, &url, &query)?;
    let candles = candles_from_chart(&body)?;

    info!(
        "Fetched {} candle(s) for {} ({} / {})",
        candles.len(),
        symbol,
        range.range,
        range.interval
    );
    Ok(candles)
}

/// Turn a chart payload into candles, skipping any index with a null field.
pub fn candles_from_chart(body: &str) -> FetchResult<Vec<Candle>> {
    let envelope: ChartEnvelope =
        serde_json::from_str(body).map_err(|err| AppError::parse("chart", err.to_string()))?;

    let results = match envelope.chart.result {
        Some(results) => results,
        None => {
            let detail = envelope
                .chart
                .error
                .filter(|err| !err.is_null())
                .map(|err| err.to_string())
                .unwrap_or_else(|| "no error detail".to_string());
            return Err(AppError::parse(
                "chart",
                format!("chart.result is missing ({detail})"),
            ));
        }
    };

    let result = results
        .first()
        .ok_or_else(|| AppError::parse("chart", "chart.result is empty"))?;

    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| AppError::parse("chart", "chart.result[0].indicators.quote is empty"))?;

    let timestamps = result.timestamp.as_deref().unwrap_or_default();

    Ok(zip_candles(timestamps, quote))
}

fn zip_candles(timestamps: &[Option<i64>], quote: &QuoteSeries) -> Vec<Candle> {
    timestamps
        .iter()
        .zip(&quote.open)
        .zip(&quote.high)
        .zip(&quote.low)
        .zip(&quote.close)
        .enumerate()
        .filter_map(|(idx, ((((ts, open), high), low), close))| {
            let (Some(ts), Some(open), Some(high), Some(low), Some(close)) =
                (*ts, *open, *high, *low, *close)
            else {
                debug!("Skipping incomplete sample at index {}", idx);
                return None;
            };

            let Some(timestamp) = local_from_epoch(ts) else {
                debug!("Skipping sample at index {} with invalid epoch {}", idx, ts);
                return None;
            };

            Some(Candle {
                timestamp,
                open,
                high,
                low,
                close,
            })
        })
        .collect()
}
