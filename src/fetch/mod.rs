use crate::error::Result;

pub mod history;
pub mod quote;
pub mod request;

#[cfg(test)]
pub(crate) mod testing;

pub use history::{candles_from_chart, fetch_chart_data, Candle, Direction};
pub use quote::{fetch_latest_price, parse_latest_price};

pub type FetchResult<T> = Result<T>;
