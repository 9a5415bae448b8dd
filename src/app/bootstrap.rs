use log::info;

use crate::config::{validate_config, Config};
use crate::error::Result;
use crate::fetch::{fetch_chart_data, fetch_latest_price};
use crate::ui::show_candles;

/// Entry point used by `main`: print the latest quote, then chart the last month.
pub fn run() -> Result<()> {
    let config = Config::builtin();
    validate_config(&config)?;

    let price = fetch_latest_price(&config)?;
    println!("{}", price_line(&config, price));

    let candles = fetch_chart_data(&config, &config.chart_range)?;
    info!("Rendering {} candle(s)", candles.len());
    show_candles(&config, &candles)
}

pub fn price_line(config: &Config, price: f64) -> String {
    format!(
        "{} latest price: {:.2} {}",
        config.ticker.display_name, price, config.ticker.currency
    )
}
