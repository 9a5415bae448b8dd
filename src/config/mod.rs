use std::time::Duration;

pub mod validator;

pub use validator::validate_config;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Range and sampling interval requested from the chart endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRange {
    pub range: String,
    pub interval: String,
}

impl Default for ChartRange {
    fn default() -> Self {
        Self {
            range: "1mo".to_string(),
            interval: "1d".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub quote: String,
    pub chart: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Ask the chart endpoint for dividend/split annotations. They are not consumed.
    pub include_events: bool,
    /// Honor `HTTP(S)_PROXY` from the environment when connecting.
    pub use_system_proxy: bool,
}

#[derive(Debug, Clone)]
pub struct TickerConfig {
    pub symbol: String,
    pub display_name: String,
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub ticker: TickerConfig,
    pub endpoints: EndpointConfig,
    pub chart_range: ChartRange,
}

impl Config {
    pub fn builtin() -> Self {
        Config {
            ticker: TickerConfig {
                symbol: "2330.TW".to_string(),
                display_name: "TSMC".to_string(),
                currency: "TWD".to_string(),
            },
            endpoints: EndpointConfig {
                quote: "https://query1.finance.yahoo.com/v7/finance/quote".to_string(),
                chart: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
                user_agent: USER_AGENT.to_string(),
                timeout: Duration::from_secs(10),
                include_events: true,
                use_system_proxy: true,
            },
            chart_range: ChartRange::default(),
        }
    }

    /// Title shown above the candlestick chart.
    pub fn chart_title(&self) -> String {
        format!(
            "{} ({}) daily candles, last {}",
            self.ticker.display_name, self.ticker.symbol, self.chart_range.range
        )
    }

    pub fn price_axis_label(&self) -> String {
        format!("Price ({})", self.ticker.currency)
    }
}
