use std::time::Duration;

use crate::error::{AppError, Result};

use super::Config;

/// Sanity-check the compiled-in configuration before any request goes out.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    if config.ticker.symbol.trim().is_empty() {
        issues.push("ticker.symbol must not be empty".to_string());
    }
    if config.ticker.symbol.chars().any(char::is_whitespace) {
        issues.push(format!(
            "ticker.symbol `{}` must not contain whitespace",
            config.ticker.symbol
        ));
    }

    validate_endpoint("endpoints.quote", &config.endpoints.quote, &mut issues);
    validate_endpoint("endpoints.chart", &config.endpoints.chart, &mut issues);

    if config.endpoints.timeout == Duration::ZERO {
        issues.push("endpoints.timeout must be greater than zero".to_string());
    }

    if config.chart_range.range.trim().is_empty() {
        issues.push("chart_range.range must not be empty".to_string());
    }
    if config.chart_range.interval.trim().is_empty() {
        issues.push("chart_range.interval must not be empty".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::Config(issues.join("; ")))
    }
}

fn validate_endpoint(field: &str, endpoint: &str, issues: &mut Vec<String>) {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        issues.push(format!("{field} must not be empty"));
    } else if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        issues.push(format!("{field} must be an http(s) URL, got `{trimmed}`"));
    }
}
