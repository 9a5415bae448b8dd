use log::debug;
use reqwest::{
    blocking::Client,
    header::{ACCEPT, USER_AGENT},
};

use crate::config::EndpointConfig;
use crate::error::{AppError, Context};

use super::FetchResult;

/// Build a blocking client bounded by the configured per-request timeout.
pub fn http_client(endpoints: &EndpointConfig) -> FetchResult<Client> {
    let mut builder = Client::builder().timeout(endpoints.timeout);
    if !endpoints.use_system_proxy {
        builder = builder.no_proxy();
    }

    let client = builder
        .build()
        .context("Failed to construct HTTP client")?;
    Ok(client)
}

/// Issue a single GET and return the body. Non-2xx statuses, timeouts and
/// connection failures all surface as `AppError::Transport`.
pub fn get_text(
    client: &Client,
    endpoints: &EndpointConfig,
    url: &str,
    query: &[(&str, &str)],
) -> FetchResult<String> {
    debug!("GET {} {:?}", url, query);

    let response = client
        .get(url)
        .query(query)
        .header(USER_AGENT, endpoints.user_agent.as_str())
        .header(ACCEPT, "application/json")
        .send()
        .map_err(|err| AppError::transport(url, err))?
        .error_for_status()
        .map_err(|err| AppError::transport(url, err))?;

    debug!("{} responded with {}", url, response.status());

    response.text().map_err(|err| AppError::transport(url, err))
}
