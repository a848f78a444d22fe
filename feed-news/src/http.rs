//! Shared HTTP plumbing for the provider clients

use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::NewsError;

const CLIENT_NAME: &str = "newsfeed/0.1 (+https://github.com/newsfeed)";

/// Join `base` and `endpoint` and append the query parameters
pub(crate) fn endpoint_url(
    base: &str,
    endpoint: &str,
    params: &[(&str, &str)],
) -> Result<Url, NewsError> {
    let raw = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );
    Url::parse_with_params(&raw, params)
        .map_err(|e| NewsError::InvalidConfig(format!("Bad provider URL {}: {}", raw, e)))
}

/// Issue one GET and decode the JSON body; any non-2xx status is an error
///
/// No client-side timeout is set here; callers bound the whole call.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
) -> Result<T, NewsError> {
    // The query string carries the API key, keep it out of logs and errors
    debug!("GET {}{}", url.origin().ascii_serialization(), url.path());

    let response = client
        .get(url)
        .header(USER_AGENT, CLIENT_NAME)
        .send()
        .await
        .map_err(|e| NewsError::RequestFailed(e.without_url().to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(NewsError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| NewsError::ParseError(e.without_url().to_string()))
}
