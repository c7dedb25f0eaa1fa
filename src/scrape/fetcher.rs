//! HTTP fetcher for the listing page
//!
//! Builds the shared HTTP client and performs the single GET per listing
//! page. The listing site rejects obvious bots, so the client identifies
//! itself with a desktop-browser user agent string.

use reqwest::Client;
use std::time::Duration;

use crate::FetchError;

/// Browser-like identity sent with every request
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Builds the HTTP client shared by the fetcher and the geocoder
///
/// # Arguments
///
/// * `timeout` - Per-request timeout (config `listing.request-timeout`)
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one listing page and returns its body
///
/// One attempt, no retries. Any non-success status, timeout, or transport
/// failure maps to a typed [`FetchError`]; the caller decides what a failed
/// page means for the run.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    tracing::info!("Fetching listing page: {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_request_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| classify_request_error(url, e))
}

fn classify_request_error(url: &str, source: reqwest::Error) -> FetchError {
    if source.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source,
        }
    }
}
