// src/utils/http.rs

//! HTTP client utilities and the page-fetch abstraction.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::ScraperConfig;
use crate::error::{AppError, Result};

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &ScraperConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetches page bodies by URL.
///
/// The seam between the scraping logic and the network: production code
/// goes through [`HttpFetcher`]; tests substitute an in-memory fake.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET a page and return its body, mapping non-2xx statuses into the
    /// error taxonomy.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// [`PageFetcher`] backed by a `reqwest::Client`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::transport(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, url));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::transport(format!("reading body of {url}: {e}")))
    }
}

/// Map a non-2xx status to the error taxonomy.
///
/// 403 marks a privacy-restricted page; other client errors mean the page
/// does not exist; everything else is a transport-level failure.
pub fn status_error(status: StatusCode, url: &str) -> AppError {
    match status {
        StatusCode::FORBIDDEN => AppError::private(format!("{url} answered 403")),
        s if s.is_client_error() => AppError::not_found(format!("{url} answered {s}")),
        s => AppError::transport(format!("{url} answered {s}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mapping() {
        let url = "https://example.com/x";
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, url),
            AppError::Private(_)
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, url),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, url),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, url),
            AppError::Transport(_)
        ));
    }

    #[test]
    fn test_create_client() {
        assert!(create_client(&ScraperConfig::default()).is_ok());
    }
}
