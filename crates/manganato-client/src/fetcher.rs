use std::time::Duration;

use manganato_core::error::AppError;
use manganato_core::traits::Fetcher;
use reqwest::Client;

const USER_AGENT: &str = "manganato-api/0.1";

/// HTTP fetcher using reqwest.
///
/// Downloads raw HTML with a fixed User-Agent. No request timeout is set
/// unless one is asked for via [`with_timeout`](Self::with_timeout) or
/// `MANGANATO_FETCH_TIMEOUT_SECS`.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    timeout_secs: Option<u64>,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: None,
        })
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: Some(timeout.as_secs()),
        })
    }

    /// Build a fetcher from environment variables.
    ///
    /// - `MANGANATO_FETCH_TIMEOUT_SECS` (optional, positive integer; unset means no timeout)
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("MANGANATO_FETCH_TIMEOUT_SECS") {
            Err(_) => Self::new(),
            Ok(raw) => Self::with_timeout(Duration::from_secs(parse_timeout_secs(&raw)?)),
        }
    }
}

fn parse_timeout_secs(raw: &str) -> Result<u64, AppError> {
    let secs: u64 = raw.parse().map_err(|_| {
        AppError::ConfigError(format!(
            "Invalid MANGANATO_FETCH_TIMEOUT_SECS '{raw}': must be a positive integer"
        ))
    })?;
    if secs == 0 {
        return Err(AppError::ConfigError(
            "MANGANATO_FETCH_TIMEOUT_SECS must be at least 1".into(),
        ));
    }
    Ok(secs)
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs.unwrap_or_default())
            } else if e.is_connect() {
                AppError::NetworkError(format!("Connection failed: {e}"))
            } else {
                AppError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Request failed");
            return Err(AppError::HttpError(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::HttpError(format!("Failed to read response body: {e}")))
    }
}
