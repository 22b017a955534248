use thiserror::Error;

/// Application-wide error types for the manganato scraper.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed (non-2xx status or unreadable body).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// A page parameter that is not an integer.
    #[error("Invalid page number: {0}")]
    InvalidPage(String),

    /// The fetched document did not have the shape the extraction rules expect.
    #[error("Scrape error: {0}")]
    ScrapeError(String),

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if this error happened while fetching a page, as opposed to
    /// while interpreting one.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_) | AppError::NetworkError(_) | AppError::Timeout(_)
        )
    }
}
