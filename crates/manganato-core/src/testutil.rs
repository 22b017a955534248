//! Test utilities: a mock [`Fetcher`] serving canned HTML.
//!
//! Uses `Arc<Mutex<_>>` for interior mutability so clones share the queue
//! and tests can assert on the URLs that were requested.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::traits::Fetcher;

/// Mock fetcher that returns queued responses and records every URL.
#[derive(Clone, Default)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns an empty HTML document.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(html: &str) -> Self {
        Self::with_responses(vec![Ok(html.to_string())])
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// URLs fetched so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(url.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body></body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}
