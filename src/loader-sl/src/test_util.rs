//! Shared test fetcher for the unit tests in this crate.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use core_sl::{FetchResponse, Fetcher};

/// In-memory fetcher keyed by exact URL; unknown URLs answer 404. Records
/// every request so tests can assert on fetch counts and ordering.
pub struct MockFetcher {
    responses: HashMap<String, (u16, String)>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new(responses: &[(&str, u16, &str)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(url, status, body)| (url.to_string(), (*status, body.to_string())))
                .collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> core_sl::Result<FetchResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        let (status, body) = self
            .responses
            .get(url)
            .cloned()
            .unwrap_or((404, String::new()));
        Ok(FetchResponse { status, body })
    }
}
