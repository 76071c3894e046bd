use async_trait::async_trait;
use reqwest::Client;
use shared::domain::UserRecord;
use tracing::{error, info};
use url::Url;

pub mod error;
pub mod store;

pub use error::{FetchError, ParseIdStrategyError};
pub use store::{IdStrategy, RecordDraft, RecordStore};

pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Anything that can hand back the full user collection in one read.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<UserRecord>, FetchError>;

    fn describe(&self) -> String;
}

/// Reads the user collection from a fixed HTTP endpoint.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: Client,
    endpoint: Url,
}

impl DirectoryClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_http_client(Client::new(), endpoint)
    }

    pub fn with_http_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl RecordSource for DirectoryClient {
    async fn fetch_records(&self) -> Result<Vec<UserRecord>, FetchError> {
        let response = self.http.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Performs the single directory read. Failures are logged here; callers
/// decide whether to surface them.
pub async fn load(source: &dyn RecordSource) -> Result<Vec<UserRecord>, FetchError> {
    let endpoint = source.describe();
    match source.fetch_records().await {
        Ok(records) => {
            info!(%endpoint, count = records.len(), "loaded user directory");
            Ok(records)
        }
        Err(err) => {
            error!(%endpoint, "error fetching users: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
