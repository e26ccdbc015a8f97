//! Client for the companion users-api service

use async_trait::async_trait;
use std::time::Duration;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};

/// Default bound on a users-api call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of the user count shown by `GET /products/with-users`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersDirectory: Send + Sync {
    /// Number of users; a response that is not a JSON array counts as 0
    async fn count_users(&self) -> ProductResult<usize>;
}

/// HTTP client for `GET {base_url}/users`.
///
/// The response body is decoded as JSON whatever the status code. Transport
/// failures, timeouts and non-JSON bodies are reported as
/// [`ProductError::Upstream`]. There are no retries.
#[derive(Clone)]
pub struct HttpUsersClient {
    client: reqwest::Client,
    users_url: String,
}

impl HttpUsersClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            users_url: format!("{}/users", base_url.trim_end_matches('/')),
        })
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

#[async_trait]
impl UsersDirectory for HttpUsersClient {
    #[instrument(skip(self), fields(url = %self.users_url))]
    async fn count_users(&self) -> ProductResult<usize> {
        let response = self
            .client
            .get(&self.users_url)
            .send()
            .await
            .map_err(|e| ProductError::Upstream(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProductError::Upstream(e.to_string()))?;

        Ok(body.as_array().map_or(0, Vec::len))
    }
}

/// Fixed-count directory, for tests and local runs without users-api
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticUsersDirectory(pub usize);

#[async_trait]
impl UsersDirectory for StaticUsersDirectory {
    async fn count_users(&self) -> ProductResult<usize> {
        Ok(self.0)
    }
}
