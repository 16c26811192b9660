//! HTTP implementation of [`UserLookup`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::{PeerError, UserLookup};
use crate::context::CallContext;
use crate::model::User;

/// Upper bound on establishing a TCP connection, separate from the overall
/// request timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Client for the user service's `GET /users/{id}` route.
#[derive(Debug, Clone)]
pub struct UserClient {
    client: Client,
    base_url: String,
}

impl UserClient {
    /// Build a client for the user service at `base_url`.
    ///
    /// `timeout` bounds every request on its own; a caller's context may cut
    /// a call shorter but never longer. Fails only if reqwest cannot set up
    /// its TLS backend or resolver, before any connection is attempted.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    async fn request_user(&self, url: &str) -> Result<User, PeerError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PeerError::UserNotFound);
        }
        if status != StatusCode::OK {
            return Err(PeerError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| PeerError::Decode(e.to_string()))
    }
}

#[async_trait]
impl UserLookup for UserClient {
    async fn fetch_user(&self, ctx: &CallContext, id: u64) -> Result<User, PeerError> {
        let url = self.user_url(id);
        let user = ctx.run(self.request_user(&url)).await??;
        tracing::debug!(user_id = id, url = %url, "fetched user from user service");
        Ok(user)
    }
}
