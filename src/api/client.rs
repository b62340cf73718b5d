use crate::core::error::BackendError;
use crate::models::order::{MockPayment, NewOrder, Order};
use crate::models::post::{NewPost, Post};
use crate::models::user::{NewUser, User};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USERS: &str = "/api/users";
const POSTS: &str = "/api/posts";
const ORDERS: &str = "/api/orders";
const MOCK_COMPLETE: &str = "/api/payments/mock-complete";

/// HTTP client for the chai backend.
///
/// Every call is a single request/response round trip. Nothing is retried;
/// callers decide what a failure means for their state.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BackendError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Look a user up by handle.
    ///
    /// Any non-success status counts as a miss and yields `Ok(None)`.
    pub async fn find_user(&self, handle: &str) -> Result<Option<User>, BackendError> {
        const ENDPOINT: &str = "GET /api/users";

        let response = self
            .client
            .get(self.url(USERS))
            .query(&[("handle", handle)])
            .send()
            .await
            .map_err(|source| BackendError::Transport { endpoint: ENDPOINT, source })?;

        if !response.status().is_success() {
            debug!(handle = %handle, status = %response.status(), "User lookup missed");
            return Ok(None);
        }

        decode(ENDPOINT, response).await.map(Some)
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, BackendError> {
        const ENDPOINT: &str = "POST /api/users";

        let response = self
            .client
            .post(self.url(USERS))
            .json(user)
            .send()
            .await
            .map_err(|source| BackendError::Transport { endpoint: ENDPOINT, source })?;

        decode(ENDPOINT, checked(ENDPOINT, response)?).await
    }

    /// Fetch the full feed in backend order
    pub async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        const ENDPOINT: &str = "GET /api/posts";

        let response = self
            .client
            .get(self.url(POSTS))
            .send()
            .await
            .map_err(|source| BackendError::Transport { endpoint: ENDPOINT, source })?;

        decode(ENDPOINT, checked(ENDPOINT, response)?).await
    }

    /// Submit a post. Only the status matters; the body is not read.
    pub async fn create_post(&self, post: &NewPost) -> Result<(), BackendError> {
        const ENDPOINT: &str = "POST /api/posts";

        let response = self
            .client
            .post(self.url(POSTS))
            .json(post)
            .send()
            .await
            .map_err(|source| BackendError::Transport { endpoint: ENDPOINT, source })?;

        checked(ENDPOINT, response)?;
        Ok(())
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, BackendError> {
        const ENDPOINT: &str = "POST /api/orders";

        let response = self
            .client
            .post(self.url(ORDERS))
            .json(order)
            .send()
            .await
            .map_err(|source| BackendError::Transport { endpoint: ENDPOINT, source })?;

        decode(ENDPOINT, checked(ENDPOINT, response)?).await
    }

    /// Ask the payment test double to settle an order
    pub async fn complete_mock_payment(&self, payment: &MockPayment) -> Result<Order, BackendError> {
        const ENDPOINT: &str = "POST /api/payments/mock-complete";

        let response = self
            .client
            .post(self.url(MOCK_COMPLETE))
            .json(payment)
            .send()
            .await
            .map_err(|source| BackendError::Transport { endpoint: ENDPOINT, source })?;

        decode(ENDPOINT, checked(ENDPOINT, response)?).await
    }
}

fn checked(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status { endpoint, status });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<T, BackendError> {
    response
        .json::<T>()
        .await
        .map_err(|source| BackendError::Decode { endpoint, source })
}
