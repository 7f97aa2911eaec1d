//! A store-backed handler that gives up when its request goes away.
//!
//! Every request carries a `CancellationToken`. The handler passes it down
//! to the store, and also cancels it if the handler future itself is
//! dropped, which is what hyper does when a client disconnects mid-request.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("fetch cancelled before the store answered")]
    Cancelled,

    #[error("store failed: {0}")]
    Store(String),
}

#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Must return `FetchError::Cancelled` promptly once `token` fires.
    async fn fetch(&self, token: CancellationToken) -> Result<String, FetchError>;
}

pub struct StoreServer<S> {
    store: Arc<S>,
}

impl<S> Clone for StoreServer<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> StoreServer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Writes whatever the store fetches as the response body. Nothing is
    /// written when the fetch is cancelled.
    pub async fn handle(&self, token: CancellationToken) -> Result<Response<Full<Bytes>>, FetchError> {
        let guard = token.clone().drop_guard();
        let fetched = self.store.fetch(token).await;
        guard.disarm();

        let data = fetched.inspect_err(|err| debug!(error = %err, "no response written"))?;
        let mut response = Response::new(Full::new(Bytes::from(data)));
        *response.status_mut() = StatusCode::OK;
        Ok(response)
    }
}
