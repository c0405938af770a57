//! # HTTP Layer
//!
//! Typed request issuing against the remote REST API.
//!
//! ## Request Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ApiClient Round Trip                               │
//! │                                                                         │
//! │  {method, path, query?, body?}                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  base_url/path?query ── reqwest ──► server                              │
//! │       │                                                                 │
//! │       ├── transport failure ────────► ClientError::Connection           │
//! │       ├── 2xx + decodable body ─────► T                                 │
//! │       ├── 2xx + wrong body ─────────► ClientError::Decode               │
//! │       └── non-2xx ──────────────────► ClientError::Server               │
//! │                                       (envelope {message, status,       │
//! │                                        timestamp} when present)         │
//! │                                                                         │
//! │  No retries, no caching, no cancellation: callers observe a loading     │
//! │  flag and recovery is always "let the user retry".                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, ErrorResponse};

// =============================================================================
// Api Client
// =============================================================================

/// Issues typed HTTP requests against the configured base URL.
///
/// Cheap to clone: the underlying `reqwest::Client` is an `Arc` around a
/// connection pool, so every service shares one pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client from configuration. Rejects an unparseable base URL
    /// up front rather than on the first request.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.api_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.api_url.clone(),
            reason: e.to_string(),
        })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(ApiClient { http, base_url })
    }

    /// GET a resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(%path, "GET");
        let response = self.http.get(self.endpoint(path)).send().await?;
        Self::decode(response).await
    }

    /// GET a resource with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        debug!(%path, ?query, "GET");
        let response = self
            .http
            .get(self.endpoint(path))
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST a JSON body, decoding the created resource.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%path, "POST");
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// PUT a JSON body, decoding the updated resource.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%path, "PUT");
        let response = self.http.put(self.endpoint(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// PATCH with an empty JSON body (state-toggle endpoints take none).
    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(%path, "PATCH");
        let response = self
            .http
            .patch(self.endpoint(path))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// DELETE a resource; the server answers with an empty body.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        debug!(%path, "DELETE");
        let response = self.http.delete(self.endpoint(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::server(
            status,
            serde_json::from_str::<ErrorResponse>(&body).ok(),
        ))
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Splits a response into the success value or the server's error
    /// envelope. The envelope is best-effort: a body that is not the
    /// standard shape degrades to the status' canonical reason.
    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::server(
                status,
                serde_json::from_str::<ErrorResponse>(&body).ok(),
            ))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
