//! HTTP client for network-based API calls
//!
//! Every request goes to `<base>/<path>`, always carries
//! `Content-Type: application/json`, and carries `Authorization: Bearer`
//! only when the [`AuthContext`] holds a token. One attempt per call.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::AuthContext;

/// Error body shape the backend uses on failures
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    /// Text substituted when an error carries no usable message
    fn fallback_message(&self) -> &str;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    auth: AuthContext,
    fallback_message: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig, auth: AuthContext) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
            fallback_message: config.fallback_message.clone(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(method = %method, path, "API request");
        let mut req = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.auth.token() {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        req
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await.map_err(|source| ClientError::Network {
            message: self.fallback_message.clone(),
            source,
        })?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            // A body that cannot be read is treated like one that cannot be parsed
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| self.fallback_message.clone());
            tracing::debug!(status = status.as_u16(), %message, "API error response");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.invalid_response(e))?;
        // 204 and friends: decode as an empty envelope
        let body: &[u8] = if bytes.is_empty() { b"{}" } else { &bytes };
        serde_json::from_slice(body).map_err(|e| self.invalid_response(e))
    }

    fn invalid_response(&self, detail: impl std::fmt::Display) -> ClientError {
        ClientError::InvalidResponse {
            message: self.fallback_message.clone(),
            detail: detail.to_string(),
        }
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::GET, path).query(query))
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::PATCH, path).json(body))
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    fn fallback_message(&self) -> &str {
        &self.fallback_message
    }
}
