//! HTTP access to the REST backend.
//!
//! One attempt per call, no retries. Every failure is normalized into an
//! [`ApiError`] so pages only ever deal with `{message, status_code}`.

mod admin;
mod auth;
mod chat;
mod ledger;

use std::rc::Rc;

use finanzas_core::config::ApiConfig;
use finanzas_core::credentials::{CookieCredentials, CredentialProvider, StoredTokenCredentials};
use finanzas_core::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::storage::LocalTokenStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

fn api_config() -> ApiConfig {
    ApiConfig::from_env_value(option_env!("FINANZAS_API_URL"))
}

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    credentials: Rc<dyn CredentialProvider>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && Rc::ptr_eq(&self.credentials, &other.credentials)
    }
}

impl ApiClient {
    /// Session cookies; what every page except the assistant uses.
    pub fn with_cookies() -> Self {
        Self {
            config: api_config(),
            credentials: Rc::new(CookieCredentials),
        }
    }

    /// Bearer token from local storage.
    pub fn with_stored_token() -> Self {
        Self {
            config: api_config(),
            credentials: Rc::new(StoredTokenCredentials::new(LocalTokenStore)),
        }
    }

    fn builder(&self, verb: Verb, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        let builder = builder.header("Accept", "application/json");
        let builder = if self.credentials.include_cookies() {
            builder.credentials(RequestCredentials::Include)
        } else {
            builder
        };
        match self.credentials.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn dispatch(
        &self,
        verb: Verb,
        path: &str,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Encode(e.to_string()))?;
        tracing::debug!("{} {}", verb.as_str(), path);

        let response = request.send().await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", verb.as_str(), path, e);
            ApiError::Network
        })?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_error_body(status, &body);
        tracing::warn!("{} {} -> {}: {}", verb.as_str(), path, status, err);
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|_| ApiError::Malformed { status })?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!("undecodable body ({}): {}", status, e);
            ApiError::Malformed { status }
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.builder(Verb::Get, path).build();
        let response = self.dispatch(Verb::Get, path, request).await?;
        Self::decode(response).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let request = self
            .builder(Verb::Get, path)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())))
            .build();
        let response = self.dispatch(Verb::Get, path, request).await?;
        Self::decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self.builder(Verb::Post, path).json(body);
        let response = self.dispatch(Verb::Post, path, request).await?;
        Self::decode(response).await
    }

    /// POST without a body whose response body is ignored.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let request = self.builder(Verb::Post, path).build();
        self.dispatch(Verb::Post, path, request).await.map(|_| ())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self.builder(Verb::Put, path).json(body);
        let response = self.dispatch(Verb::Put, path, request).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.builder(Verb::Delete, path).build();
        self.dispatch(Verb::Delete, path, request).await.map(|_| ())
    }
}
