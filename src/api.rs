//! The exported client surface.
//!
//! [`RelaxApi`] owns the single configured [`reqwest::Client`]. The wrapper
//! functions are grouped by HTTP method under [`RelaxApi::get`] and
//! [`RelaxApi::post`]. Every wrapper issues exactly one request and returns the
//! `reqwest::Response` unchanged, including non-success statuses.

use crate::config::{ClientConfig, ConfigError};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    fetch_api_get::FetchApiRequest,
    list_apis_get::ListApisRequest,
    relaxer_post::RelaxerRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
};
use crate::http_handler::{ApiId, RequestError};
use url::Url;

/// Client for the relax API documentation endpoints.
///
/// Read-only after construction, share it behind an `Arc` for concurrent use.
#[derive(Debug)]
pub struct RelaxApi {
    client: HTTPClient,
}

impl RelaxApi {
    /// Builds the client from an explicit configuration.
    ///
    /// # Errors
    /// Fails with [`ConfigError::MissingBaseUrl`] if `config` has no base URL,
    /// or with another [`ConfigError`] if the derived URLs are invalid.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self { client: HTTPClient::new(config)? })
    }

    /// Builds the client from `RELAX_API_ROOT` / `RELAX_BASE_URL` / `RELAX_ORIGIN`.
    ///
    /// # Errors
    /// See [`RelaxApi::new`].
    pub fn from_env() -> Result<Self, ConfigError> { Self::new(&ClientConfig::from_env()) }

    /// The raw configured client, for requests not covered by the wrappers.
    pub fn api_instance(&self) -> &reqwest::Client { self.client.client() }

    /// `{base_url}apidoc`
    pub fn root(&self) -> &Url { self.client.root() }

    /// Origin the relaxer endpoint is resolved against.
    pub fn origin(&self) -> &Url { self.client.origin() }

    /// The GET wrappers, `list_apis` and `fetch_api`.
    pub fn get(&self) -> GetEndpoints<'_> { GetEndpoints { client: &self.client } }

    /// The POST wrappers, `relaxer`.
    pub fn post(&self) -> PostEndpoints<'_> { PostEndpoints { client: &self.client } }
}

/// The GET wrappers of a [`RelaxApi`].
#[derive(Debug, Clone, Copy)]
pub struct GetEndpoints<'a> {
    client: &'a HTTPClient,
}

impl GetEndpoints<'_> {
    /// `GET {root}` with `params` serialized as the query string.
    ///
    /// Pass [`NO_PARAMS`](crate::NO_PARAMS) to send no query string.
    ///
    /// # Errors
    /// Returns the underlying [`reqwest::Error`] wrapped in [`RequestError::Transport`].
    pub async fn list_apis<Q>(&self, params: Option<&Q>) -> Result<reqwest::Response, RequestError>
    where Q: serde::Serialize + ?Sized {
        ListApisRequest { params }.send_request(self.client).await
    }

    /// `GET {root}/{id}` with `params` serialized as the query string.
    ///
    /// # Errors
    /// Returns the underlying [`reqwest::Error`] wrapped in [`RequestError::Transport`].
    pub async fn fetch_api<Q>(
        &self,
        id: impl Into<ApiId>,
        params: Option<&Q>,
    ) -> Result<reqwest::Response, RequestError>
    where
        Q: serde::Serialize + ?Sized,
    {
        FetchApiRequest::new(&id.into(), params).send_request(self.client).await
    }
}

/// The POST wrappers of a [`RelaxApi`].
#[derive(Debug, Clone, Copy)]
pub struct PostEndpoints<'a> {
    client: &'a HTTPClient,
}

impl PostEndpoints<'_> {
    /// `POST {origin}/relax/relaxer/send` with `params` as JSON text body.
    ///
    /// The endpoint root is bypassed, the path resolves against the
    /// application's origin.
    ///
    /// # Errors
    /// [`RequestError::Serialization`] if `params` cannot be serialized,
    /// [`RequestError::Transport`] for anything `reqwest` reports.
    pub async fn relaxer<B>(&self, params: &B) -> Result<reqwest::Response, RequestError>
    where B: serde::Serialize + ?Sized {
        RelaxerRequest { params }.send_request(self.client).await
    }
}
