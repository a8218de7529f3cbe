use crate::config::{ClientConfig, ConfigError};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

/// A simple wrapper around `reqwest::Client` holding the derived endpoint root
/// and the origin of the calling application.
///
/// Every request issued through this client carries `Content-Type: application/json`.
/// Apart from that the `reqwest` defaults apply, there is no explicit timeout.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// `{base_url}apidoc`, the root of all documentation endpoints.
    root: Url,
    /// Origin the relaxer endpoint is resolved against.
    origin: Url,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` from the given configuration.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if no base URL is configured, if the derived
    /// endpoint root or origin is not a valid absolute URL, or if the
    /// underlying client cannot be built.
    pub(crate) fn new(config: &ClientConfig) -> Result<HTTPClient, ConfigError> {
        let root = config.endpoint_root()?;
        let origin = config.resolved_origin(&root)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(ConfigError::ClientBuild)?;

        crate::event!("Relax API client configured for {root} (origin {origin})");
        Ok(HTTPClient { client, root, origin })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(crate) fn client(&self) -> &reqwest::Client { &self.client }
    pub(crate) fn root(&self) -> &Url { &self.root }
    pub(crate) fn origin(&self) -> &Url { &self.origin }
}
