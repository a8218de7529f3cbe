use strum_macros::Display;
use url::Url;

/// Module level override of the API base URL.
pub const API_ROOT_VAR: &str = "RELAX_API_ROOT";
/// Application wide base URL, consulted when no override is set.
pub const BASE_URL_VAR: &str = "RELAX_BASE_URL";
/// Origin of the calling application, used by the relaxer endpoint.
pub const ORIGIN_VAR: &str = "RELAX_ORIGIN";

/// Path appended verbatim to the base URL to form the endpoint root.
const API_DOC_PATH: &str = "apidoc";

/// Configuration of a [`RelaxApi`](crate::RelaxApi) client.
///
/// The endpoint root is derived by plain string concatenation of the base URL
/// and `apidoc`, so a base URL is expected to end with a `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint except the relaxer is resolved against.
    base_url: Option<String>,
    /// Explicit application origin. Derived from the base URL if unset.
    origin: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: Some(base_url.into()), origin: None }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Resolves the configuration from the process environment.
    ///
    /// See [`ClientConfig::from_lookup`] for the resolution order.
    pub fn from_env() -> Self { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Resolves the configuration through an arbitrary key lookup.
    ///
    /// `RELAX_API_ROOT` takes precedence over `RELAX_BASE_URL`. Empty values
    /// count as unset. `RELAX_ORIGIN` optionally pins the application origin.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            base_url: non_empty(API_ROOT_VAR).or_else(|| non_empty(BASE_URL_VAR)),
            origin: non_empty(ORIGIN_VAR),
        }
    }

    pub fn base_url(&self) -> Option<&str> { self.base_url.as_deref() }
    pub fn origin(&self) -> Option<&str> { self.origin.as_deref() }

    /// Builds `{base_url}apidoc`.
    pub(crate) fn endpoint_root(&self) -> Result<Url, ConfigError> {
        let base_url = self.base_url.as_deref().ok_or(ConfigError::MissingBaseUrl)?;
        let root = Url::parse(&format!("{base_url}{API_DOC_PATH}"))
            .map_err(ConfigError::InvalidBaseUrl)?;
        if root.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(root.to_string()));
        }
        Ok(root)
    }

    /// The explicit origin if configured, otherwise scheme, host and port of `root`.
    pub(crate) fn resolved_origin(&self, root: &Url) -> Result<Url, ConfigError> {
        let origin = match &self.origin {
            Some(origin) => origin.clone(),
            None => root.origin().ascii_serialization(),
        };
        Url::parse(&origin).map_err(ConfigError::InvalidOrigin)
    }
}

#[derive(Debug, Display)]
pub enum ConfigError {
    /// Neither an explicit base URL nor one of the environment variables was set.
    MissingBaseUrl,
    InvalidBaseUrl(url::ParseError),
    /// The endpoint root parsed, but cannot carry path segments (e.g. `mailto:`).
    CannotBeABase(String),
    InvalidOrigin(url::ParseError),
    ClientBuild(reqwest::Error),
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidBaseUrl(err) | ConfigError::InvalidOrigin(err) => Some(err),
            ConfigError::ClientBuild(err) => Some(err),
            ConfigError::MissingBaseUrl | ConfigError::CannotBeABase(_) => None,
        }
    }
}
