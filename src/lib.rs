//! Asynchronous client binding for the relax API documentation service.
//!
//! ```no_run
//! use relax_client::{ClientConfig, RelaxApi, NO_PARAMS};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = RelaxApi::new(&ClientConfig::new("https://docs.example.com/"))?;
//! let listing = api.get().list_apis(Some(&[("page", "2")])).await?;
//! let entry = api.get().fetch_api(42, NO_PARAMS).await?;
//! let sent = api.post().relaxer(&serde_json::json!({ "name": "ping" })).await?;
//! # let _ = (listing, entry, sent);
//! # Ok(())
//! # }
//! ```

#[doc(hidden)]
pub use chrono;

pub mod logger;

mod api;
mod config;
mod http_handler;

pub use api::{GetEndpoints, PostEndpoints, RelaxApi};
pub use config::{API_ROOT_VAR, BASE_URL_VAR, ClientConfig, ConfigError, ORIGIN_VAR};
pub use http_handler::{ApiId, NO_PARAMS, RequestError};
pub use reqwest;
