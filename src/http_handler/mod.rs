pub(crate) mod http_client;
pub(crate) mod http_request;
pub(crate) mod http_response;
mod http_handler_common;

#[cfg(test)]
mod tests;

pub use http_handler_common::{ApiId, NO_PARAMS};
pub use http_request::request_common::RequestError;
