use super::http_response::response_common;

pub(crate) mod fetch_api_get;
pub(crate) mod list_apis_get;
pub(crate) mod relaxer_post;
pub(crate) mod request_common;
