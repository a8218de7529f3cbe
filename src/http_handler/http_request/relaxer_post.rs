use super::super::http_client::HTTPClient;
use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, RequestError,
};
use super::response_common::PassThroughResponse;
use url::Url;

/// Request type for `POST /relax/relaxer/send`.
///
/// Unlike the documentation endpoints this one lives on the application's own
/// origin, the configured endpoint root is ignored.
#[derive(Debug)]
pub(crate) struct RelaxerRequest<'a, B: ?Sized> {
    pub(crate) params: &'a B,
}

impl<B: serde::Serialize + ?Sized> JSONBodyHTTPRequestType for RelaxerRequest<'_, B> {
    type Body = B;
    fn body(&self) -> &B { self.params }
}

impl<B: ?Sized> HTTPRequestType for RelaxerRequest<'_, B> {
    type Response = PassThroughResponse;
    fn endpoint(&self) -> &'static str { "/relax/relaxer/send" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn request_url(&self, client: &HTTPClient) -> Result<Url, RequestError> {
        Ok(client.origin().join(self.endpoint())?)
    }
}
