use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::response_common::PassThroughResponse;

/// Request type for `GET {root}`, listing the documented APIs.
#[derive(Debug)]
pub(crate) struct ListApisRequest<'a, Q: ?Sized> {
    pub(crate) params: Option<&'a Q>,
}

impl<Q: serde::Serialize + ?Sized> NoBodyHTTPRequestType for ListApisRequest<'_, Q> {
    type Query = Q;
    fn query(&self) -> Option<&Q> { self.params }
}

impl<Q: ?Sized> HTTPRequestType for ListApisRequest<'_, Q> {
    type Response = PassThroughResponse;
    fn endpoint(&self) -> &'static str { "" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
