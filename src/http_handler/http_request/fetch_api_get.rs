use super::super::ApiId;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::response_common::PassThroughResponse;

/// Request type for `GET {root}/{id}`, fetching a single API entry.
#[derive(Debug)]
pub(crate) struct FetchApiRequest<'a, Q: ?Sized> {
    /// The rendered `ApiId`, appended verbatim.
    segment: String,
    params: Option<&'a Q>,
}

impl<'a, Q: ?Sized> FetchApiRequest<'a, Q> {
    pub(crate) fn new(id: &ApiId, params: Option<&'a Q>) -> Self {
        Self { segment: id.to_string(), params }
    }
}

impl<Q: serde::Serialize + ?Sized> NoBodyHTTPRequestType for FetchApiRequest<'_, Q> {
    type Query = Q;
    fn query(&self) -> Option<&Q> { self.params }
}

impl<Q: ?Sized> HTTPRequestType for FetchApiRequest<'_, Q> {
    type Response = PassThroughResponse;
    fn endpoint(&self) -> &str { &self.segment }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
