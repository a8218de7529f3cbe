use super::super::http_client::HTTPClient;
use super::response_common::HTTPResponseType;
use strum_macros::Display;
use url::Url;

/// HTTP methods used by the relax endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum HTTPRequestMethod {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
        }
    }
}

pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Path below the endpoint root, empty for the root itself.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }

    /// Resolves `{root}/{endpoint}` by plain concatenation, the endpoint is not escaped.
    fn request_url(&self, client: &HTTPClient) -> Result<Url, RequestError> {
        let endpoint = self.endpoint();
        if endpoint.is_empty() {
            return Ok(client.root().clone());
        }
        Ok(Url::parse(&format!("{}/{endpoint}", client.root()))?)
    }
}

/// Requests without a body, optionally carrying query parameters.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    type Query: serde::Serialize + ?Sized;
    fn query(&self) -> Option<&Self::Query>;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, RequestError> {
        let url = self.request_url(client)?;
        crate::event!("{} {url}", self.request_method());
        let mut request = client
            .client()
            .request(self.request_method().into(), url)
            .headers(self.header_params());
        if let Some(query) = self.query() {
            request = request.query(query);
        }
        let response = request.send().await?;
        <Self::Response as HTTPResponseType>::read_response(response).await
    }
}

/// Requests sending their body as serialized JSON text.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize + ?Sized;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, RequestError> {
        let url = self.request_url(client)?;
        let body = serde_json::to_string(self.body())?;
        crate::event!("{} {url} ({} bytes)", self.request_method(), body.len());
        let response = client
            .client()
            .request(self.request_method().into(), url)
            .headers(self.header_params())
            .body(body)
            .send()
            .await?;
        <Self::Response as HTTPResponseType>::read_response(response).await
    }
}

/// Failures while issuing a request. The underlying library errors are kept unchanged.
#[derive(Debug, Display)]
pub enum RequestError {
    /// Anything `reqwest` rejects: connection failures, invalid query parameters, ...
    Transport(reqwest::Error),
    /// The JSON body could not be serialized.
    Serialization(serde_json::Error),
    /// The endpoint did not form a valid URL together with the root or origin.
    InvalidUrl(url::ParseError),
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Transport(err) => Some(err),
            RequestError::Serialization(err) => Some(err),
            RequestError::InvalidUrl(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self { RequestError::Transport(value) }
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self { RequestError::Serialization(value) }
}

impl From<url::ParseError> for RequestError {
    fn from(value: url::ParseError) -> Self { RequestError::InvalidUrl(value) }
}
