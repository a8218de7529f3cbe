use crate::http_handler::http_request::request_common::RequestError;

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, RequestError>;
}

/// Hands the `reqwest::Response` back untouched, whatever its status code.
#[derive(Debug)]
pub(crate) struct PassThroughResponse;

impl HTTPResponseType for PassThroughResponse {
    type ParsedResponseType = reqwest::Response;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, RequestError> {
        Ok(response)
    }
}
