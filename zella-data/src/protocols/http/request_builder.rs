use crate::error::{RequestBuildError, SocketError};

use super::rest_request::RestRequest;

/*----- */
// Authenticator
/*----- */
pub trait Authenticator {
    fn api_key(&self) -> &str;

    fn generate_signature(&self, request_str: &str) -> Result<String, RequestBuildError>;
}

/*----- */
// ExchangeRequestBuilder
/*----- */
pub trait ExchangeRequestBuilder {
    type AuthParams: Authenticator;

    fn auth(&self) -> &Self::AuthParams;

    fn build_signed_request<Request>(
        &self,
        builder: reqwest::RequestBuilder,
        request: &Request,
    ) -> Result<reqwest::Request, SocketError>
    where
        Request: RestRequest;
}
