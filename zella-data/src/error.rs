use reqwest::Error;
use thiserror::Error;

/*----- */
// SocketError
/*----- */
#[derive(Debug, Error)]
pub enum SocketError {
    #[error("Deserialising JSON error: {error} for binary payload: {payload:?}")]
    DeserialiseBinary {
        error: serde_json::Error,
        payload: Vec<u8>,
    },

    #[error("Serialising query params error: {0}")]
    QueryParams(#[from] serde_urlencoded::ser::Error),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("HTTP request timed out")]
    HttpTimeout(reqwest::Error),

    /// REST http response error
    #[error("HTTP response (status={0}) error: {1}")]
    HttpResponse(reqwest::StatusCode, String),

    /// Venue rejected the request with its own error code
    #[error("{exchange} API error (status={status}, code={code}): {msg}")]
    ExchangeApi {
        exchange: &'static str,
        status: reqwest::StatusCode,
        code: i64,
        msg: String,
    },

    #[error("Unauthorised: {0}")]
    Unauthorised(String),

    #[error("Failed to build request: {0}")]
    RequestBuild(#[from] RequestBuildError),
}

impl From<reqwest::Error> for SocketError {
    fn from(error: Error) -> Self {
        match error {
            error if error.is_timeout() => SocketError::HttpTimeout(error),
            error => SocketError::Http(error),
        }
    }
}

/*----- */
// Request Builder Errors
/*----- */
#[derive(Error, Debug)]
pub enum RequestBuildError {
    #[error("{exchange} failed to build for {request} request as {field} is mandatory")]
    MandatoryField {
        exchange: &'static str,
        request: &'static str,
        field: &'static str,
    },

    #[error("invalid HMAC key for {exchange}")]
    InvalidKey { exchange: &'static str },
}
