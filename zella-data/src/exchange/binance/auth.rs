use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{
    error::{RequestBuildError, SocketError},
    protocols::http::{
        request_builder::{Authenticator, ExchangeRequestBuilder},
        rest_request::{RestRequest, SecurityType},
    },
    shared::utils::current_timestamp_utc,
};

/*----- */
// Convenient types
/*----- */
type HmacSha256 = Hmac<Sha256>;

pub const BINANCE_API_KEY_HEADER: &str = "X-MBX-APIKEY";

/*----- */
// Binance API Authentication
/*----- */
#[derive(Clone)]
pub struct BinanceAuthParams {
    key: String,
    secret: String,
}

impl BinanceAuthParams {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

// Never print the secret
impl fmt::Debug for BinanceAuthParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinanceAuthParams")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Authenticator for BinanceAuthParams {
    fn api_key(&self) -> &str {
        &self.key
    }

    #[inline]
    fn generate_signature(&self, request_str: &str) -> Result<String, RequestBuildError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| RequestBuildError::InvalidKey { exchange: "Binance" })?;
        mac.update(request_str.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/*----- */
// Impl ExchangeRequestBuilder for Binance
/*----- */
#[derive(Debug)]
pub struct BinanceRequestBuilder {
    auth: BinanceAuthParams,
}

impl BinanceRequestBuilder {
    pub fn new(auth: BinanceAuthParams) -> Self {
        Self { auth }
    }
}

impl ExchangeRequestBuilder for BinanceRequestBuilder {
    type AuthParams = BinanceAuthParams;

    fn auth(&self) -> &Self::AuthParams {
        &self.auth
    }

    fn build_signed_request<Request>(
        &self,
        mut builder: reqwest::RequestBuilder,
        request: &Request,
    ) -> Result<reqwest::Request, SocketError>
    where
        Request: RestRequest,
    {
        let mut total_params = match request.query_params() {
            Some(query_params) => {
                builder = builder.query(query_params);
                serde_urlencoded::to_string(query_params)?
            }
            None => String::new(),
        };

        if Request::security() == SecurityType::None {
            return Ok(builder.build()?);
        }

        // Signature covers the exact query string sent, timestamp last
        let timestamp = current_timestamp_utc();
        if !total_params.is_empty() {
            total_params.push('&');
        }
        total_params.push_str(&format!("timestamp={timestamp}"));
        let signature = self.auth.generate_signature(&total_params)?;

        Ok(builder
            .query(&[("timestamp", timestamp)])
            .query(&[("signature", signature)])
            .header(BINANCE_API_KEY_HEADER, self.auth.api_key())
            .build()?)
    }
}

/*----- */
// Tests
/*----- */
