use serde::{de::DeserializeOwned, Serialize};
use std::{borrow::Cow, time::Duration};

const DEFAULT_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/*----- */
// Security Type
/*----- */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityType {
    /// Public market data, no key and no signature
    None,
    /// Account scoped data, requires key header plus timestamp and signature
    UserData,
}

/*----- */
// Rest Request
/*----- */
pub trait RestRequest {
    type Response: DeserializeOwned;
    type QueryParams: Serialize;

    fn path(&self) -> Cow<'static, str>;

    fn method() -> reqwest::Method;

    fn query_params(&self) -> Option<&Self::QueryParams> {
        None
    }

    fn security() -> SecurityType {
        SecurityType::UserData
    }

    fn timeout() -> Duration {
        DEFAULT_HTTP_REQUEST_TIMEOUT
    }
}
