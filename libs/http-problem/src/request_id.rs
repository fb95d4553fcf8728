use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header the HTTP host stamps on every request before it reaches a handler.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id read from `x-request-id`, so problems can echo it back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestIdHeader(pub Option<String>);

impl RequestIdHeader {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for RequestIdHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_owned);
        Ok(Self(id))
    }
}
