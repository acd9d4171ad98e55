use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, Error, FromRequest, HttpRequest};

/// Bearer token of the calling session, if the page sent one. Lookup of the
/// user behind it is left to the auth client so a bad form can be rejected
/// before any auth call is made.
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        ready(Ok(BearerToken(token)))
    }
}
