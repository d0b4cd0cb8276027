//! Optional JSON request bodies.

use std::future::{Future, ready};
use std::pin::Pin;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use serde::de::DeserializeOwned;

/// A JSON body that may be left out entirely.
///
/// A request without a body yields `None`. Any body that is sent goes
/// through the regular [`web::Json`] extractor, so malformed payloads are
/// rejected by the configured JSON error handler.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T> OptionalJson<T> {
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

fn has_body(req: &HttpRequest) -> bool {
    let headers = req.headers();
    let length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    match length {
        Some(len) => len > 0,
        None => {
            headers.contains_key(header::CONTENT_TYPE)
                || headers.contains_key(header::TRANSFER_ENCODING)
        }
    }
}

impl<T> FromRequest for OptionalJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !has_body(req) {
            return Box::pin(ready(Ok(OptionalJson(None))));
        }

        let json = web::Json::<T>::from_request(req, payload);
        Box::pin(async move { Ok(OptionalJson(Some(json.await?.into_inner()))) })
    }
}
