use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Move and claim bodies are a handful of integers.
pub const MAX_BODY_BYTES: usize = 4 * 1024;

/// JSON body extractor whose failures render as `BAD_REQUEST` problem
/// details.
///
/// Absent fields are not failures here: request types use `Option` fields
/// and the domain reports what is missing.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(_req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let payload = payload.take();

        Box::pin(async move {
            let body = read_body(payload).await?;
            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(error = %e, body_size = body.len(), "JSON parsing failed");
                AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e))
            })?;
            Ok(ValidatedJson(parsed))
        })
    }
}

async fn read_body(mut payload: Payload) -> Result<BytesMut, AppError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(error = %e, "Failed to read request body chunk");
            AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
        })?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(AppError::bad_request(
                ErrorCode::BadRequest,
                format!("Request body exceeds {MAX_BODY_BYTES} bytes"),
            ));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Detail text that names the failure class without echoing the body.
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: wrong types for one or more fields".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
