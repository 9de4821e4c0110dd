//! One `request_completed` event per request.
//!
//! Server errors log at `error`, client errors (rejected moves, unknown games)
//! at `warn`, everything else at `info`.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let log = CompletedRequest::start(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            log.finish(status);
            result
        })
    }
}

/// Fields captured before the request is handed on.
struct CompletedRequest {
    method: String,
    path: String,
    trace_id: String,
    started: Instant,
}

impl CompletedRequest {
    fn start(req: &ServiceRequest) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            trace_id: req
                .extensions()
                .get::<String>()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
            started: Instant::now(),
        }
    }

    fn finish(self, status: StatusCode) {
        let Self {
            method,
            path,
            trace_id,
            started,
        } = self;
        let status_code = status.as_u16();
        let duration_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        if status.is_server_error() {
            error!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, message = "request_completed");
        } else if status.is_client_error() {
            warn!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, message = "request_completed");
        } else {
            info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, message = "request_completed");
        }
    }
}
