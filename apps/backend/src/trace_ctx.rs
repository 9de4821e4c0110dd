//! Task-local trace context for web requests.
//!
//! `RequestTrace` opens the scope for every request so that error responses
//! rendered deep inside a handler can still report the request's trace id.
//! Domain code never reads it.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

const UNKNOWN: &str = "unknown";

/// Trace id of the current request, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` installed as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
