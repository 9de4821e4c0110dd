//! Assertions over Problem Details (RFC 7807) error responses.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Mirror of the server's error body.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Asserts the stable error contract on raw response parts and returns the
/// parsed body for further checks.
///
/// Checks the status, the problem+json content type, `x-trace-id` parity with
/// the body's `trace_id`, the error code, and optionally a detail substring.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status);

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body_str =
        std::str::from_utf8(body_bytes).expect("Response body should be valid UTF-8");
    let problem: ProblemDetailsLike = serde_json::from_str(body_str).unwrap_or_else(|_| {
        panic!("Failed to parse error body as ProblemDetails. Raw body: {body_str}")
    });

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id_header.is_empty(), "x-trace-id should not be empty");
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("https://dice-odds.dev/errors/{expected_code}"));

    if let Some(expected_detail) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected_detail),
            "Expected detail to contain '{}', but got '{}'",
            expected_detail,
            problem.detail
        );
    }

    problem
}

/// Same as [`assert_problem_details_from_parts`] for an Actix test response.
pub async fn assert_problem_details_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    )
}
