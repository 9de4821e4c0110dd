#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, Error as ActixError};
use backend_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};
use serde_json::{json, Value};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Validates the Problem Details contract and the exact detail text.
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail: &str,
) -> ProblemDetailsLike {
    let status = StatusCode::from_u16(expected_status).expect("valid status code");
    let problem =
        assert_problem_details_from_service_response(resp, expected_code, status, None).await;
    assert_eq!(problem.detail, expected_detail);
    problem
}

/// Creates a round over HTTP and returns its id.
pub async fn create_game<S>(app: &S, players: u32) -> i64
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({ "players": players }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    body["game_id"].as_i64().expect("game_id should be an integer")
}

/// Posts a reveal and returns the raw response.
pub async fn post_move<S>(
    app: &S,
    game_id: i64,
    player: u32,
    dice: u32,
    value: u32,
) -> ServiceResponse<BoxBody>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{game_id}/moves"))
        .set_json(json!({ "player": player, "dice": dice, "value": value }))
        .to_request();
    test::call_service(app, req).await
}
