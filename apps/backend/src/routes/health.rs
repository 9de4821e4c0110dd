use actix_web::{web, HttpResponse};

use crate::error::AppError;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Dice Odds: what are the chances? 🎲"))
}

async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("ok"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
