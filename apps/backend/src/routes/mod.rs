use actix_web::web;

pub mod games;
pub mod health;

/// Configure application routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
