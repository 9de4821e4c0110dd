use actix_web::{web, App, HttpServer};
use dice_odds::config::ServerConfig;
use dice_odds::infra::state::build_state;
use dice_odds::middleware::request_trace::RequestTrace;
use dice_odds::middleware::structured_logger::StructuredLogger;
use dice_odds::middleware::trace_span::TraceSpan;
use dice_odds::routes;
use dice_odds::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // DICE_ODDS_HOST, DICE_ODDS_PORT, DICE_ODDS_MAX_PLAYERS, DICE_ODDS_MAX_GAMES
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🎲 Starting Dice Odds on http://{}:{} (max {} players, {} games)",
        config.host, config.port, config.limits.max_players, config.limits.max_games
    );

    let data = web::Data::new(build_state().with_limits(config.limits).build());

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
