use actix_web::{App, HttpServer, web};

use court_practice_analyzer::api;
use court_practice_analyzer::app::AppState;
use court_practice_analyzer::model::Config;
use court_practice_analyzer::telemetry;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    telemetry::init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    // Refuse to start without the language-model credential
    let state = AppState::new(config).map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize application");
        std::io::Error::other(e)
    })?;

    let analysis_service = web::Data::from(state.analysis_service);

    tracing::info!("Starting court practice analyzer on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(analysis_service.clone())
            .configure(api::analysis::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
