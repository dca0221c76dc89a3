use crate::config::AppConfig;
use crate::health::health_check;
use crate::livekit::token_handler::{generate_token, json_config};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};

/// Registers the API routes and the static catch-all on `cfg`.
///
/// The static file service is mounted at `/` and must stay last so that it
/// only sees paths no API route claimed.
pub fn configure(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    cfg.app_data(web::Data::new(config.livekit.clone()))
        .app_data(json_config())
        .route("/token", web::post().to(generate_token))
        .route("/health", web::get().to(health_check))
        .service(Files::new("/", config.static_dir.clone()).index_file("index.html"));
}

/// Fully open CORS policy: any origin (echoed back), GET/POST/OPTIONS, any
/// header, credentials allowed.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .supports_credentials()
}

/// Binds on all interfaces at the configured port and serves until shutdown.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let port = config.server_port;

    log::info!("API Server starting on http://localhost:{port}");
    log::info!("LiveKit URL: {}", config.livekit.url);
    log::info!("Serving static files from {}", config.static_dir.display());

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .configure(|cfg| configure(cfg, &config))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
