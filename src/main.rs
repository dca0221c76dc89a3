use livekit_token_server::{config::AppConfig, server, utils};
use std::io;

/// The main entry point for the application.
///
/// Loads the environment file (first command-line argument, `.env` by
/// default), initializes logging, reads the configuration and runs the HTTP
/// server until it is shut down.
///
/// # Returns
///
/// An error if the configuration is invalid or the server cannot bind its
/// port.
#[actix_web::main]
async fn main() -> io::Result<()> {
    // .env first so RUST_LOG can come from it
    let env_file = utils::ensure_dotenv_loaded();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    log::info!("📦 Loading environment from {env_file}");

    let config = AppConfig::load().map_err(|e| {
        log::error!("Configuration failed: {e}");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    server::run(config).await
}
