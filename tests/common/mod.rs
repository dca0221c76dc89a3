use actix_web::{dev::ServiceResponse, test, App};
use livekit_token_server::{config::AppConfig, server};

/// Configuration with every variable unset, i.e. the development defaults.
pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|_| None).expect("default config is valid")
}

pub async fn setup_test_app(
    config: AppConfig,
) -> impl actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
    test::init_service(App::new().configure(|cfg| server::configure(cfg, &config))).await
}
