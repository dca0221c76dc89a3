use crate::error::ConfigError;
use crate::livekit::LiveKitConfig;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "./static";

// --- Unified Configuration Struct ---
/// Process-wide settings, built once at startup and shared read-only with
/// every worker through `web::Data`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub static_dir: PathBuf,
    pub livekit: LiveKitConfig,
}

impl AppConfig {
    /// Loads configuration from the process environment, after pulling in the
    /// dotenv file if one exists.
    pub fn load() -> Result<Self, ConfigError> {
        crate::utils::ensure_dotenv_loaded();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset and empty variables both fall back to their defaults. The only
    /// failure is an `API_PORT` that is set but is not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match setting(&lookup, "API_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_SERVER_PORT,
        };

        let static_dir = setting(&lookup, "STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(AppConfig {
            server_port,
            static_dir,
            livekit: LiveKitConfig::from_lookup(&lookup),
        })
    }
}

/// Returns the variable's value, treating an empty string as unset.
pub(crate) fn setting<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.is_empty())
}
