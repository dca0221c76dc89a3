use once_cell::sync::OnceCell;
use std::env;

static INIT_DOTENV: OnceCell<String> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is named by the first command line argument and defaults to
/// `.env`. It is read at most once per process; later calls return the path
/// that was used the first time. Variables that are already set in the process
/// environment are left untouched, and a missing file is silently ignored.
pub fn ensure_dotenv_loaded() -> &'static str {
    INIT_DOTENV.get_or_init(|| {
        let dotenv_path = env::args().nth(1).unwrap_or_else(|| ".env".to_string());
        dotenv::from_filename(&dotenv_path).ok();
        dotenv_path
    })
}
