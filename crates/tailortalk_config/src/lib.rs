use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Configuration is layered: `config/default` is read first, then
/// `config/{RUN_ENV}` (defaulting to `debug`), and finally `APP`-prefixed
/// environment variables override everything (e.g. `APP_SERVER__PORT=9000`).
/// Both files are optional so a bare environment-driven deployment works.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"));

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// This function checks if the dotenv file has already been loaded using a `OnceCell`.
/// If not, it loads the file named by `DOTENV_OVERRIDE`, falling back to ".env".
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path =
        std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
