use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "asklou";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Model the default local Ollama install serves.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default Ollama instance address.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default API bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Get the application data directory (~/.asklou/ on all platforms)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(".asklou")
}

/// Get the default database path
pub fn default_db_path() -> PathBuf {
    app_data_dir().join("asklou.db")
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
    pub model: String,
    pub ollama_url: String,
    pub use_mock_provider: bool,
}

impl Settings {
    /// Read settings from the environment, falling back to defaults.
    ///
    /// - `ASKLOU_ADDR` — API bind address
    /// - `ASKLOU_DB` — database file path
    /// - `ASKLOU_MODEL` — model name to request from Ollama
    /// - `OLLAMA_URL` — Ollama base URL
    /// - `ASKLOU_PROVIDER=mock` — canned provider instead of Ollama
    pub fn from_env() -> Self {
        let addr = std::env::var("ASKLOU_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .expect("Invalid ASKLOU_ADDR");

        let db_path = std::env::var("ASKLOU_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_db_path());

        let model = std::env::var("ASKLOU_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let ollama_url =
            std::env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        let use_mock_provider = matches!(std::env::var("ASKLOU_PROVIDER").as_deref(), Ok("mock"));

        Self {
            addr,
            db_path,
            model,
            ollama_url,
            use_mock_provider,
        }
    }
}
