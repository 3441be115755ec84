//! asklou server binary.
//!
//! Startup order: read settings, initialize tracing, prepare the data
//! directory and database, pick the completion provider, serve.
//!
//! `asklou seed` inserts the sample conversations and exits.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use asklou::api::{self, ApiContext};
use asklou::config::{self, Settings};
use asklou::provider::{CompletionProvider, MockProvider, OllamaClient};
use asklou::{db, seed};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = Settings::from_env();

    if let Some(parent) = settings.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if std::env::args().nth(1).as_deref() == Some("seed") {
        let conn = db::open_database(&settings.db_path).expect("Cannot open database");
        let inserted = seed::seed_sample_turns(&conn).expect("Seeding failed");
        tracing::info!(inserted, db = %settings.db_path.display(), "Seed complete");
        return Ok(());
    }

    // Run migrations up front so the first request does not pay for them.
    db::open_database(&settings.db_path).expect("Cannot open database");

    let provider: Arc<dyn CompletionProvider> = if settings.use_mock_provider {
        tracing::warn!("Using mock completion provider (ASKLOU_PROVIDER=mock)");
        Arc::new(MockProvider::replying(
            "This is a canned reply from the mock provider.",
        ))
    } else {
        Arc::new(OllamaClient::new(&settings.ollama_url, &settings.model))
    };

    let ctx = ApiContext::new(settings.db_path.clone(), provider, &settings.model);

    tracing::info!(
        model = %settings.model,
        db = %settings.db_path.display(),
        "Ask Lou ready"
    );

    api::serve(ctx, settings.addr).await
}
