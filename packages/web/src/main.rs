use anyhow::Context as _;
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use web::AppState;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let settings = api::Settings::new().context("Failed to load settings")?;
    if settings.uses_default_secret() {
        tracing::warn!("SECRET_KEY is not set; sessions are signed with the development default");
    }

    let pool = api::db::connect(&settings.database.url)
        .await
        .context("Failed to connect to database")?;
    api::db::migrate(&pool)
        .await
        .context("Failed to run migrations")?;

    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to migrate session store")?;

    let app = web::app(AppState { pool }, session_store, &settings.secret.key);

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
