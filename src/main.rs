//! Student registry server: connects, applies the schema, serves the API.

use student_registry::{app, apply_migrations, connect, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_registry=info")),
        )
        .init();

    let settings = Settings::from_env();
    let pool = connect(&settings.database_url).await?;
    apply_migrations(&pool).await?;

    let state = AppState { pool };
    let app = app(state);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
