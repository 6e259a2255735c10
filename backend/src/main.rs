use rakshak_backend::{
    build_router,
    config::Config,
    db::connection::{create_pool, run_migrations, DbPool},
    state::AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rakshak_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        database_url = %mask_secret(&config.database_url),
        jwt_secret = %mask_secret(&config.jwt_secret),
        jwt_expiration_hours = config.jwt_expiration_hours,
        time_zone = %config.time_zone,
        password_reset_ttl_minutes = config.password_reset_ttl_minutes,
        task_deadline_days = config.task_deadline_days,
        frontend_url = %config.frontend_url,
        smtp_host = %config.smtp.host,
        smtp_password = %mask_secret(&config.smtp.password),
        smtp_skip_send = config.smtp.skip_send,
        "Loaded configuration from environment/.env"
    );

    // Initialize database
    let pool: DbPool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;

    let bind_addr = config.bind_addr.clone();
    let state = AppState::with_smtp(pool, config)?;
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
